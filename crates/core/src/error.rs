// Central Error Type for the Application

use crate::domain::DomainError;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NameTooLong { .. } | DomainError::InvalidServiceType(_) => {
                AppError::InvalidArgument(err.to_string())
            }
            DomainError::PositionOutOfRange { .. } | DomainError::QueueEmpty => {
                AppError::NotFound(err.to_string())
            }
        }
    }
}
