// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("name too long: {len} characters (max {max})")]
    NameTooLong { len: usize, max: usize },

    #[error("invalid service type: {0:?} (expected \"N\" or \"P\")")]
    InvalidServiceType(String),

    #[error("no client at position {position} (queue length {len})")]
    PositionOutOfRange { position: i64, len: usize },

    #[error("queue empty")]
    QueueEmpty,
}

pub type Result<T> = std::result::Result<T, DomainError>;
