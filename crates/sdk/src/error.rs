//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// Server-side error codes (see `deskqueue-api-rpc`)
const INVALID_ARGUMENT: i32 = 4000;
const NOT_FOUND: i32 = 4001;

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("RPC error ({code}): {message}")]
    Rpc { code: i32, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl SdkError {
    /// The requested position (or head) does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, SdkError::Rpc { code, .. } if *code == NOT_FOUND)
    }

    /// The daemon rejected the name or service type
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, SdkError::Rpc { code, .. } if *code == INVALID_ARGUMENT)
    }
}

impl From<jsonrpsee::core::ClientError> for SdkError {
    fn from(e: jsonrpsee::core::ClientError) -> Self {
        match e {
            jsonrpsee::core::ClientError::Call(call_err) => SdkError::Rpc {
                code: call_err.code(),
                message: call_err.message().to_string(),
            },
            jsonrpsee::core::ClientError::Transport(e) => SdkError::Transport(e.to_string()),
            jsonrpsee::core::ClientError::RestartNeeded(_) => {
                SdkError::Connection("Connection restart needed".to_string())
            }
            jsonrpsee::core::ClientError::ParseError(e) => SdkError::Serialization(e),
            _ => SdkError::Other(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        let not_found = SdkError::Rpc {
            code: 4001,
            message: "queue empty".into(),
        };
        assert!(not_found.is_not_found());
        assert!(!not_found.is_invalid_argument());

        let invalid = SdkError::Rpc {
            code: 4000,
            message: "name too long".into(),
        };
        assert!(invalid.is_invalid_argument());
        assert!(!invalid.is_not_found());

        assert!(!SdkError::Transport("refused".into()).is_not_found());
    }
}
