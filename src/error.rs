use thiserror::Error;

use crate::api::ApiError;
use crate::operation::OperationKind;

/// Input the user can fix before anything is sent.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no serial port selected")]
    MissingPort,
    #[error("no restore image selected")]
    MissingFile,
}

/// Why an operation did not complete. By the time one of these is returned it
/// has already been logged and rendered.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another operation holds the trigger or the serial link.
    #[error("{0} is already running")]
    Busy(OperationKind),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("server error: {0}")]
    Server(String),
}

impl From<ApiError> for OperationError {
    fn from(err: ApiError) -> Self {
        if err.is_server_side() {
            OperationError::Server(err.to_string())
        } else {
            OperationError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_split_into_server_and_transport() {
        assert_eq!(
            OperationError::from(ApiError::Status(404)),
            OperationError::Server("HTTP error! status: 404".to_string())
        );
        assert_eq!(
            OperationError::from(ApiError::Transport("connection refused".to_string())),
            OperationError::Transport("connection refused".to_string())
        );
        assert!(matches!(
            OperationError::from(ApiError::Decode("expected value".to_string())),
            OperationError::Transport(_)
        ));
    }
}
