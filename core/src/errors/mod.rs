//! Domain-specific error types and error handling.

use thiserror::Error;

use crate::domain::entities::OtpCode;

/// Input validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field required: {field}")]
    RequiredField { field: String },
}

impl ValidationError {
    pub fn required(field: &str) -> Self {
        ValidationError::RequiredField {
            field: field.to_string(),
        }
    }
}

/// Failures of the issuance log backing store
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Issuance log I/O failure: {message}")]
    IoFailure { message: String },
}

impl LogError {
    pub fn io(message: impl Into<String>) -> Self {
        LogError::IoFailure {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        LogError::io(err.to_string())
    }
}

/// Errors returned when issuing a code
#[derive(Error, Debug)]
pub enum IssueError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The transport refused or timed out; nothing was recorded
    #[error("Code delivery failed: {message}")]
    DeliveryFailed { message: String },

    /// The code reached the recipient but the log append failed
    #[error("Code {code} was delivered but could not be recorded: {source}")]
    RecordFailed {
        code: OtpCode,
        #[source]
        source: LogError,
    },
}

/// Errors returned when verifying a code
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No code issued for this address")]
    NotFound,

    #[error(transparent)]
    Log(#[from] LogError),
}

pub type IssueResult<T> = Result<T, IssueError>;
pub type VerifyResult<T> = Result<T, VerifyError>;
