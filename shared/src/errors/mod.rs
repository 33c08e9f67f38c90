//! Shared error types and response structures

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error body returned by every failing endpoint: `{ "error": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Errors raised while loading configuration at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required configuration: {name}")]
    MissingVar { name: String },

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: String, value: String },
}

impl ConfigError {
    pub fn missing(name: &str) -> Self {
        ConfigError::MissingVar {
            name: name.to_string(),
        }
    }

    pub fn invalid(name: &str, value: impl Into<String>) -> Self {
        ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ErrorResponse::new("Invalid OTP")).unwrap();
        assert_eq!(body, serde_json::json!({ "error": "Invalid OTP" }));
    }

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::missing("MAIL_HOST").to_string(),
            "Missing required configuration: MAIL_HOST"
        );
        assert_eq!(
            ConfigError::invalid("MAIL_PORT", "abc").to_string(),
            "Invalid value for MAIL_PORT: abc"
        );
    }
}
