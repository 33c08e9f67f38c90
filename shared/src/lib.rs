//! Shared utilities and common types for the OTP mailer server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - Error types and response structures
//! - Utility functions (e-mail masking)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, Environment, LogStoreConfig, MailConfig, OtpConfig, ServerConfig, SmtpConfig,
    VerifyPolicy,
};
pub use errors::{ConfigError, ErrorResponse};
pub use utils::email;
