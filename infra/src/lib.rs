//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the OTP mailer,
//! following Clean Architecture principles. It provides concrete
//! implementations of the collaborators the core services depend on.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Log store**: Durable, append-only issuance log on the local filesystem
//! - **Mail**: SMTP delivery through `lettre`, plus a console transport

// Re-export core types for convenience
pub use otp_core::errors::*;

/// Issuance log module - line-delimited JSON file
pub mod log_store;

/// Mail module - SMTP and console transports
pub mod mail;

pub use log_store::JsonlIssuanceLog;
pub use mail::{create_mail_transport, ConsoleMailer, MailTransport, SmtpMailer};

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Filesystem error while preparing the issuance log
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
