//! Verification service module for e-mailed one-time codes
//!
//! This module provides the complete code workflow:
//! - Code generation
//! - Delivery through a notification sender
//! - Recording issued codes in the issuance log
//! - Checking submitted codes against the latest issuance

mod config;
mod generator;
pub mod mock;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::VerificationServiceConfig;
pub use generator::RandomCodeGenerator;
pub use service::VerificationService;
pub use traits::{CodeGenerator, NotificationSender};
pub use types::{IssuedCode, VerifyOutcome};
