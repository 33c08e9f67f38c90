//! # OTP Core
//!
//! Core business logic and domain layer for the OTP mailer backend.
//! This crate contains domain entities, the verification service, the
//! issuance log interface, and the error types shared by the outer layers.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use repositories::*;
pub use services::*;
