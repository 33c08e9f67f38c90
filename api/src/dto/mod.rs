//! Data Transfer Objects for API requests and responses

pub mod otp;

pub use otp::*;
pub use otp_shared::ErrorResponse;
