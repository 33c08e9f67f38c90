//! Domain entities representing core business objects.

pub mod issuance_record;
pub mod otp_code;

// Re-export commonly used types
pub use issuance_record::IssuanceRecord;
pub use otp_code::{OtpCode, CODE_LENGTH};
