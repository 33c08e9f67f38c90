//! Types for verification service results

use crate::domain::entities::{IssuanceRecord, OtpCode};

/// Result of a successful issuance
#[derive(Debug, Clone)]
pub struct IssuedCode {
    /// The code that was delivered
    pub code: OtpCode,
    /// The record appended to the issuance log
    pub record: IssuanceRecord,
    /// Message id reported by the transport
    pub message_id: String,
}

/// Result of checking a submitted code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOutcome {
    /// The submitted code equals the latest issued code
    Valid,
    /// A code was issued but the submission differs from it
    Invalid,
}

impl VerifyOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, VerifyOutcome::Valid)
    }
}
