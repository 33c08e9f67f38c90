//! Issuance record entity: one line of the issuance log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::otp_code::OtpCode;

/// A code that was successfully delivered to an address.
///
/// Records are immutable once appended. Several records may exist for the
/// same address; the most recently appended one is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuanceRecord {
    /// When the code was generated
    pub timestamp: DateTime<Utc>,

    /// E-mail address the code was sent to
    pub address: String,

    /// Secondary contact supplied by the caller (phone number). Stored only.
    pub contact: String,

    /// The code in decimal text form
    pub code: String,
}

impl IssuanceRecord {
    /// Create a record stamped with the current time
    pub fn new(address: impl Into<String>, contact: impl Into<String>, code: OtpCode) -> Self {
        Self::with_timestamp(Utc::now(), address, contact, code.as_text())
    }

    pub fn with_timestamp(
        timestamp: DateTime<Utc>,
        address: impl Into<String>,
        contact: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            address: address.into(),
            contact: contact.into(),
            code: code.into(),
        }
    }

    /// Exact comparison of the stored decimal text with a submitted code
    pub fn matches_code(&self, submitted: &str) -> bool {
        self.code == submitted
    }
}
