//! Configuration for the verification service

use otp_shared::config::{OtpConfig, VerifyPolicy};

/// Configuration for the verification service
#[derive(Debug, Clone, Default)]
pub struct VerificationServiceConfig {
    /// How submitted codes are checked
    pub verify_policy: VerifyPolicy,
}

impl VerificationServiceConfig {
    pub fn with_policy(verify_policy: VerifyPolicy) -> Self {
        Self { verify_policy }
    }
}

impl From<&OtpConfig> for VerificationServiceConfig {
    fn from(config: &OtpConfig) -> Self {
        Self::with_policy(config.verify_policy)
    }
}
