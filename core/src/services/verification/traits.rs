//! Traits for code generation and delivery

use async_trait::async_trait;

use crate::domain::entities::OtpCode;

/// Trait for delivering a code to an address
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Deliver `code` to `address`, returning a provider message id.
    ///
    /// Exactly one attempt is made; a timeout is reported as an error.
    async fn send_code(&self, address: &str, code: &OtpCode) -> Result<String, String>;
    /// Human-readable transport name for logs
    fn provider_name(&self) -> &str;
}

/// Trait for producing new codes
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> OtpCode;
}
