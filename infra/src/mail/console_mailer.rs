//! Console mail transport for development

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use otp_core::domain::entities::OtpCode;
use otp_core::services::NotificationSender;
use otp_shared::email::mask_email;

use super::{otp_body, OTP_SUBJECT};

/// Writes codes to the log instead of e-mailing them
#[derive(Debug, Default)]
pub struct ConsoleMailer {
    message_count: AtomicUsize,
}

impl ConsoleMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages "sent" so far
    pub fn message_count(&self) -> usize {
        self.message_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationSender for ConsoleMailer {
    async fn send_code(&self, address: &str, code: &OtpCode) -> Result<String, String> {
        self.message_count.fetch_add(1, Ordering::SeqCst);
        let message_id = format!("console_{}", uuid::Uuid::new_v4());

        tracing::info!(
            to = %mask_email(address),
            subject = OTP_SUBJECT,
            body = %otp_body(code),
            message_id = %message_id,
            "[console mail]"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Console"
    }
}
