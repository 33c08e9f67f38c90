//! Mail delivery module
//!
//! This module provides the notification senders that deliver one-time
//! codes by e-mail.
//!
//! ## Features
//!
//! - **SMTP**: Production delivery through a configured relay
//! - **Console**: Logs codes instead of sending them, for development
//! - **Security**: E-mail addresses are masked in logs

use async_trait::async_trait;

use otp_core::domain::entities::OtpCode;
use otp_core::services::NotificationSender;
use otp_shared::config::MailConfig;

pub mod console_mailer;
pub mod smtp_mailer;

pub use console_mailer::ConsoleMailer;
pub use smtp_mailer::SmtpMailer;

use crate::InfrastructureError;

/// Subject line of every code e-mail
pub const OTP_SUBJECT: &str = "Your OTP for Verification";

/// Plain-text body of a code e-mail
pub fn otp_body(code: &OtpCode) -> String {
    format!("Your OTP is {}", code)
}

/// The transport selected by configuration
pub enum MailTransport {
    Smtp(SmtpMailer),
    Console(ConsoleMailer),
}

#[async_trait]
impl NotificationSender for MailTransport {
    async fn send_code(&self, address: &str, code: &OtpCode) -> Result<String, String> {
        match self {
            MailTransport::Smtp(mailer) => mailer.send_code(address, code).await,
            MailTransport::Console(mailer) => mailer.send_code(address, code).await,
        }
    }

    fn provider_name(&self) -> &str {
        match self {
            MailTransport::Smtp(mailer) => mailer.provider_name(),
            MailTransport::Console(mailer) => mailer.provider_name(),
        }
    }
}

/// Create the mail transport described by `config`
///
/// An SMTP configuration that cannot be turned into a transport is an error.
pub fn create_mail_transport(config: &MailConfig) -> Result<MailTransport, InfrastructureError> {
    match config {
        MailConfig::Smtp(smtp) => Ok(MailTransport::Smtp(SmtpMailer::new(smtp)?)),
        MailConfig::Console => {
            tracing::warn!("Console mail transport selected; codes will be logged, not e-mailed");
            Ok(MailTransport::Console(ConsoleMailer::new()))
        }
    }
}

#[cfg(test)]
mod tests;
