//! SMTP mail transport
//!
//! Delivers codes through the relay described by `SmtpConfig`. One attempt
//! is made per code; a relay that does not answer within the configured
//! timeout counts as a delivery failure.

use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;
use tracing::{debug, info};

use otp_core::domain::entities::OtpCode;
use otp_core::services::NotificationSender;
use otp_shared::config::SmtpConfig;
use otp_shared::email::mask_email;

use super::{otp_body, OTP_SUBJECT};
use crate::InfrastructureError;

/// Mail transport backed by an SMTP relay
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
    timeout: Duration,
}

impl SmtpMailer {
    /// Build the transport. No connection is made until the first send.
    pub fn new(config: &SmtpConfig) -> Result<Self, InfrastructureError> {
        let from: Mailbox = config.from.parse().map_err(|e| {
            InfrastructureError::Config(format!("MAIL_FROM is not a valid mailbox: {}", e))
        })?;
        let timeout = Duration::from_secs(config.timeout_seconds);
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        // Implicit TLS when secure, STARTTLS upgrade otherwise
        let relay = if config.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
        };
        let builder = relay.map_err(|e| {
            InfrastructureError::Config(format!("Invalid SMTP relay {}: {}", config.host, e))
        })?;

        let transport = builder
            .port(config.port)
            .credentials(credentials)
            .timeout(Some(timeout))
            .build();

        info!(
            host = %config.host,
            port = config.port,
            secure = config.secure,
            "SMTP mail transport initialized"
        );

        Ok(Self {
            transport,
            from,
            timeout,
        })
    }

    /// Compose the code e-mail for `address`
    pub fn build_message(&self, address: &str, code: &OtpCode) -> Result<Message, String> {
        let to: Mailbox = address
            .parse()
            .map_err(|e| format!("Invalid recipient address: {}", e))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(OTP_SUBJECT)
            .header(ContentType::TEXT_PLAIN)
            .body(otp_body(code))
            .map_err(|e| format!("Failed to build message: {}", e))
    }
}

#[async_trait]
impl NotificationSender for SmtpMailer {
    async fn send_code(&self, address: &str, code: &OtpCode) -> Result<String, String> {
        let message = self.build_message(address, code)?;

        debug!(to = %mask_email(address), "Sending code e-mail");

        let response = tokio::time::timeout(self.timeout, self.transport.send(message))
            .await
            .map_err(|_| format!("Mail relay timed out after {}s", self.timeout.as_secs()))?
            .map_err(|e| format!("Mail relay error: {}", e))?;

        let message_id = response
            .message()
            .next()
            .map(|line| line.to_string())
            .unwrap_or_else(|| response.code().to_string());

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }
}
