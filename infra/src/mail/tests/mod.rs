//! Unit tests for mail transports

use otp_core::domain::entities::OtpCode;
use otp_core::services::NotificationSender;
use otp_shared::config::{MailConfig, SmtpConfig};

use crate::mail::{create_mail_transport, otp_body, ConsoleMailer, MailTransport, SmtpMailer};
use crate::InfrastructureError;

fn smtp_config() -> SmtpConfig {
    SmtpConfig {
        host: "smtp.example.com".to_string(),
        port: 465,
        secure: true,
        username: "support@example.com".to_string(),
        password: "secret".to_string(),
        from: "Support <support@example.com>".to_string(),
        timeout_seconds: 5,
    }
}

#[test]
fn test_otp_body() {
    let code = OtpCode::new(123_456).unwrap();
    assert_eq!(otp_body(&code), "Your OTP is 123456");
}

#[tokio::test]
async fn test_console_mailer_counts_messages() {
    let mailer = ConsoleMailer::new();
    let code = OtpCode::new(123_456).unwrap();

    let id = mailer.send_code("a@x.com", &code).await.unwrap();
    assert!(id.starts_with("console_"));
    assert_eq!(mailer.message_count(), 1);
    assert_eq!(mailer.provider_name(), "Console");
}

#[tokio::test]
async fn test_smtp_mailer_builds_without_connecting() {
    let mailer = SmtpMailer::new(&smtp_config()).unwrap();
    assert_eq!(mailer.provider_name(), "SMTP");

    let message = mailer
        .build_message("a@x.com", &OtpCode::new(654_321).unwrap())
        .unwrap();
    let raw = String::from_utf8(message.formatted()).unwrap();
    assert!(raw.contains("Subject: Your OTP for Verification"));
    assert!(raw.contains("To: a@x.com"));
    assert!(raw.contains("Your OTP is 654321"));
}

#[tokio::test]
async fn test_smtp_mailer_rejects_bad_recipient_before_sending() {
    let mailer = SmtpMailer::new(&smtp_config()).unwrap();
    let err = mailer
        .send_code("not an address", &OtpCode::new(654_321).unwrap())
        .await
        .unwrap_err();
    assert!(err.contains("Invalid recipient address"));
}

#[tokio::test]
async fn test_smtp_mailer_rejects_bad_sender() {
    let mut config = smtp_config();
    config.from = "not a mailbox".to_string();
    assert!(matches!(
        SmtpMailer::new(&config),
        Err(InfrastructureError::Config(_))
    ));
}

#[tokio::test]
async fn test_create_mail_transport_selects_by_config() {
    let transport = create_mail_transport(&MailConfig::Console).unwrap();
    assert!(matches!(transport, MailTransport::Console(_)));
    assert_eq!(transport.provider_name(), "Console");

    let transport = create_mail_transport(&MailConfig::Smtp(smtp_config())).unwrap();
    assert!(matches!(transport, MailTransport::Smtp(_)));
}
