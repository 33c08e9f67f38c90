//! Integration tests for the file-backed issuance log driving the
//! verification service end to end.

use std::path::PathBuf;
use std::sync::Arc;

use otp_core::domain::entities::{IssuanceRecord, OtpCode};
use otp_core::repositories::IssuanceLog;
use otp_core::services::verification::mock::{MockNotificationSender, SequenceCodeGenerator};
use otp_core::services::{VerificationService, VerificationServiceConfig, VerifyOutcome};
use otp_core::errors::VerifyError;
use otp_infra::JsonlIssuanceLog;
use otp_shared::config::LogStoreConfig;

fn temp_dir() -> PathBuf {
    std::env::temp_dir().join(format!("otp-log-it-{}", uuid::Uuid::new_v4()))
}

#[tokio::test]
async fn test_records_survive_reopen() {
    let dir = temp_dir();
    let config = LogStoreConfig::new(&dir);

    {
        let log = JsonlIssuanceLog::open(&config).await.unwrap();
        log.append(IssuanceRecord::new("a@x.com", "555-0100", OtpCode::new(111_111).unwrap()))
            .await
            .unwrap();
    }

    let reopened = JsonlIssuanceLog::open(&config).await.unwrap();
    let latest = reopened.find_latest("a@x.com").await.unwrap().unwrap();
    assert_eq!(latest.code, "111111");
    assert_eq!(latest.contact, "555-0100");

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_open_preserves_existing_content() {
    let dir = temp_dir();
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("otp_logs.jsonl");
    std::fs::write(
        &path,
        "{\"Timestamp\":\"2024-01-01T00:00:00Z\",\"Email\":\"old@x.com\",\"Phone\":\"1\",\"OTP\":\"999999\"}\n",
    )
    .unwrap();

    let log = JsonlIssuanceLog::open(&LogStoreConfig::new(&dir)).await.unwrap();
    log.append(IssuanceRecord::new("a@x.com", "555-0100", OtpCode::new(123_456).unwrap()))
        .await
        .unwrap();

    let records = log.read_all().await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].address, "old@x.com");
    assert_eq!(records[0].code, "999999");
    assert_eq!(records[1].address, "a@x.com");

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_service_round_trip_over_file_log() {
    let dir = temp_dir();
    let log = Arc::new(JsonlIssuanceLog::open(&LogStoreConfig::new(&dir)).await.unwrap());
    let sender = Arc::new(MockNotificationSender::new(false));
    let service = VerificationService::new(
        log.clone(),
        sender.clone(),
        Arc::new(SequenceCodeGenerator::new(&[111_111, 222_222])),
        VerificationServiceConfig::default(),
    );

    service.issue("a@x.com", "555-0100").await.unwrap();
    service.issue("a@x.com", "555-0100").await.unwrap();

    assert_eq!(log.read_all().await.unwrap().len(), 2);
    assert_eq!(
        service.verify("a@x.com", "111111").await.unwrap(),
        VerifyOutcome::Invalid
    );
    assert_eq!(
        service.verify("a@x.com", "222222").await.unwrap(),
        VerifyOutcome::Valid
    );
    assert!(matches!(
        service.verify("b@x.com", "222222").await,
        Err(VerifyError::NotFound)
    ));

    let _ = std::fs::remove_dir_all(dir);
}

#[tokio::test]
async fn test_failed_delivery_leaves_file_untouched() {
    let dir = temp_dir();
    let log = Arc::new(JsonlIssuanceLog::open(&LogStoreConfig::new(&dir)).await.unwrap());
    let service = VerificationService::new(
        log.clone(),
        Arc::new(MockNotificationSender::new(true)),
        Arc::new(SequenceCodeGenerator::new(&[111_111])),
        VerificationServiceConfig::default(),
    );

    assert!(service.issue("a@x.com", "555-0100").await.is_err());
    assert!(log.read_all().await.unwrap().is_empty());
    assert_eq!(std::fs::read_to_string(log.path()).unwrap(), "");

    let _ = std::fs::remove_dir_all(dir);
}
