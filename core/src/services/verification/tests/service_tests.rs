//! Unit tests for verification service

use std::sync::Arc;

use otp_shared::config::VerifyPolicy;

use crate::errors::{IssueError, LogError, ValidationError, VerifyError};
use crate::repositories::{IssuanceLog, MockIssuanceLog};
use crate::services::verification::mock::{MockNotificationSender, SequenceCodeGenerator};
use crate::services::verification::{
    RandomCodeGenerator, VerificationService, VerificationServiceConfig, VerifyOutcome,
};

type TestService = VerificationService<MockIssuanceLog, MockNotificationSender, SequenceCodeGenerator>;

fn create_service(
    codes: &[u32],
    policy: VerifyPolicy,
) -> (TestService, Arc<MockIssuanceLog>, Arc<MockNotificationSender>) {
    let log = Arc::new(MockIssuanceLog::new());
    let sender = Arc::new(MockNotificationSender::new(false));
    let generator = Arc::new(SequenceCodeGenerator::new(codes));
    let service = VerificationService::new(
        log.clone(),
        sender.clone(),
        generator,
        VerificationServiceConfig::with_policy(policy),
    );
    (service, log, sender)
}

#[tokio::test]
async fn test_issue_delivers_and_records_code() {
    let log = Arc::new(MockIssuanceLog::new());
    let sender = Arc::new(MockNotificationSender::new(false));
    let service = VerificationService::new(
        log.clone(),
        sender.clone(),
        Arc::new(RandomCodeGenerator),
        VerificationServiceConfig::default(),
    );

    let issued = service.issue("a@x.com", "555-0100").await.unwrap();

    assert!(issued.message_id.starts_with("mock-msg-"));
    assert_eq!(sender.last_code_for("a@x.com"), Some(issued.code.as_text()));

    let records = log.records().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].address, "a@x.com");
    assert_eq!(records[0].contact, "555-0100");
    assert_eq!(records[0].code, issued.code.as_text());

    let latest = log.find_latest("a@x.com").await.unwrap().unwrap();
    assert_eq!(latest.code, issued.code.as_text());
}

#[tokio::test]
async fn test_issue_rejects_missing_fields_without_sending() {
    let (service, log, sender) = create_service(&[123_456], VerifyPolicy::Checked);

    let err = service.issue("", "555-0100").await.unwrap_err();
    assert!(matches!(
        err,
        IssueError::Validation(ValidationError::RequiredField { ref field }) if field == "email"
    ));

    let err = service.issue("a@x.com", "").await.unwrap_err();
    assert!(matches!(
        err,
        IssueError::Validation(ValidationError::RequiredField { ref field }) if field == "phone"
    ));

    assert_eq!(sender.attempts(), 0);
    assert!(log.records().await.is_empty());
}

#[tokio::test]
async fn test_delivery_failure_records_nothing() {
    let (service, log, sender) = create_service(&[123_456], VerifyPolicy::Checked);
    sender.set_should_fail(true);

    let err = service.issue("a@x.com", "555-0100").await.unwrap_err();
    match err {
        IssueError::DeliveryFailed { message } => assert!(message.contains("unavailable")),
        other => panic!("Expected delivery failure, got {:?}", other),
    }

    assert_eq!(sender.attempts(), 1);
    assert!(log.records().await.is_empty());
}

#[tokio::test]
async fn test_record_failure_after_delivery_is_distinct() {
    let (service, log, sender) = create_service(&[123_456], VerifyPolicy::Checked);
    log.set_fail_appends(true);

    let err = service.issue("a@x.com", "555-0100").await.unwrap_err();
    match err {
        IssueError::RecordFailed { code, source } => {
            assert_eq!(code.value(), 123_456);
            assert!(matches!(source, LogError::IoFailure { .. }));
        }
        other => panic!("Expected record failure, got {:?}", other),
    }

    // The code still went out
    assert_eq!(sender.last_code_for("a@x.com"), Some("123456".to_string()));
}

#[tokio::test]
async fn test_repeated_issuance_accumulates_records() {
    let (service, log, _) = create_service(&[111_111, 222_222], VerifyPolicy::Checked);

    service.issue("a@x.com", "555-0100").await.unwrap();
    service.issue("a@x.com", "555-0100").await.unwrap();

    assert_eq!(log.count_for("a@x.com").await, 2);
    let latest = log.find_latest("a@x.com").await.unwrap().unwrap();
    assert_eq!(latest.code, "222222");
}

#[tokio::test]
async fn test_verify_against_latest_issuance() {
    let (service, _, _) = create_service(&[111_111, 222_222], VerifyPolicy::Checked);

    service.issue("a@x.com", "555-0100").await.unwrap();
    service.issue("a@x.com", "555-0100").await.unwrap();

    assert_eq!(
        service.verify("a@x.com", "111111").await.unwrap(),
        VerifyOutcome::Invalid
    );
    assert_eq!(
        service.verify("a@x.com", "222222").await.unwrap(),
        VerifyOutcome::Valid
    );
}

#[tokio::test]
async fn test_verify_is_not_single_use() {
    let (service, _, _) = create_service(&[424_242], VerifyPolicy::Checked);
    service.issue("a@x.com", "555-0100").await.unwrap();

    assert!(service.verify("a@x.com", "424242").await.unwrap().is_valid());
    assert!(service.verify("a@x.com", "424242").await.unwrap().is_valid());
}

#[tokio::test]
async fn test_verify_addresses_are_independent() {
    let (service, _, _) = create_service(&[111_111, 222_222], VerifyPolicy::Checked);
    service.issue("a@x.com", "555-0100").await.unwrap();
    service.issue("b@x.com", "555-0101").await.unwrap();

    assert!(service.verify("a@x.com", "111111").await.unwrap().is_valid());
    assert!(!service.verify("a@x.com", "222222").await.unwrap().is_valid());
}

#[tokio::test]
async fn test_verify_unknown_address() {
    let (service, _, _) = create_service(&[123_456], VerifyPolicy::Checked);

    let err = service.verify("nobody@x.com", "123456").await.unwrap_err();
    assert!(matches!(err, VerifyError::NotFound));
}

#[tokio::test]
async fn test_verify_rejects_missing_fields() {
    let (service, _, _) = create_service(&[123_456], VerifyPolicy::Checked);

    assert!(matches!(
        service.verify("", "123456").await,
        Err(VerifyError::Validation(_))
    ));
    assert!(matches!(
        service.verify("a@x.com", "").await,
        Err(VerifyError::Validation(_))
    ));
}

#[tokio::test]
async fn test_verify_surfaces_log_failure() {
    let (service, log, _) = create_service(&[123_456], VerifyPolicy::Checked);
    service.issue("a@x.com", "555-0100").await.unwrap();
    log.set_fail_reads(true);

    let err = service.verify("a@x.com", "123456").await.unwrap_err();
    assert!(matches!(err, VerifyError::Log(LogError::IoFailure { .. })));
}

#[tokio::test]
async fn test_simulated_policy_skips_log() {
    let (service, log, _) = create_service(&[123_456], VerifyPolicy::Simulated);
    log.set_fail_reads(true);

    assert_eq!(service.verify_policy(), VerifyPolicy::Simulated);
    assert_eq!(
        service.verify("nobody@x.com", "000000").await.unwrap(),
        VerifyOutcome::Valid
    );
    assert!(matches!(
        service.verify("nobody@x.com", "").await,
        Err(VerifyError::Validation(_))
    ));
}
