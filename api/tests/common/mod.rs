//! Shared fixtures for the route tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::web;

use otp_api::routes::otp::AppState;
use otp_core::repositories::MockIssuanceLog;
use otp_core::services::verification::mock::{MockNotificationSender, SequenceCodeGenerator};
use otp_core::services::{VerificationService, VerificationServiceConfig};
use otp_shared::config::VerifyPolicy;

pub type TestState = AppState<MockIssuanceLog, MockNotificationSender, SequenceCodeGenerator>;

pub struct Fixture {
    pub log: Arc<MockIssuanceLog>,
    pub sender: Arc<MockNotificationSender>,
    pub state: web::Data<TestState>,
}

pub fn fixture(codes: &[u32], policy: VerifyPolicy, expose_code: bool) -> Fixture {
    let log = Arc::new(MockIssuanceLog::new());
    let sender = Arc::new(MockNotificationSender::new(false));
    let service = VerificationService::new(
        log.clone(),
        sender.clone(),
        Arc::new(SequenceCodeGenerator::new(codes)),
        VerificationServiceConfig::with_policy(policy),
    );

    Fixture {
        log,
        sender,
        state: web::Data::new(AppState {
            verification_service: Arc::new(service),
            expose_code,
        }),
    }
}

pub fn default_fixture(codes: &[u32]) -> Fixture {
    fixture(codes, VerifyPolicy::Checked, true)
}
