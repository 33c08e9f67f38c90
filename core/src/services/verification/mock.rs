//! Test doubles for the notification sender and code generator

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::domain::entities::OtpCode;

use super::traits::{CodeGenerator, NotificationSender};

/// Notification sender that records every delivery in memory
pub struct MockNotificationSender {
    sent: Mutex<Vec<(String, String)>>,
    should_fail: AtomicBool,
    attempts: AtomicUsize,
}

impl MockNotificationSender {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            should_fail: AtomicBool::new(should_fail),
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Every successful delivery as `(address, code)`, oldest first
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Last code delivered to `address`
    pub fn last_code_for(&self, address: &str) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|(to, _)| to == address)
            .map(|(_, code)| code.clone())
    }

    /// Number of send attempts, failed ones included
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Default for MockNotificationSender {
    fn default() -> Self {
        Self::new(false)
    }
}

#[async_trait]
impl NotificationSender for MockNotificationSender {
    async fn send_code(&self, address: &str, code: &OtpCode) -> Result<String, String> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err("Mail relay unavailable".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .push((address.to_string(), code.as_text()));
        Ok(format!("mock-msg-{}", uuid::Uuid::new_v4()))
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}

/// Generator returning a fixed sequence of codes, then repeating the last one
pub struct SequenceCodeGenerator {
    codes: Mutex<VecDeque<OtpCode>>,
    last: Mutex<OtpCode>,
}

impl SequenceCodeGenerator {
    /// # Panics
    /// If `codes` is empty or contains a value outside the six-digit range.
    pub fn new(codes: &[u32]) -> Self {
        let codes: VecDeque<OtpCode> = codes
            .iter()
            .map(|c| OtpCode::new(*c).expect("sequence codes must be six digits"))
            .collect();
        let first = *codes.front().expect("sequence must not be empty");
        Self {
            codes: Mutex::new(codes),
            last: Mutex::new(first),
        }
    }
}

impl CodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> OtpCode {
        let mut last = self.last.lock().unwrap();
        if let Some(next) = self.codes.lock().unwrap().pop_front() {
            *last = next;
        }
        *last
    }
}
