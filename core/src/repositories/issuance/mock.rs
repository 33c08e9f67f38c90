//! In-memory implementation of IssuanceLog for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::IssuanceRecord;
use crate::errors::LogError;

use super::trait_::IssuanceLog;

/// Mock issuance log keeping records in insertion order
pub struct MockIssuanceLog {
    records: Arc<RwLock<Vec<IssuanceRecord>>>,
    fail_appends: AtomicBool,
    fail_reads: AtomicBool,
}

impl MockIssuanceLog {
    /// Create a new empty log
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            fail_appends: AtomicBool::new(false),
            fail_reads: AtomicBool::new(false),
        }
    }

    /// Make every subsequent append fail with an I/O error
    pub fn set_fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent lookup fail with an I/O error
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// All records, oldest first
    pub async fn records(&self) -> Vec<IssuanceRecord> {
        self.records.read().await.clone()
    }

    /// Number of records stored for `address`
    pub async fn count_for(&self, address: &str) -> usize {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.address == address)
            .count()
    }
}

impl Default for MockIssuanceLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IssuanceLog for MockIssuanceLog {
    async fn append(&self, record: IssuanceRecord) -> Result<(), LogError> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(LogError::io("mock log is not writable"));
        }
        self.records.write().await.push(record);
        Ok(())
    }

    async fn find_latest(&self, address: &str) -> Result<Option<IssuanceRecord>, LogError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(LogError::io("mock log is not readable"));
        }
        Ok(self
            .records
            .read()
            .await
            .iter()
            .rev()
            .find(|r| r.address == address)
            .cloned())
    }
}
