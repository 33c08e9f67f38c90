//! Issuance log trait defining the interface for issued-code persistence.
//!
//! The log is append-only: records are never updated or removed, and the
//! insertion order doubles as chronological order.

use async_trait::async_trait;

use crate::domain::entities::IssuanceRecord;
use crate::errors::LogError;

/// Append-only store of issuance records
///
/// # Visibility
/// A record appended by a call that has returned `Ok` must be visible to any
/// `find_latest` call that starts afterwards.
///
/// # Example Implementation
/// ```no_run
/// use async_trait::async_trait;
/// use otp_core::domain::entities::IssuanceRecord;
/// use otp_core::errors::LogError;
/// use otp_core::repositories::IssuanceLog;
///
/// struct NullLog;
///
/// #[async_trait]
/// impl IssuanceLog for NullLog {
///     async fn append(&self, _record: IssuanceRecord) -> Result<(), LogError> {
///         Ok(())
///     }
///
///     async fn find_latest(&self, _address: &str) -> Result<Option<IssuanceRecord>, LogError> {
///         Ok(None)
///     }
/// }
/// ```
#[async_trait]
pub trait IssuanceLog: Send + Sync {
    /// Add one record to the end of the log, creating the store if needed
    ///
    /// # Returns
    /// * `Ok(())` - The record is durable and visible to later lookups
    /// * `Err(LogError::IoFailure)` - The store could not be opened or written
    async fn append(&self, record: IssuanceRecord) -> Result<(), LogError>;

    /// Most recently appended record for `address`
    ///
    /// # Returns
    /// * `Ok(Some(record))` - Latest match, scanning in reverse insertion order
    /// * `Ok(None)` - No record for this address
    /// * `Err(LogError::IoFailure)` - The store could not be read
    async fn find_latest(&self, address: &str) -> Result<Option<IssuanceRecord>, LogError>;
}
