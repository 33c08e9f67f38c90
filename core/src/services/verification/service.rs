//! Main verification service implementation

use std::sync::Arc;

use otp_shared::config::VerifyPolicy;
use otp_shared::email::mask_email;

use crate::domain::entities::IssuanceRecord;
use crate::errors::{IssueError, IssueResult, ValidationError, VerifyError, VerifyResult};
use crate::repositories::IssuanceLog;

use super::config::VerificationServiceConfig;
use super::traits::{CodeGenerator, NotificationSender};
use super::types::{IssuedCode, VerifyOutcome};

/// Verification service issuing codes by e-mail and checking them later
pub struct VerificationService<L: IssuanceLog, N: NotificationSender, G: CodeGenerator> {
    /// Durable record of delivered codes
    log: Arc<L>,
    /// Transport delivering codes to addresses
    sender: Arc<N>,
    /// Source of new codes
    generator: Arc<G>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<L: IssuanceLog, N: NotificationSender, G: CodeGenerator> VerificationService<L, N, G> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `log` - Issuance log implementation
    /// * `sender` - Notification sender implementation
    /// * `generator` - Code generator implementation
    /// * `config` - Service configuration
    pub fn new(
        log: Arc<L>,
        sender: Arc<N>,
        generator: Arc<G>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            log,
            sender,
            generator,
            config,
        }
    }

    pub fn verify_policy(&self) -> VerifyPolicy {
        self.config.verify_policy
    }

    /// Issue a new code to `address`
    ///
    /// This method:
    /// 1. Rejects empty address or contact
    /// 2. Generates a new code
    /// 3. Sends it through the notification sender
    /// 4. Appends an issuance record, only after delivery succeeded
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedCode)` - The code was delivered and recorded
    /// * `Err(IssueError::DeliveryFailed)` - Nothing was recorded
    /// * `Err(IssueError::RecordFailed)` - The code was delivered but the
    ///   log append failed, so it cannot be verified later
    pub async fn issue(&self, address: &str, contact: &str) -> IssueResult<IssuedCode> {
        require("email", address)?;
        require("phone", contact)?;

        let masked = mask_email(address);
        let code = self.generator.generate();

        tracing::debug!(address = %masked, event = "otp_generated", "Generated new one-time code");

        let message_id = self
            .sender
            .send_code(address, &code)
            .await
            .map_err(|e| {
                tracing::error!(
                    address = %masked,
                    provider = self.sender.provider_name(),
                    error = %e,
                    event = "otp_delivery_failed",
                    "Failed to deliver one-time code"
                );
                IssueError::DeliveryFailed { message: e }
            })?;

        let record = IssuanceRecord::new(address, contact, code);
        if let Err(source) = self.log.append(record.clone()).await {
            tracing::error!(
                address = %masked,
                message_id = %message_id,
                error = %source,
                event = "otp_record_failed",
                "Code was delivered but could not be recorded"
            );
            return Err(IssueError::RecordFailed { code, source });
        }

        tracing::info!(
            address = %masked,
            provider = self.sender.provider_name(),
            message_id = %message_id,
            event = "otp_issued",
            "Issued one-time code"
        );

        Ok(IssuedCode {
            code,
            record,
            message_id,
        })
    }

    /// Check `submitted` against the latest code issued to `address`
    ///
    /// Under the checked policy the stored decimal text must equal the
    /// submission exactly. Under the simulated policy every well-formed
    /// request is accepted without reading the log.
    ///
    /// # Returns
    ///
    /// * `Ok(VerifyOutcome)` - Whether the codes match
    /// * `Err(VerifyError::NotFound)` - No code was ever issued to `address`
    /// * `Err(VerifyError::Log)` - The issuance log could not be read
    pub async fn verify(&self, address: &str, submitted: &str) -> VerifyResult<VerifyOutcome> {
        require("email", address)?;
        require("otp", submitted)?;

        let masked = mask_email(address);

        if self.config.verify_policy == VerifyPolicy::Simulated {
            tracing::debug!(address = %masked, event = "otp_verify_simulated", "Accepting code without checking");
            return Ok(VerifyOutcome::Valid);
        }

        let latest = self.log.find_latest(address).await.map_err(|e| {
            tracing::error!(
                address = %masked,
                error = %e,
                event = "otp_verification_error",
                "Failed to read issuance log"
            );
            VerifyError::Log(e)
        })?;

        let Some(record) = latest else {
            tracing::warn!(address = %masked, event = "otp_not_found", "No code issued for address");
            return Err(VerifyError::NotFound);
        };

        if record.matches_code(submitted) {
            tracing::info!(address = %masked, event = "otp_verified_success", "Code verified");
            Ok(VerifyOutcome::Valid)
        } else {
            tracing::warn!(address = %masked, event = "otp_verification_failed", "Submitted code does not match");
            Ok(VerifyOutcome::Invalid)
        }
    }
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::required(field));
    }
    Ok(())
}
