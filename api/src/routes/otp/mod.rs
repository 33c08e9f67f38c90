//! One-time code route handlers
//!
//! - `POST /send-otp` issues and mails a new code
//! - `POST /verify-otp` checks a submitted code

pub mod send_otp;
pub mod verify_otp;

use std::sync::Arc;

use actix_web::HttpRequest;
use uuid::Uuid;

use otp_core::repositories::IssuanceLog;
use otp_core::services::{CodeGenerator, NotificationSender, VerificationService};

pub use send_otp::send_otp;
pub use verify_otp::verify_otp;

/// Application state that holds shared services
pub struct AppState<L, N, G>
where
    L: IssuanceLog,
    N: NotificationSender,
    G: CodeGenerator,
{
    pub verification_service: Arc<VerificationService<L, N, G>>,
    /// Echo the issued code in the send response
    pub expose_code: bool,
}

/// Header value of `x-request-id`, or a fresh id
pub(crate) fn request_id(req: &HttpRequest) -> String {
    req.headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(String::from)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}
