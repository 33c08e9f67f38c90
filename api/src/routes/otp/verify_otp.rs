use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use otp_core::repositories::IssuanceLog;
use otp_core::services::{CodeGenerator, NotificationSender, VerifyOutcome};
use otp_shared::config::VerifyPolicy;
use otp_shared::email::mask_email;

use crate::dto::{ErrorResponse, VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::error::{handle_verify_error, INVALID_OTP, VERIFY_FIELDS_REQUIRED};

use super::{request_id, AppState};

pub const VERIFY_SUCCESS: &str = "OTP verified successfully";
pub const VERIFY_SUCCESS_SIMULATED: &str = "OTP verified successfully (simulated)";

/// Handler for POST /verify-otp
///
/// # Request Body
///
/// ```json
/// { "email": "alice@example.com", "otp": "482913" }
/// ```
///
/// `otp` may also be sent as a JSON number.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "success": true, "message": "OTP verified successfully" }
/// ```
///
/// ## Errors
/// - 400 `Email and OTP are required`
/// - 400 `No OTP found for this email`
/// - 401 `Invalid OTP`
/// - 500 `Failed to verify OTP`
pub async fn verify_otp<L, N, G>(
    req: HttpRequest,
    state: web::Data<AppState<L, N, G>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    L: IssuanceLog + 'static,
    N: NotificationSender + 'static,
    G: CodeGenerator + 'static,
{
    let request_id = request_id(&req);
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        log::warn!("[{}] Rejected verify-otp request: {}", request_id, errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(VERIFY_FIELDS_REQUIRED));
    }

    let email = request.email.unwrap_or_default();
    let submitted = request.otp.map(|otp| otp.as_text()).unwrap_or_default();

    log::info!("[{}] Verifying OTP for {}", request_id, mask_email(&email));

    let service = &state.verification_service;
    match service.verify(&email, &submitted).await {
        Ok(VerifyOutcome::Valid) => {
            let message = match service.verify_policy() {
                VerifyPolicy::Checked => VERIFY_SUCCESS,
                VerifyPolicy::Simulated => VERIFY_SUCCESS_SIMULATED,
            };
            log::info!("[{}] OTP verified for {}", request_id, mask_email(&email));

            HttpResponse::Ok().json(VerifyOtpResponse {
                success: true,
                message: message.to_string(),
            })
        }
        Ok(VerifyOutcome::Invalid) => {
            log::warn!("[{}] Invalid OTP for {}", request_id, mask_email(&email));
            HttpResponse::Unauthorized().json(ErrorResponse::new(INVALID_OTP))
        }
        Err(error) => handle_verify_error(&error),
    }
}
