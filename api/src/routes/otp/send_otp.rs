use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use otp_core::errors::IssueError;
use otp_core::repositories::IssuanceLog;
use otp_core::services::{CodeGenerator, NotificationSender};
use otp_shared::email::mask_email;

use crate::dto::{ErrorResponse, SendOtpRequest, SendOtpResponse};
use crate::handlers::error::{handle_issue_error, SEND_FIELDS_REQUIRED};

use super::{request_id, AppState};

pub const SEND_SUCCESS: &str = "OTP sent successfully via email";

/// Handler for POST /send-otp
///
/// # Request Body
///
/// ```json
/// { "email": "alice@example.com", "phone": "555-0100" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "message": "OTP sent successfully via email", "otp": 482913 }
/// ```
///
/// `otp` is omitted unless code echo is enabled.
///
/// ## Errors
/// - 400 `Email and phone are required`
/// - 500 `Failed to send OTP via email`
/// - 500 `OTP was sent but could not be recorded`
pub async fn send_otp<L, N, G>(
    req: HttpRequest,
    state: web::Data<AppState<L, N, G>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    L: IssuanceLog + 'static,
    N: NotificationSender + 'static,
    G: CodeGenerator + 'static,
{
    let request_id = request_id(&req);
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        log::warn!("[{}] Rejected send-otp request: {}", request_id, errors);
        return HttpResponse::BadRequest().json(ErrorResponse::new(SEND_FIELDS_REQUIRED));
    }

    let email = request.email.unwrap_or_default();
    let phone = request.phone.unwrap_or_default();

    log::info!("[{}] Sending OTP to {}", request_id, mask_email(&email));

    match state.verification_service.issue(&email, &phone).await {
        Ok(issued) => {
            log::info!(
                "[{}] OTP sent to {}, message_id: {}",
                request_id,
                mask_email(&email),
                issued.message_id
            );

            HttpResponse::Ok().json(SendOtpResponse {
                message: SEND_SUCCESS.to_string(),
                otp: state.expose_code.then_some(issued.code.value()),
            })
        }
        Err(error) => {
            if let IssueError::RecordFailed { .. } = error {
                log::error!(
                    "[{}] OTP reached {} but is not verifiable",
                    request_id,
                    mask_email(&email)
                );
            }
            handle_issue_error(&error)
        }
    }
}
