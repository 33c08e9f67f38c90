//! Mapping of domain errors to HTTP responses

use actix_web::{
    error::{InternalError, JsonPayloadError},
    HttpRequest, HttpResponse,
};

use otp_core::errors::{IssueError, VerifyError};

use crate::dto::ErrorResponse;

pub const SEND_FIELDS_REQUIRED: &str = "Email and phone are required";
pub const VERIFY_FIELDS_REQUIRED: &str = "Email and OTP are required";
pub const DELIVERY_FAILED: &str = "Failed to send OTP via email";
pub const RECORD_FAILED: &str = "OTP was sent but could not be recorded";
pub const NOT_FOUND: &str = "No OTP found for this email";
pub const INVALID_OTP: &str = "Invalid OTP";
pub const VERIFY_FAILED: &str = "Failed to verify OTP";
pub const INVALID_BODY: &str = "Invalid request body";
pub const ROUTE_NOT_FOUND: &str = "Not found";

/// Convert an issuance failure into its HTTP response
pub fn handle_issue_error(error: &IssueError) -> HttpResponse {
    match error {
        IssueError::Validation(_) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(SEND_FIELDS_REQUIRED))
        }
        IssueError::DeliveryFailed { message } => {
            log::error!("OTP delivery failed: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(DELIVERY_FAILED))
        }
        IssueError::RecordFailed { source, .. } => {
            log::error!("OTP delivered but not recorded: {}", source);
            HttpResponse::InternalServerError().json(ErrorResponse::new(RECORD_FAILED))
        }
    }
}

/// Convert a verification failure into its HTTP response
pub fn handle_verify_error(error: &VerifyError) -> HttpResponse {
    match error {
        VerifyError::Validation(_) => {
            HttpResponse::BadRequest().json(ErrorResponse::new(VERIFY_FIELDS_REQUIRED))
        }
        VerifyError::NotFound => HttpResponse::BadRequest().json(ErrorResponse::new(NOT_FOUND)),
        VerifyError::Log(e) => {
            log::error!("Issuance log read failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(VERIFY_FAILED))
        }
    }
}

/// Error handler for bodies that are not valid JSON
///
/// A body sent without a JSON content type is treated as empty, so the OTP
/// routes answer with their missing-fields message.
pub fn json_error_handler(error: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Rejected body on {}: {}", req.path(), error);
    let message = match (&error, req.path()) {
        (JsonPayloadError::ContentType, "/send-otp") => SEND_FIELDS_REQUIRED,
        (JsonPayloadError::ContentType, "/verify-otp") => VERIFY_FIELDS_REQUIRED,
        _ => INVALID_BODY,
    };
    let response = HttpResponse::BadRequest().json(ErrorResponse::new(message));
    InternalError::from_response(error, response).into()
}

/// Fallback for unknown routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(ROUTE_NOT_FOUND))
}
