use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request DTO for issuing a code
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SendOtpRequest {
    /// Recipient e-mail address
    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    /// Contact phone number, stored with the record but never messaged
    #[validate(required, length(min = 1))]
    pub phone: Option<String>,
}

/// Response DTO for a delivered code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpResponse {
    pub message: String,

    /// The issued code, only present when code echo is enabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<u32>,
}

/// A submitted code as sent by clients, either `"123456"` or `123456`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmittedCode {
    Text(String),
    Number(serde_json::Number),
}

impl SubmittedCode {
    /// Decimal text compared against the stored code
    ///
    /// Whole-valued floats such as `482913.0` compare as their integer text.
    pub fn as_text(&self) -> String {
        match self {
            SubmittedCode::Text(text) => text.clone(),
            SubmittedCode::Number(number) => match (number.as_u64(), number.as_f64()) {
                (Some(value), _) => value.to_string(),
                (None, Some(value)) if value.is_finite() && value.fract() == 0.0 => {
                    format!("{:.0}", value)
                }
                _ => number.to_string(),
            },
        }
    }
}

/// Request DTO for checking a code
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    #[validate(required)]
    pub otp: Option<SubmittedCode>,
}

/// Response DTO for a successful verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: String,
}
