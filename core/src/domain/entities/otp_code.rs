//! Six-digit one-time code value object.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of decimal digits in every code
pub const CODE_LENGTH: usize = 6;

/// A one-time code in the inclusive range `[100000, 999999]`.
///
/// The lower bound keeps every code exactly six digits long without
/// zero-padding, so the decimal text form is stable whether a client sends
/// the code back as a JSON number or a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct OtpCode(u32);

impl OtpCode {
    /// Smallest code that can be issued
    pub const MIN: u32 = 100_000;

    /// Largest code that can be issued
    pub const MAX: u32 = 999_999;

    /// Wrap a value, rejecting anything outside the six-digit range
    pub fn new(value: u32) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
    }

    /// Draw a code uniformly from the full range
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(Self::MIN..=Self::MAX))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Decimal text form used for storage and comparison
    pub fn as_text(&self) -> String {
        self.0.to_string()
    }
}

impl std::fmt::Display for OtpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for OtpCode {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("code out of range: {}", value))
    }
}

impl From<OtpCode> for u32 {
    fn from(code: OtpCode) -> Self {
        code.0
    }
}
