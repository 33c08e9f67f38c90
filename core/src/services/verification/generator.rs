//! Random code generation

use crate::domain::entities::OtpCode;

use super::traits::CodeGenerator;

/// Draws codes uniformly from `[100000, 999999]` using the thread-local RNG.
///
/// Codes are not unique across calls and the generator makes no
/// cryptographic claims.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> OtpCode {
        OtpCode::generate(&mut rand::thread_rng())
    }
}
