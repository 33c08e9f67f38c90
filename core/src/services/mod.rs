//! Business services containing domain logic and use cases.

pub mod verification;

// Re-export commonly used types
pub use verification::{
    CodeGenerator, IssuedCode, NotificationSender, RandomCodeGenerator, VerificationService,
    VerificationServiceConfig, VerifyOutcome,
};
