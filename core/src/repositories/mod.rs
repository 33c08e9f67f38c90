pub mod issuance;

pub use issuance::{IssuanceLog, MockIssuanceLog};
