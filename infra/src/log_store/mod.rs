//! Durable issuance log
//!
//! Records are stored one JSON object per line with the columns
//! `Timestamp`, `Email`, `Phone` and `OTP`. Appends never rewrite existing
//! lines, and every operation on one handle is serialized so concurrent
//! issuances cannot interleave partial writes or lose records.

pub mod jsonl_log;

pub use jsonl_log::JsonlIssuanceLog;
