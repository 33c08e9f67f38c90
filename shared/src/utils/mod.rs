//! Utility helpers shared across crates

pub mod email;
