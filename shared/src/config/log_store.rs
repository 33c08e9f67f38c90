//! Issuance log location

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::optional;

/// Where the durable issuance log lives
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LogStoreConfig {
    /// Directory holding the log, created if absent
    pub directory: PathBuf,

    /// File name inside `directory`
    pub file_name: String,
}

impl Default for LogStoreConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("logs"),
            file_name: String::from("otp_logs.jsonl"),
        }
    }
}

impl LogStoreConfig {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Default::default()
        }
    }

    /// Load from `OTP_LOG_DIR` and `OTP_LOG_FILE`
    pub fn from_source<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            directory: optional(lookup, "OTP_LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.directory),
            file_name: optional(lookup, "OTP_LOG_FILE").unwrap_or(defaults.file_name),
        }
    }

    /// Full path of the log file
    pub fn file_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }
}
