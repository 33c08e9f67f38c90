//! Line-delimited JSON implementation of the issuance log

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use otp_core::domain::entities::IssuanceRecord;
use otp_core::errors::LogError;
use otp_core::repositories::IssuanceLog;
use otp_shared::config::LogStoreConfig;

use crate::InfrastructureError;

/// One line of the log file
#[derive(Debug, Serialize, Deserialize)]
struct LogRow {
    #[serde(rename = "Timestamp")]
    timestamp: DateTime<Utc>,
    #[serde(rename = "Email")]
    email: String,
    #[serde(rename = "Phone")]
    phone: String,
    #[serde(rename = "OTP")]
    otp: String,
}

impl From<&IssuanceRecord> for LogRow {
    fn from(record: &IssuanceRecord) -> Self {
        Self {
            timestamp: record.timestamp,
            email: record.address.clone(),
            phone: record.contact.clone(),
            otp: record.code.clone(),
        }
    }
}

impl From<LogRow> for IssuanceRecord {
    fn from(row: LogRow) -> Self {
        IssuanceRecord::with_timestamp(row.timestamp, row.email, row.phone, row.otp)
    }
}

/// Append-only issuance log backed by a JSON-lines file
pub struct JsonlIssuanceLog {
    path: PathBuf,
    /// Single-writer discipline: held for every read and append
    lock: Mutex<()>,
}

impl JsonlIssuanceLog {
    /// Open the log described by `config`, creating its directory and an
    /// empty file when absent. Existing content is never truncated.
    pub async fn open(config: &LogStoreConfig) -> Result<Self, InfrastructureError> {
        Self::open_at(config.file_path()).await
    }

    /// Open the log at an explicit file path
    pub async fn open_at(path: impl Into<PathBuf>) -> Result<Self, InfrastructureError> {
        let path = path.into();
        ensure_parent_dir(&path).await?;
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        info!(path = %path.display(), "Issuance log ready");

        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every readable record, oldest first
    pub async fn read_all(&self) -> Result<Vec<IssuanceRecord>, LogError> {
        let _guard = self.lock.lock().await;
        let contents = self.load().await?;
        Ok(split_lines(&contents)
            .enumerate()
            .filter_map(|(index, line)| parse_line(&self.path, index, line))
            .collect())
    }

    async fn load(&self) -> Result<Vec<u8>, LogError> {
        match fs::read(&self.path).await {
            Ok(contents) => Ok(contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(LogError::io(format!(
                "cannot read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

#[async_trait]
impl IssuanceLog for JsonlIssuanceLog {
    async fn append(&self, record: IssuanceRecord) -> Result<(), LogError> {
        let mut line = serde_json::to_string(&LogRow::from(&record))
            .map_err(|e| LogError::io(format!("cannot encode record: {}", e)))?;
        line.push('\n');

        let _guard = self.lock.lock().await;

        // The file or its directory may have been removed since open
        ensure_parent_dir(&self.path).await.map_err(LogError::from)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| LogError::io(format!("cannot open {}: {}", self.path.display(), e)))?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        file.sync_data().await?;

        debug!(path = %self.path.display(), "Appended issuance record");
        Ok(())
    }

    async fn find_latest(&self, address: &str) -> Result<Option<IssuanceRecord>, LogError> {
        let _guard = self.lock.lock().await;
        let contents = self.load().await?;

        let lines: Vec<&[u8]> = split_lines(&contents).collect();

        Ok(lines
            .into_iter()
            .enumerate()
            .rev()
            .filter_map(|(index, line)| parse_line(&self.path, index, line))
            .find(|record| record.address == address))
    }
}

async fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir).await,
        _ => Ok(()),
    }
}

fn split_lines(contents: &[u8]) -> impl Iterator<Item = &[u8]> {
    contents
        .split(|byte| *byte == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
}

fn parse_line(path: &Path, index: usize, line: &[u8]) -> Option<IssuanceRecord> {
    let line = match std::str::from_utf8(line) {
        Ok(line) => line,
        Err(e) => {
            warn!(
                path = %path.display(),
                line = index + 1,
                error = %e,
                "Skipping issuance log line that is not UTF-8"
            );
            return None;
        }
    };
    if line.trim().is_empty() {
        return None;
    }
    match serde_json::from_str::<LogRow>(line) {
        Ok(row) => Some(row.into()),
        Err(e) => {
            warn!(
                path = %path.display(),
                line = index + 1,
                error = %e,
                "Skipping malformed issuance log line"
            );
            None
        }
    }
}
