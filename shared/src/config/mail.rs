//! Mail transport configuration
//!
//! The SMTP relay is fully described by the environment; nothing about it is
//! fixed in code. Selecting the SMTP transport without its settings is a
//! startup error rather than a silent no-op.

use serde::{Deserialize, Serialize};

use super::{optional, parse_bool, parse_or, required};
use crate::errors::ConfigError;

/// Default per-send timeout
pub const DEFAULT_MAIL_TIMEOUT_SECONDS: u64 = 30;

/// Which transport delivers codes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "transport", rename_all = "lowercase")]
pub enum MailConfig {
    /// Deliver through an SMTP relay
    Smtp(SmtpConfig),
    /// Write codes to the log instead of sending them (development only)
    Console,
}

/// SMTP relay settings
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Implicit TLS (usually port 465) when true, STARTTLS otherwise
    pub secure: bool,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    /// Sender mailbox, e.g. `Support <support@example.com>`
    pub from: String,
    pub timeout_seconds: u64,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("secure", &self.secure)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from", &self.from)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

impl MailConfig {
    /// Load from `MAIL_TRANSPORT` and, for SMTP, the `MAIL_*` relay settings
    pub fn from_source<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let transport = optional(lookup, "MAIL_TRANSPORT").unwrap_or_else(|| "smtp".to_string());
        match transport.to_lowercase().as_str() {
            "smtp" => Ok(MailConfig::Smtp(SmtpConfig::from_source(lookup)?)),
            "console" => Ok(MailConfig::Console),
            _ => Err(ConfigError::invalid("MAIL_TRANSPORT", transport)),
        }
    }

    pub fn transport_name(&self) -> &'static str {
        match self {
            MailConfig::Smtp(_) => "smtp",
            MailConfig::Console => "console",
        }
    }
}

impl SmtpConfig {
    pub fn from_source<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = required(lookup, "MAIL_HOST")?;
        let port_raw = required(lookup, "MAIL_PORT")?;
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| ConfigError::invalid("MAIL_PORT", port_raw))?;
        let secure = parse_bool("MAIL_SECURE", &required(lookup, "MAIL_SECURE")?)?;

        Ok(Self {
            host,
            port,
            secure,
            username: required(lookup, "MAIL_USERNAME")?,
            password: required(lookup, "MAIL_PASSWORD")?,
            from: required(lookup, "MAIL_FROM")?,
            timeout_seconds: parse_or(lookup, "MAIL_TIMEOUT_SECONDS", DEFAULT_MAIL_TIMEOUT_SECONDS)?,
        })
    }
}
