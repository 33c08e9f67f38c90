//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `environment` - Environment detection
//! - `log_store` - Location of the durable issuance log
//! - `mail` - Mail transport and SMTP relay settings
//! - `otp` - Verification policy and debug switches
//! - `server` - HTTP listener and CORS settings
//!
//! Every loader takes a variable lookup so the process environment is read
//! in exactly one place (`AppConfig::from_env`).

pub mod environment;
pub mod log_store;
pub mod mail;
pub mod otp;
pub mod server;

use crate::errors::ConfigError;

// Re-export commonly used types
pub use environment::Environment;
pub use log_store::LogStoreConfig;
pub use mail::{MailConfig, SmtpConfig};
pub use otp::{OtpConfig, VerifyPolicy};
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Mail transport configuration
    pub mail: MailConfig,

    /// Issuance log location
    pub log_store: LogStoreConfig,

    /// Code behavior
    pub otp: OtpConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_source<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = Environment::from_source(&lookup);
        Ok(Self {
            environment,
            server: ServerConfig::from_source(&lookup)?,
            mail: MailConfig::from_source(&lookup)?,
            log_store: LogStoreConfig::from_source(&lookup),
            otp: OtpConfig::from_source(&lookup, environment)?,
        })
    }
}

/// Non-blank value of a variable
pub(crate) fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub(crate) fn required<F>(lookup: &F, name: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, name).ok_or_else(|| ConfigError::missing(name))
}

pub(crate) fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match optional(lookup, name) {
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::invalid(name, value)),
        None => Ok(default),
    }
}

pub(crate) fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::invalid(name, value)),
    }
}
