//! Server configuration module

use serde::{Deserialize, Serialize};

use super::{optional, parse_or};
use crate::errors::ConfigError;

/// Port the service has always listened on
pub const DEFAULT_PORT: u16 = 5006;

/// HTTP server configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Origins allowed by CORS in production
    #[serde(default)]
    pub allowed_origins: Vec<String>,

    /// Max age for preflight cache in seconds
    #[serde(default = "default_cors_max_age")]
    pub cors_max_age: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("0.0.0.0"),
            port: DEFAULT_PORT,
            allowed_origins: Vec::new(),
            cors_max_age: default_cors_max_age(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Load from `SERVER_HOST`, `PORT` (or `SERVER_PORT`), `ALLOWED_ORIGINS`
    /// and `CORS_MAX_AGE`.
    pub fn from_source<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = optional(lookup, "SERVER_HOST").unwrap_or(defaults.host);
        let port = match optional(lookup, "PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| ConfigError::invalid("PORT", value))?,
            None => parse_or(lookup, "SERVER_PORT", defaults.port)?,
        };
        let allowed_origins = optional(lookup, "ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|o| !o.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();
        let cors_max_age = parse_or(lookup, "CORS_MAX_AGE", defaults.cors_max_age)?;

        Ok(Self {
            host,
            port,
            allowed_origins,
            cors_max_age,
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_cors_max_age() -> usize {
    3600
}
