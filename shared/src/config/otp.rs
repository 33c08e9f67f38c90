//! One-time code behavior settings

use serde::{Deserialize, Serialize};

use super::{optional, parse_bool};
use crate::config::environment::Environment;
use crate::errors::ConfigError;

/// How submitted codes are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyPolicy {
    /// Compare against the latest issued code for the address
    #[default]
    Checked,
    /// Accept any well-formed request without consulting the log
    Simulated,
}

impl std::str::FromStr for VerifyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "checked" => Ok(VerifyPolicy::Checked),
            "simulated" => Ok(VerifyPolicy::Simulated),
            _ => Err(format!("Invalid verify policy: {}", s)),
        }
    }
}

impl std::fmt::Display for VerifyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerifyPolicy::Checked => write!(f, "checked"),
            VerifyPolicy::Simulated => write!(f, "simulated"),
        }
    }
}

/// Settings for issuing and verifying codes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OtpConfig {
    pub verify_policy: VerifyPolicy,

    /// Echo the issued code in the send response. Debug aid only.
    pub expose_code: bool,
}

impl OtpConfig {
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            verify_policy: VerifyPolicy::default(),
            expose_code: environment.is_debug(),
        }
    }

    /// Load from `OTP_VERIFY_POLICY` and `OTP_EXPOSE_CODE`
    pub fn from_source<F>(lookup: &F, environment: Environment) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::for_environment(environment);
        if let Some(policy) = optional(lookup, "OTP_VERIFY_POLICY") {
            config.verify_policy = policy
                .parse()
                .map_err(|_| ConfigError::invalid("OTP_VERIFY_POLICY", policy))?;
        }
        if let Some(expose) = optional(lookup, "OTP_EXPOSE_CODE") {
            config.expose_code = parse_bool("OTP_EXPOSE_CODE", &expose)?;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_environment() {
        let dev = OtpConfig::from_source(&|_: &str| None, Environment::Development).unwrap();
        assert_eq!(dev.verify_policy, VerifyPolicy::Checked);
        assert!(dev.expose_code);

        let prod = OtpConfig::from_source(&|_: &str| None, Environment::Production).unwrap();
        assert!(!prod.expose_code);
    }

    #[test]
    fn test_overrides() {
        let config = OtpConfig::from_source(
            &|k: &str| match k {
                "OTP_VERIFY_POLICY" => Some("Simulated".to_string()),
                "OTP_EXPOSE_CODE" => Some("false".to_string()),
                _ => None,
            },
            Environment::Development,
        )
        .unwrap();
        assert_eq!(config.verify_policy, VerifyPolicy::Simulated);
        assert!(!config.expose_code);
    }

    #[test]
    fn test_invalid_policy() {
        let err = OtpConfig::from_source(
            &|k: &str| (k == "OTP_VERIFY_POLICY").then(|| "lenient".to_string()),
            Environment::Development,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::invalid("OTP_VERIFY_POLICY", "lenient"));
    }
}
