//! Configuration loading for the API binary

use otp_shared::ConfigError;

pub use otp_shared::config::AppConfig as Config;

/// Load `.env` if present, then read the full configuration from the
/// process environment. This is the only place `.env` is read.
pub fn load() -> Result<Config, ConfigError> {
    dotenvy::dotenv().ok();
    Config::from_env()
}
