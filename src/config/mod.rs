//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PINBOARD` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use pinboard_identity::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("bcrypt cost {}", config.security.bcrypt_cost);
//! ```

mod error;
mod logging;
mod media;
mod security;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use media::MediaConfig;
pub use security::{SecurityConfig, MAX_BCRYPT_COST, MIN_BCRYPT_COST};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment loads successfully.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log level and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Password hashing
    #[serde(default)]
    pub security: SecurityConfig,

    /// Static file serving for profile pictures
    #[serde(default)]
    pub media: MediaConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PINBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PINBOARD__SECURITY__BCRYPT_COST=10` -> `security.bcrypt_cost = 10`
    /// - `PINBOARD__LOGGING__FORMAT=json` -> `logging.format = json`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PINBOARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first section that is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.security.validate()?;
        self.media.validate()?;
        Ok(())
    }

    /// Load and validate in one step
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 4] = [
        "PINBOARD__LOGGING__LEVEL",
        "PINBOARD__LOGGING__FORMAT",
        "PINBOARD__SECURITY__BCRYPT_COST",
        "PINBOARD__MEDIA__STATIC_BASE_URL",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.format, LogFormat::Pretty);
        assert_eq!(config.security.bcrypt_cost, 12);
        assert_eq!(config.media.static_base_url, "http://localhost:8080/static");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PINBOARD__LOGGING__LEVEL", "debug");
        env::set_var("PINBOARD__LOGGING__FORMAT", "json");
        env::set_var("PINBOARD__SECURITY__BCRYPT_COST", "10");
        env::set_var("PINBOARD__MEDIA__STATIC_BASE_URL", "https://cdn.example.com");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.security.bcrypt_cost, 10);
        assert_eq!(config.media.static_base_url, "https://cdn.example.com");
    }

    #[test]
    fn test_load_validated_rejects_bad_cost() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PINBOARD__SECURITY__BCRYPT_COST", "40");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(ValidationError::InvalidBcryptCost(40)))
        ));
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
