//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CHART_SUPPLEMENTS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use chart_supplements::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Searching {}", config.client.base_url);
//! ```

mod client;
mod error;
mod logging;
mod lookup;

pub use client::{ClientConfig, DEFAULT_BASE_URL};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use lookup::LookupConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration pointed at the public portal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Portal client configuration (endpoint, deadline, retries)
    #[serde(default)]
    pub client: ClientConfig,

    /// Lookup defaults
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CHART_SUPPLEMENTS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CHART_SUPPLEMENTS__CLIENT__TIMEOUT_SECS=60` -> `client.timeout_secs = 60`
    /// - `CHART_SUPPLEMENTS__LOOKUP__GET_NEXT_CYCLE=true` -> `lookup.get_next_cycle = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CHART_SUPPLEMENTS")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.client.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
