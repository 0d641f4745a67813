//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Base URL must end with '/'")]
    BaseUrlMissingTrailingSlash,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Retry count exceeds maximum allowed (10)")]
    TooManyRetries,

    #[error("Accept header cannot be empty")]
    EmptyAccept,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
