//! CLI error types

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `exotic_mc` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid configuration (file, environment or flags)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A scenario failed to price
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Invalid command argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Result serialisation failed
    #[error("Serialisation error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
