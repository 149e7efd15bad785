//! Error types for Monte Carlo configuration.
//!
//! Runtime pricing failures are reported as
//! [`PricingError`](pricer_core::types::PricingError); this module only
//! covers invalid engine configuration.

use thiserror::Error;

/// Configuration error for the Monte Carlo pricer.
///
/// These errors occur at build time when invalid parameters are provided.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Trial budget outside valid range [2, 100_000_000].
    #[error("Invalid trial count {0}: must be in range [2, 100_000_000]")]
    InvalidTrialCount(usize),
}
