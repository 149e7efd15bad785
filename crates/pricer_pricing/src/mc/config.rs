//! Monte Carlo simulation configuration.
//!
//! This module provides configuration types and builders for Monte Carlo
//! pricing runs.

use super::error::ConfigError;

/// Default trial budget.
pub const DEFAULT_TRIALS: usize = 10_000;

/// Maximum trial budget allowed.
pub const MAX_TRIALS: usize = 100_000_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`MonteCarloConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_trials(100_000)
///     .antithetic(false)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_trials(), 100_000);
/// assert!(!config.antithetic());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Total trial budget before scaling by schedule length.
    n_trials: usize,
    /// Whether to pair each path with its antithetic mirror.
    antithetic: bool,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the total trial budget.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns whether antithetic variates are enabled.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Returns the optional seed for reproducibility.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidTrialCount` if `n_trials` is below 2 or
    /// greater than 100,000,000.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_trials < 2 || self.n_trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.n_trials));
        }
        Ok(())
    }
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            n_trials: DEFAULT_TRIALS,
            antithetic: true,
            seed: None,
        }
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Unset fields fall back to 10,000 trials with antithetic variates on.
#[derive(Clone, Debug)]
pub struct MonteCarloConfigBuilder {
    n_trials: usize,
    antithetic: bool,
    seed: Option<u64>,
}

impl Default for MonteCarloConfigBuilder {
    fn default() -> Self {
        let config = MonteCarloConfig::default();
        Self {
            n_trials: config.n_trials,
            antithetic: config.antithetic,
            seed: config.seed,
        }
    }
}

impl MonteCarloConfigBuilder {
    /// Sets the total trial budget.
    #[inline]
    pub fn n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = n_trials;
        self
    }

    /// Enables or disables antithetic variates.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the trial budget is out of range.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let config = MonteCarloConfig {
            n_trials: self.n_trials,
            antithetic: self.antithetic,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
