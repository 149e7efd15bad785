//! Monte Carlo pricing engine.
//!
//! This module provides the orchestration layer for Monte Carlo pricing.
//!
//! # Overview
//!
//! For each call to [`MonteCarloPricer::price`] the pricer:
//! 1. Scales the trial budget down by the schedule length
//! 2. Simulates each trial (one path, or an antithetic pair averaged into one sample)
//! 3. Evaluates the payoff on every simulated path
//! 4. Discounts all samples with a single flat discount factor
//! 5. Returns the sample mean and its standard error
//!
//! # Determinism
//!
//! All draws come from the pricer's single [`PricerRng`] in trial order.
//! Reseeding before two otherwise identical calls yields bit-identical results.

use pricer_core::types::PricingError;
use pricer_models::instruments::PathPayoff;
use tracing::debug;

use super::config::MonteCarloConfig;
use super::paths::PathGenerator;
use super::statistics::mean_and_std_error;
use crate::rng::PricerRng;

/// Pricing result: Monte Carlo estimate and its standard error.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PricingResult;
///
/// let result = PricingResult {
///     price: 10.5,
///     std_error: 0.05,
/// };
///
/// println!("Price: {} +/- {}", result.price, result.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricingResult {
    /// Present value of the option.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
}

impl PricingResult {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Monte Carlo pricing engine.
///
/// Generic over a path-producing capability `G` and a path-consuming
/// capability `P`; the pricer never looks inside either.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionRight;
/// use pricer_models::instruments::VanillaPayoff;
/// use pricer_models::models::GbmModel;
/// use pricer_pricing::mc::{GbmPathGenerator, MonteCarloConfig, MonteCarloPricer};
///
/// let model = GbmModel::new(100.0, 0.05, 0.03, 0.1).unwrap();
/// let config = MonteCarloConfig::builder().seed(42).build().unwrap();
/// let mut pricer = MonteCarloPricer::new(
///     config,
///     GbmPathGenerator::new(model),
///     VanillaPayoff::new(103.0, OptionRight::Call),
/// );
///
/// let first = pricer.price(&[0.0, 1.0], 10_000, true).unwrap();
///
/// pricer.reset();
/// let second = pricer.price(&[0.0, 1.0], 10_000, true).unwrap();
/// assert_eq!(first, second);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer<G, P> {
    config: MonteCarloConfig,
    generator: G,
    payoff: P,
    rng: PricerRng,
}

impl<G: PathGenerator, P: PathPayoff> MonteCarloPricer<G, P> {
    /// Creates a new pricer.
    ///
    /// The random stream is seeded from the configuration (seed 0 if unset).
    pub fn new(config: MonteCarloConfig, generator: G, payoff: P) -> Self {
        let rng = PricerRng::from_seed(config.seed().unwrap_or(0));
        Self {
            config,
            generator,
            payoff,
            rng,
        }
    }

    /// Returns a reference to the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Returns the path generator.
    #[inline]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Returns the payoff.
    #[inline]
    pub fn payoff(&self) -> &P {
        &self.payoff
    }

    /// Replaces the path generator, keeping the random stream position.
    pub fn set_generator(&mut self, generator: G) {
        self.generator = generator;
    }

    /// Replaces the payoff, keeping the random stream position.
    pub fn set_payoff(&mut self, payoff: P) {
        self.payoff = payoff;
    }

    /// Restarts the random stream from the configured seed.
    pub fn reset(&mut self) {
        self.rng = PricerRng::from_seed(self.config.seed().unwrap_or(0));
    }

    /// Restarts the random stream from a new seed.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = PricerRng::from_seed(seed);
    }

    /// Prices with the configured trial budget and antithetic flag.
    ///
    /// # Errors
    ///
    /// Same conditions as [`MonteCarloPricer::price`].
    pub fn price_with_config(&mut self, times: &[f64]) -> Result<PricingResult, PricingError> {
        let n_trials = self.config.n_trials();
        let antithetic = self.config.antithetic();
        self.price(times, n_trials, antithetic)
    }

    /// Prices the payoff over the observation schedule `times`.
    ///
    /// # Arguments
    ///
    /// * `times` - Non-decreasing observation times in years, `times[0]` is
    ///   the valuation time
    /// * `n_trials` - Total trial budget; `n_trials / times.len()` trials are simulated
    /// * `antithetic` - Pair every path with its antithetic mirror
    ///
    /// # Errors
    ///
    /// - `PricingError::EmptySchedule` if `times` is empty
    /// - `PricingError::InsufficientTrials` if `n_trials < times.len()`
    /// - `PricingError::InsufficientSamples` if fewer than two trials remain
    ///   after scaling
    /// - Any error raised by the payoff
    pub fn price(
        &mut self,
        times: &[f64],
        n_trials: usize,
        antithetic: bool,
    ) -> Result<PricingResult, PricingError> {
        if times.is_empty() {
            return Err(PricingError::EmptySchedule);
        }
        if n_trials < times.len() {
            return Err(PricingError::InsufficientTrials {
                n_trials,
                schedule_len: times.len(),
            });
        }

        let effective_trials = n_trials / times.len();
        if effective_trials < 2 {
            return Err(PricingError::InsufficientSamples {
                samples: effective_trials,
            });
        }

        let discount_factor =
            (-self.generator.net_rate() * (times[times.len() - 1] - times[0])).exp();

        debug!(
            n_trials,
            effective_trials,
            schedule_len = times.len(),
            antithetic,
            discount_factor,
            "Starting Monte Carlo pricing"
        );

        // Buffers reused across trials
        let mut path = vec![0.0; times.len()];
        let mut a_path = vec![0.0; times.len()];
        let mut samples = Vec::with_capacity(effective_trials);

        for _ in 0..effective_trials {
            let payoff = if antithetic {
                self.generator
                    .fill_antithetic(times, &mut self.rng, &mut path, &mut a_path);
                let primary = self.payoff.calculate(&path)?;
                let mirror = self.payoff.calculate(&a_path)?;
                (primary + mirror) / 2.0
            } else {
                self.generator.fill_path(times, &mut self.rng, &mut path);
                self.payoff.calculate(&path)?
            };
            samples.push(payoff * discount_factor);
        }

        let (price, std_error) = mean_and_std_error(&samples)?;

        debug!(price, std_error, "Monte Carlo pricing complete");

        Ok(PricingResult { price, std_error })
    }
}
