//! Monte Carlo pricing for path-dependent and path-independent options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer<G, P>
//! ├── MonteCarloConfig  (trial budget, antithetic flag, seed)
//! ├── PricerRng         (single shared random stream)
//! ├── G: PathGenerator  (produces one path, or an antithetic pair)
//! └── P: PathPayoff     (reduces a path to a cash flow)
//! ```
//!
//! The pricer only talks to its collaborators through the [`PathGenerator`]
//! and [`PathPayoff`](pricer_models::instruments::PathPayoff) traits.
//!
//! # Trial budget
//!
//! The requested trial count is a total budget: `price(times, n, _)` runs
//! `n / times.len()` (integer division) simulated trials, so denser schedules
//! get fewer, longer trials.
//!
//! # Examples
//!
//! ## Vanilla call against a down-and-out call
//!
//! ```rust
//! use pricer_core::types::{BarrierActivation, BarrierDirection, ObservationSchedule, OptionRight};
//! use pricer_models::instruments::{DiscreteBarrierPayoff, Payoff, VanillaPayoff};
//! use pricer_models::models::GbmModel;
//! use pricer_pricing::mc::{GbmPathGenerator, MonteCarloConfig, MonteCarloPricer};
//!
//! let model = GbmModel::new(100.0, 0.05, 0.03, 0.1).unwrap();
//! let config = MonteCarloConfig::builder().n_trials(20_000).seed(1).build().unwrap();
//! let barrier = DiscreteBarrierPayoff::new(
//!     103.0,
//!     OptionRight::Call,
//!     80.0,
//!     BarrierDirection::Down,
//!     BarrierActivation::Out,
//! );
//!
//! let mut pricer = MonteCarloPricer::new(
//!     config,
//!     GbmPathGenerator::new(model),
//!     Payoff::from(barrier),
//! );
//! let monthly = ObservationSchedule::uniform(12, 1.0).unwrap();
//! let knock_out = pricer.price_with_config(&monthly).unwrap();
//!
//! pricer.set_payoff(VanillaPayoff::new(103.0, OptionRight::Call).into());
//! let vanilla = pricer.price_with_config(&[0.0, 1.0]).unwrap();
//!
//! assert!(knock_out.price <= vanilla.price + 3.0 * vanilla.std_error + 3.0 * knock_out.std_error);
//! ```

pub mod config;
pub mod error;
pub mod paths;
pub mod pricer;
pub mod statistics;

// Re-exports for convenient access
pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_TRIALS};
pub use error::ConfigError;
pub use paths::{GbmPathGenerator, PathGenerator};
pub use pricer::{MonteCarloPricer, PricingResult};
pub use statistics::mean_and_std_error;
