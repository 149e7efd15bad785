//! # Pricer Engine (Layer 3: Monte Carlo Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing drives the simulation-and-aggregation pipeline:
//! - Seeded random number generation (`rng`)
//! - GBM path generation over arbitrary observation schedules (`mc::paths`)
//! - Trial loop with antithetic pairing, discounting and standard error (`mc::pricer`)
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): labels, `ObservationSchedule`, `PricingError`
//! - Layer 2 (pricer_models): `GbmModel`, `PathPayoff` and the payoff family
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{ObservationSchedule, OptionRight};
//! use pricer_models::instruments::AsianArithmeticPayoff;
//! use pricer_models::models::GbmModel;
//! use pricer_pricing::mc::{GbmPathGenerator, MonteCarloConfig, MonteCarloPricer};
//!
//! let model = GbmModel::new(100.0, 0.05, 0.03, 0.1).unwrap();
//! let payoff = AsianArithmeticPayoff::new(103.0, OptionRight::Call);
//! let config = MonteCarloConfig::builder().seed(1).build().unwrap();
//!
//! let mut pricer = MonteCarloPricer::new(config, GbmPathGenerator::new(model), payoff);
//!
//! // Monthly setting dates over one year
//! let schedule = ObservationSchedule::uniform(12, 1.0).unwrap();
//! let result = pricer.price(&schedule, 10_000, true).unwrap();
//! println!("Price: {:.4} +/- {:.4}", result.price, result.std_error);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

// Random number generation infrastructure
pub mod rng;

// Monte Carlo engine
pub mod mc;

// Re-export commonly used items for convenience
pub use mc::{
    GbmPathGenerator, MonteCarloConfig, MonteCarloPricer, PathGenerator, PricingResult,
};
