//! # Random Number Generation Infrastructure
//!
//! This module provides the random source consumed by the Monte Carlo engine.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All generators are seeded; reseeding replays the
//!   exact same sequence of draws
//! - **Single stream**: Trials consume draws in a fixed order from one
//!   generator, so results are bit-for-bit deterministic for a given seed
//! - **Static dispatch**: Concrete `StdRng`, no `Box<dyn RngCore>`
//!
//! ## British English Convention
//!
//! All documentation in this module uses British English spelling conventions
//! ("initialise", "behaviour").
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Generate standard normal variates (mean=0, std=1)
//! let normal_value = rng.gen_normal();
//!
//! // Batch generation into pre-allocated buffer (zero allocation)
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//! ```

mod prng;

// Public re-exports
pub use prng::PricerRng;
