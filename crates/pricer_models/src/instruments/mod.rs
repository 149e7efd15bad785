//! Path payoff definitions.
//!
//! Every payoff reduces a simulated price path, one price per observation
//! time with the spot first, to a single non-negative cash flow.
//!
//! - [`VanillaPayoff`]: settles on the terminal price
//! - [`AsianArithmeticPayoff`]: settles on the arithmetic mean of the path
//! - [`DiscreteBarrierPayoff`]: terminal settlement gated by barrier monitoring
//! - [`Payoff`]: enum over the three for static dispatch
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{AsianArithmeticPayoff, PathPayoff, Payoff};
//!
//! let payoff: Payoff = AsianArithmeticPayoff::from_labels(150.0, "Call").unwrap().into();
//! let value = payoff.calculate(&[140.0, 150.0, 160.0, 170.0, 180.0]).unwrap();
//! assert_eq!(value, 10.0);
//! ```

mod asian;
mod barrier;
mod payoff;
mod vanilla;

pub use asian::AsianArithmeticPayoff;
pub use barrier::DiscreteBarrierPayoff;
pub use payoff::{PathPayoff, Payoff};
pub use vanilla::VanillaPayoff;
