//! Discretely monitored barrier option payoff.
//!
//! The barrier is checked only at the simulated observation times:
//!
//! - **Up**: a price is inside while strictly below the barrier
//! - **Down**: a price is inside while strictly above the barrier
//! - **Out**: pays only if every observation stayed inside
//! - **In**: pays only if at least one observation breached
//!
//! Settlement always uses the terminal price, whenever the breach occurred.

use pricer_core::types::{BarrierActivation, BarrierDirection, OptionRight, PricingError};

use super::payoff::{terminal, PathPayoff};

/// Discrete barrier call or put.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{DiscreteBarrierPayoff, PathPayoff};
///
/// let down_and_out = DiscreteBarrierPayoff::from_labels(100.0, "Call", 90.0, "Down", "Out").unwrap();
///
/// // Never touches 90: behaves like the vanilla call
/// assert_eq!(down_and_out.calculate(&[100.0, 110.0, 120.0]).unwrap(), 20.0);
///
/// // Observed at 80: knocked out
/// assert_eq!(down_and_out.calculate(&[100.0, 110.0, 120.0, 80.0, 110.0]).unwrap(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscreteBarrierPayoff {
    strike: f64,
    right: OptionRight,
    barrier: f64,
    direction: BarrierDirection,
    activation: BarrierActivation,
}

impl DiscreteBarrierPayoff {
    /// Creates a discrete barrier payoff.
    pub fn new(
        strike: f64,
        right: OptionRight,
        barrier: f64,
        direction: BarrierDirection,
        activation: BarrierActivation,
    ) -> Self {
        Self {
            strike,
            right,
            barrier,
            direction,
            activation,
        }
    }

    /// Creates a discrete barrier payoff from string labels.
    ///
    /// # Arguments
    /// * `right` - `"Call"` or `"Put"`
    /// * `direction` - `"Up"` or `"Down"`
    /// * `activation` - `"In"` or `"Out"`
    ///
    /// # Errors
    /// Returns `PricingError::InvalidLabel` naming the allowed set of the
    /// first label that fails to parse.
    pub fn from_labels(
        strike: f64,
        right: &str,
        barrier: f64,
        direction: &str,
        activation: &str,
    ) -> Result<Self, PricingError> {
        Ok(Self::new(
            strike,
            right.parse()?,
            barrier,
            direction.parse()?,
            activation.parse()?,
        ))
    }

    /// Strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Option right.
    #[inline]
    pub fn right(&self) -> OptionRight {
        self.right
    }

    /// Barrier level.
    #[inline]
    pub fn barrier(&self) -> f64 {
        self.barrier
    }

    /// Barrier direction.
    #[inline]
    pub fn direction(&self) -> BarrierDirection {
        self.direction
    }

    /// Knock-in or knock-out.
    #[inline]
    pub fn activation(&self) -> BarrierActivation {
        self.activation
    }

    /// Returns 1 if the option is alive after monitoring `path`, else 0.
    pub fn activation_weight(&self, path: &[f64]) -> f64 {
        let all_inside = path
            .iter()
            .all(|&price| self.direction.is_inside(price, self.barrier));
        self.activation.weight(all_inside)
    }
}

impl PathPayoff for DiscreteBarrierPayoff {
    fn calculate(&self, path: &[f64]) -> Result<f64, PricingError> {
        let settlement = terminal(path)?;
        Ok(self.activation_weight(path) * self.right.intrinsic(settlement, self.strike))
    }
}
