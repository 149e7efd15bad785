//! Vanilla (European) option payoff.

use pricer_core::types::{OptionRight, PricingError};

use super::payoff::{terminal, PathPayoff};

/// European call or put settled on the last price of the path.
///
/// Earlier observations are ignored, so a two-point schedule
/// `[0, maturity]` is sufficient.
///
/// # Examples
/// ```
/// use pricer_models::instruments::{PathPayoff, VanillaPayoff};
///
/// let payoff = VanillaPayoff::from_labels(150.0, "Call").unwrap();
/// assert_eq!(payoff.calculate(&[160.0]).unwrap(), 10.0);
/// assert_eq!(payoff.calculate(&[140.0]).unwrap(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VanillaPayoff {
    strike: f64,
    right: OptionRight,
}

impl VanillaPayoff {
    /// Creates a vanilla payoff.
    pub fn new(strike: f64, right: OptionRight) -> Self {
        Self { strike, right }
    }

    /// Creates a vanilla payoff from an option right label (`"Call"` or `"Put"`).
    ///
    /// # Errors
    /// Returns `PricingError::InvalidLabel` for any other label.
    pub fn from_labels(strike: f64, right: &str) -> Result<Self, PricingError> {
        Ok(Self::new(strike, right.parse()?))
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
}

impl PathPayoff for VanillaPayoff {
    #[inline]
    fn calculate(&self, path: &[f64]) -> Result<f64, PricingError> {
        Ok(self.right.intrinsic(terminal(path)?, self.strike))
    }
}
