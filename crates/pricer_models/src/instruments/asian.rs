//! Arithmetic-average Asian option payoff.

use pricer_core::types::{OptionRight, PricingError};

use super::payoff::PathPayoff;

/// Asian call or put settled on the arithmetic mean of every observation.
///
/// The mean includes the spot at the first observation time.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionRight;
/// use pricer_models::instruments::{AsianArithmeticPayoff, PathPayoff};
///
/// let payoff = AsianArithmeticPayoff::new(150.0, OptionRight::Call);
/// // mean = 160
/// assert_eq!(payoff.calculate(&[140.0, 150.0, 160.0, 170.0, 180.0]).unwrap(), 10.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AsianArithmeticPayoff {
    strike: f64,
    right: OptionRight,
}

impl AsianArithmeticPayoff {
    /// Creates an arithmetic Asian payoff.
    pub fn new(strike: f64, right: OptionRight) -> Self {
        Self { strike, right }
    }

    /// Creates an arithmetic Asian payoff from an option right label.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidLabel` unless `right` is `"Call"` or `"Put"`.
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

impl PathPayoff for AsianArithmeticPayoff {
    fn calculate(&self, path: &[f64]) -> Result<f64, PricingError> {
        if path.is_empty() {
            return Err(PricingError::EmptyPath);
        }
        let average = path.iter().sum::<f64>() / path.len() as f64;
        Ok(self.right.intrinsic(average, self.strike))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_call_on_average() {
        let call = AsianArithmeticPayoff::new(150.0, OptionRight::Call);
        let payoff = call
            .calculate(&[140.0, 150.0, 160.0, 170.0, 180.0])
            .unwrap();
        assert_eq!(payoff, 10.0);
    }

    #[test]
    fn test_put_on_average() {
        let put = AsianArithmeticPayoff::new(150.0, OptionRight::Put);
        // mean = 130
        let payoff = put.calculate(&[100.0, 120.0, 140.0, 160.0]).unwrap();
        assert_relative_eq!(payoff, 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_average_differs_from_terminal() {
        // Terminal 200 is deep in the money, but the average is below strike
        let call = AsianArithmeticPayoff::new(150.0, OptionRight::Call);
        assert_eq!(call.calculate(&[100.0, 100.0, 200.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_single_observation() {
        let call = AsianArithmeticPayoff::new(100.0, OptionRight::Call);
        assert_eq!(call.calculate(&[105.0]).unwrap(), 5.0);
    }

    #[test]
    fn test_empty_path() {
        let call = AsianArithmeticPayoff::new(100.0, OptionRight::Call);
        assert_eq!(call.calculate(&[]), Err(PricingError::EmptyPath));
    }

    #[test]
    fn test_from_labels_invalid() {
        let err = AsianArithmeticPayoff::from_labels(100.0, "CALL").unwrap_err();
        assert!(err.to_string().contains("[Call, Put]"));
    }

    proptest! {
        #[test]
        fn prop_payoff_non_negative(
            path in prop::collection::vec(1.0f64..500.0, 1..60),
            strike in 1.0f64..500.0,
        ) {
            for right in [OptionRight::Call, OptionRight::Put] {
                let payoff = AsianArithmeticPayoff::new(strike, right).calculate(&path).unwrap();
                prop_assert!(payoff >= 0.0);
            }
        }
    }
}
