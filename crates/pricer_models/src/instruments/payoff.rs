//! PathPayoff trait and the payoff enum.

use std::fmt;

use pricer_core::types::PricingError;

use super::{AsianArithmeticPayoff, DiscreteBarrierPayoff, VanillaPayoff};

/// Reduces a simulated price path to a single cash flow.
///
/// Implementations are pure: the same path always yields the same payoff,
/// and the result is never negative.
///
/// # Errors
///
/// `calculate` fails with `PricingError::EmptyPath` on an empty path.
pub trait PathPayoff {
    /// Computes the undiscounted payoff of `path`.
    fn calculate(&self, path: &[f64]) -> Result<f64, PricingError>;
}

/// Terminal element of a path, or `EmptyPath`.
#[inline]
pub(crate) fn terminal(path: &[f64]) -> Result<f64, PricingError> {
    path.last().copied().ok_or(PricingError::EmptyPath)
}

/// Payoff specification across the supported option families.
///
/// Enum-based so one pricer can be reused across scenarios with different
/// payoff families without dynamic dispatch.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Payoff {
    /// European payoff on the terminal price
    Vanilla(VanillaPayoff),
    /// Payoff on the arithmetic average of all observations
    AsianArithmetic(AsianArithmeticPayoff),
    /// Terminal payoff switched on or off by discrete barrier monitoring
    DiscreteBarrier(DiscreteBarrierPayoff),
}

impl Payoff {
    /// Strike of the underlying call or put.
    pub fn strike(&self) -> f64 {
        match self {
            Payoff::Vanilla(p) => p.strike(),
            Payoff::AsianArithmetic(p) => p.strike(),
            Payoff::DiscreteBarrier(p) => p.strike(),
        }
    }
}

impl PathPayoff for Payoff {
    #[inline]
    fn calculate(&self, path: &[f64]) -> Result<f64, PricingError> {
        match self {
            Payoff::Vanilla(p) => p.calculate(path),
            Payoff::AsianArithmetic(p) => p.calculate(path),
            Payoff::DiscreteBarrier(p) => p.calculate(path),
        }
    }
}

impl From<VanillaPayoff> for Payoff {
    fn from(payoff: VanillaPayoff) -> Self {
        Payoff::Vanilla(payoff)
    }
}

impl From<AsianArithmeticPayoff> for Payoff {
    fn from(payoff: AsianArithmeticPayoff) -> Self {
        Payoff::AsianArithmetic(payoff)
    }
}

impl From<DiscreteBarrierPayoff> for Payoff {
    fn from(payoff: DiscreteBarrierPayoff) -> Self {
        Payoff::DiscreteBarrier(payoff)
    }
}

impl fmt::Display for Payoff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payoff::Vanilla(p) => write!(f, "Vanilla({} K={})", p.right(), p.strike()),
            Payoff::AsianArithmetic(p) => {
                write!(f, "AsianArithmetic({} K={})", p.right(), p.strike())
            }
            Payoff::DiscreteBarrier(p) => write!(
                f,
                "DiscreteBarrier({}-and-{} {} K={}, B={})",
                p.direction(),
                p.activation(),
                p.right(),
                p.strike(),
                p.barrier()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::{BarrierActivation, BarrierDirection, OptionRight};

    #[test]
    fn test_enum_dispatch_matches_variants() {
        let path = [100.0, 110.0, 80.0, 120.0];

        let vanilla = VanillaPayoff::new(100.0, OptionRight::Call);
        let asian = AsianArithmeticPayoff::new(100.0, OptionRight::Call);
        let barrier = DiscreteBarrierPayoff::new(
            100.0,
            OptionRight::Call,
            90.0,
            BarrierDirection::Down,
            BarrierActivation::In,
        );

        assert_eq!(
            Payoff::from(vanilla).calculate(&path),
            vanilla.calculate(&path)
        );
        assert_eq!(Payoff::from(asian).calculate(&path), asian.calculate(&path));
        assert_eq!(
            Payoff::from(barrier).calculate(&path),
            barrier.calculate(&path)
        );
    }

    #[test]
    fn test_enum_rejects_empty_path() {
        let payoff: Payoff = VanillaPayoff::new(100.0, OptionRight::Put).into();
        assert_eq!(payoff.calculate(&[]), Err(PricingError::EmptyPath));
    }

    #[test]
    fn test_strike() {
        let payoff: Payoff = AsianArithmeticPayoff::new(103.0, OptionRight::Call).into();
        assert_eq!(payoff.strike(), 103.0);
    }

    #[test]
    fn test_display() {
        let barrier: Payoff = DiscreteBarrierPayoff::new(
            103.0,
            OptionRight::Call,
            80.0,
            BarrierDirection::Down,
            BarrierActivation::Out,
        )
        .into();
        assert_eq!(
            barrier.to_string(),
            "DiscreteBarrier(Down-and-Out Call K=103, B=80)"
        );

        let vanilla: Payoff = VanillaPayoff::new(103.0, OptionRight::Put).into();
        assert_eq!(vanilla.to_string(), "Vanilla(Put K=103)");
    }
}
