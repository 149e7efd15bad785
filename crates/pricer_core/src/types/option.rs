//! Option labels with construction-time validation.
//!
//! Each label type is a closed enumeration parsed from its exact,
//! case-sensitive name. Parsing failures report the full allowed set.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::{BarrierActivation, BarrierDirection, OptionRight};
//!
//! let right: OptionRight = "Put".parse().unwrap();
//! let direction: BarrierDirection = "Down".parse().unwrap();
//! let activation: BarrierActivation = "Out".parse().unwrap();
//!
//! assert_eq!(right, OptionRight::Put);
//! assert_eq!(format!("{}-and-{}", direction, activation), "Down-and-Out");
//!
//! assert!("put".parse::<OptionRight>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Right of an option.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionRight {
    /// Right to buy: pays max(S - K, 0)
    Call,
    /// Right to sell: pays max(K - S, 0)
    Put,
}

impl OptionRight {
    /// Returns the label used for parsing and display.
    pub fn name(&self) -> &'static str {
        match self {
            OptionRight::Call => "Call",
            OptionRight::Put => "Put",
        }
    }

    /// Floored intrinsic value of the right at settlement price `spot`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::OptionRight;
    ///
    /// assert_eq!(OptionRight::Call.intrinsic(160.0, 150.0), 10.0);
    /// assert_eq!(OptionRight::Call.intrinsic(140.0, 150.0), 0.0);
    /// assert_eq!(OptionRight::Put.intrinsic(140.0, 150.0), 10.0);
    /// ```
    #[inline]
    pub fn intrinsic(&self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionRight::Call => (spot - strike).max(0.0),
            OptionRight::Put => (strike - spot).max(0.0),
        }
    }
}

impl FromStr for OptionRight {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Call" => Ok(OptionRight::Call),
            "Put" => Ok(OptionRight::Put),
            _ => Err(PricingError::InvalidLabel {
                kind: "option right",
                value: s.to_string(),
                expected: "Call, Put",
            }),
        }
    }
}

impl fmt::Display for OptionRight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Side of the spot from which a barrier is approached.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierDirection {
    /// Barrier sits above the spot; breached once the price reaches it
    Up,
    /// Barrier sits below the spot; breached once the price falls to it
    Down,
}

impl BarrierDirection {
    /// Returns the label used for parsing and display.
    pub fn name(&self) -> &'static str {
        match self {
            BarrierDirection::Up => "Up",
            BarrierDirection::Down => "Down",
        }
    }

    /// Returns true while `price` is strictly on the uncrossed side of `barrier`.
    ///
    /// Touching the barrier counts as a breach.
    #[inline]
    pub fn is_inside(&self, price: f64, barrier: f64) -> bool {
        match self {
            BarrierDirection::Up => barrier - price > 0.0,
            BarrierDirection::Down => price - barrier > 0.0,
        }
    }
}

impl FromStr for BarrierDirection {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Up" => Ok(BarrierDirection::Up),
            "Down" => Ok(BarrierDirection::Down),
            _ => Err(PricingError::InvalidLabel {
                kind: "barrier direction",
                value: s.to_string(),
                expected: "Up, Down",
            }),
        }
    }
}

impl fmt::Display for BarrierDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Knock-in or knock-out behaviour of a barrier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierActivation {
    /// Option only pays if the barrier was breached at least once
    In,
    /// Option only pays if the barrier was never breached
    Out,
}

impl BarrierActivation {
    /// Returns the label used for parsing and display.
    pub fn name(&self) -> &'static str {
        match self {
            BarrierActivation::In => "In",
            BarrierActivation::Out => "Out",
        }
    }

    /// Activation weight (0 or 1) given whether every monitored price stayed inside.
    #[inline]
    pub fn weight(&self, all_inside: bool) -> f64 {
        let alive = match self {
            BarrierActivation::In => !all_inside,
            BarrierActivation::Out => all_inside,
        };
        if alive {
            1.0
        } else {
            0.0
        }
    }
}

impl FromStr for BarrierActivation {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In" => Ok(BarrierActivation::In),
            "Out" => Ok(BarrierActivation::Out),
            _ => Err(PricingError::InvalidLabel {
                kind: "barrier activation",
                value: s.to_string(),
                expected: "In, Out",
            }),
        }
    }
}

impl fmt::Display for BarrierActivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
