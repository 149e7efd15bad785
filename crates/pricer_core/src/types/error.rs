//! Error types for structured error handling.
//!
//! Every failure the pricing core can report is an invalid-argument class
//! error raised synchronously at the point of detection: label validation at
//! construction time, trial-count and sample-size checks at call time.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidLabel`: Unrecognised option right, barrier direction or activation label
/// - `InvalidInput`: Invalid market parameters
/// - `InvalidSchedule`: Malformed observation schedule
/// - `EmptySchedule`: Pricing requested over zero observation times
/// - `EmptyPath`: Payoff evaluated on a path without prices
/// - `InsufficientTrials`: Trial count below schedule length
/// - `InsufficientSamples`: Fewer than two samples for a standard error
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InsufficientTrials { n_trials: 5, schedule_len: 13 };
/// assert_eq!(
///     format!("{}", err),
///     "Invalid argument: trial count below schedule length (5 < 13)"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// Label outside its closed set.
    #[error("Invalid {kind} '{value}': expected one of [{expected}]")]
    InvalidLabel {
        /// Which label was being parsed (e.g. "option right")
        kind: &'static str,
        /// The rejected input
        value: String,
        /// Comma-separated allowed labels
        expected: &'static str,
    },

    /// Invalid market data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Observation schedule is not a finite, non-decreasing sequence.
    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    /// No observation times supplied.
    #[error("Invalid argument: observation schedule is empty")]
    EmptySchedule,

    /// Payoff evaluated on an empty path.
    #[error("Invalid argument: cannot evaluate a payoff on an empty path")]
    EmptyPath,

    /// Requested trial count is smaller than the number of observation times.
    #[error("Invalid argument: trial count below schedule length ({n_trials} < {schedule_len})")]
    InsufficientTrials {
        /// Requested trial count
        n_trials: usize,
        /// Number of observation times
        schedule_len: usize,
    },

    /// Standard error needs at least two samples.
    #[error("Invalid argument: standard error requires at least 2 samples, got {samples}")]
    InsufficientSamples {
        /// Number of samples available
        samples: usize,
    },
}

impl PricingError {
    /// Returns true for errors caused by caller-supplied arguments.
    ///
    /// The pricing core performs no numerical guarding of its own, so every
    /// variant currently falls in this class.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            PricingError::InvalidLabel { .. }
            | PricingError::InvalidInput(_)
            | PricingError::InvalidSchedule(_)
            | PricingError::EmptySchedule
            | PricingError::EmptyPath
            | PricingError::InsufficientTrials { .. }
            | PricingError::InsufficientSamples { .. } => true,
        }
    }
}
