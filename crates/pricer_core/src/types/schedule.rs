//! Observation schedules for path-dependent payoffs.
//!
//! An [`ObservationSchedule`] is the ordered set of times `[t0, t1, ..., tn]`,
//! in years, at which the underlying is simulated and observed. By convention
//! `t0 = 0` is the valuation date and contributes the spot price to the path.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::ObservationSchedule;
//!
//! // Quarterly setting dates over one year
//! let quarterly = ObservationSchedule::uniform(4, 1.0).unwrap();
//! assert_eq!(quarterly.times(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
//!
//! // Barrier dates 0, 0.05, ..., 0.95 (maturity excluded)
//! let barrier_dates = ObservationSchedule::uniform_exclusive(20, 1.0).unwrap();
//! assert_eq!(barrier_dates.len(), 20);
//! assert_eq!(barrier_dates.maturity(), 0.95);
//! ```

use std::ops::Deref;

use super::error::PricingError;

/// Validated, non-empty, non-decreasing sequence of observation times.
///
/// Dereferences to `[f64]`, so a schedule can be passed anywhere a raw
/// time slice is accepted.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct ObservationSchedule {
    times: Vec<f64>,
}

impl ObservationSchedule {
    /// Creates a schedule from explicit times.
    ///
    /// # Errors
    ///
    /// - `PricingError::EmptySchedule` if `times` is empty
    /// - `PricingError::InvalidSchedule` if a time is not finite or the
    ///   sequence decreases anywhere
    pub fn from_times(times: Vec<f64>) -> Result<Self, PricingError> {
        if times.is_empty() {
            return Err(PricingError::EmptySchedule);
        }
        if let Some(bad) = times.iter().find(|t| !t.is_finite()) {
            return Err(PricingError::InvalidSchedule(format!(
                "observation time {} is not finite",
                bad
            )));
        }
        if let Some(idx) = times.windows(2).position(|w| w[1] < w[0]) {
            return Err(PricingError::InvalidSchedule(format!(
                "times must be non-decreasing, found {} after {}",
                times[idx + 1],
                times[idx]
            )));
        }
        Ok(Self { times })
    }

    /// Evenly spaced schedule `[k * maturity / periods for k in 0..=periods]`.
    ///
    /// `uniform(12, 1.0)` gives monthly setting dates including both the
    /// valuation date and maturity (13 times).
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidSchedule` if `periods == 0` or
    /// `maturity` is not a positive finite number.
    pub fn uniform(periods: usize, maturity: f64) -> Result<Self, PricingError> {
        Self::check_grid(periods, maturity)?;
        let times = (0..=periods)
            .map(|k| maturity * k as f64 / periods as f64)
            .collect();
        Ok(Self { times })
    }

    /// Evenly spaced schedule `[k * maturity / periods for k in 0..periods]`,
    /// i.e. without the final point at `maturity`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`ObservationSchedule::uniform`].
    pub fn uniform_exclusive(periods: usize, maturity: f64) -> Result<Self, PricingError> {
        Self::check_grid(periods, maturity)?;
        let times = (0..periods)
            .map(|k| maturity * k as f64 / periods as f64)
            .collect();
        Ok(Self { times })
    }

    fn check_grid(periods: usize, maturity: f64) -> Result<(), PricingError> {
        if periods == 0 {
            return Err(PricingError::InvalidSchedule(
                "number of periods must be positive".to_string(),
            ));
        }
        if !(maturity.is_finite() && maturity > 0.0) {
            return Err(PricingError::InvalidSchedule(format!(
                "maturity must be positive and finite, got {}",
                maturity
            )));
        }
        Ok(())
    }

    /// Returns the observation times.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Returns the last observation time.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Returns the time elapsed between the first and last observation.
    #[inline]
    pub fn span(&self) -> f64 {
        self.maturity() - self.times[0]
    }
}

impl Deref for ObservationSchedule {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.times
    }
}

impl AsRef<[f64]> for ObservationSchedule {
    fn as_ref(&self) -> &[f64] {
        &self.times
    }
}

impl TryFrom<Vec<f64>> for ObservationSchedule {
    type Error = PricingError;

    fn try_from(times: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_times(times)
    }
}

impl From<ObservationSchedule> for Vec<f64> {
    fn from(schedule: ObservationSchedule) -> Self {
        schedule.times
    }
}
