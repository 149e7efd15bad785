//! Geometric Brownian Motion (GBM) model implementation.
//!
//! GBM with a continuous dividend yield is described by:
//! ```text
//! dS = (r - q) * S * dt + sigma * S * dW
//! ```
//! where:
//! - S = asset price
//! - r = risk-free rate
//! - q = dividend yield
//! - sigma = volatility
//! - dW = Wiener process increment
//!
//! ## Exact step
//!
//! The process is advanced with its closed-form solution rather than an
//! Euler-Maruyama approximation, so any step size is exact given one
//! standard normal draw `z`:
//! ```text
//! S(t+dt) = S(t) * exp((r - q - 0.5*sigma^2)*dt) * exp(sigma*sqrt(dt)*z)
//! ```
//!
//! The model is deterministic: it maps a draw to a price. Randomness is
//! owned by the pricing layer.

use pricer_core::types::PricingError;

/// Market scenario for a single underlying under GBM.
///
/// # Examples
///
/// ```
/// use pricer_models::models::GbmModel;
///
/// let model = GbmModel::new(100.0, 0.05, 0.03, 0.1).unwrap();
/// assert!((model.net_rate() - 0.02).abs() < 1e-15);
///
/// // A zero-length step leaves the price unchanged
/// assert_eq!(model.evolve(100.0, 0.0, 1.5), 100.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GbmModel {
    spot: f64,
    rate: f64,
    dividend: f64,
    volatility: f64,
}

impl GbmModel {
    /// Create a new market scenario with validation.
    ///
    /// # Arguments
    /// * `spot` - Initial spot price (must be positive)
    /// * `rate` - Risk-free rate (annualised)
    /// * `dividend` - Continuous dividend yield (annualised)
    /// * `volatility` - Volatility (annualised, must be non-negative)
    ///
    /// # Errors
    /// Returns `PricingError::InvalidInput` if any parameter is not finite,
    /// `spot <= 0` or `volatility < 0`.
    pub fn new(spot: f64, rate: f64, dividend: f64, volatility: f64) -> Result<Self, PricingError> {
        let model = Self {
            spot,
            rate,
            dividend,
            volatility,
        };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<(), PricingError> {
        for (name, value) in [
            ("spot", self.spot),
            ("rate", self.rate),
            ("dividend", self.dividend),
            ("volatility", self.volatility),
        ] {
            if !value.is_finite() {
                return Err(PricingError::InvalidInput(format!(
                    "{} must be finite, got {}",
                    name, value
                )));
            }
        }
        if self.spot <= 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "spot must be positive, got {}",
                self.spot
            )));
        }
        if self.volatility < 0.0 {
            return Err(PricingError::InvalidInput(format!(
                "volatility must be non-negative, got {}",
                self.volatility
            )));
        }
        Ok(())
    }

    /// Returns a copy of this scenario with a different spot.
    ///
    /// # Errors
    /// Same validation as [`GbmModel::new`].
    pub fn with_spot(self, spot: f64) -> Result<Self, PricingError> {
        Self::new(spot, self.rate, self.dividend, self.volatility)
    }

    /// Returns a copy of this scenario with a different volatility.
    ///
    /// # Errors
    /// Same validation as [`GbmModel::new`].
    pub fn with_volatility(self, volatility: f64) -> Result<Self, PricingError> {
        Self::new(self.spot, self.rate, self.dividend, volatility)
    }

    /// Initial spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Dividend yield.
    #[inline]
    pub fn dividend(&self) -> f64 {
        self.dividend
    }

    /// Volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Net risk-free rate `r - q`.
    #[inline]
    pub fn net_rate(&self) -> f64 {
        self.rate - self.dividend
    }

    /// Deterministic growth factor `exp((r - q - 0.5*sigma^2)*dt)` over one step.
    #[inline]
    pub fn drift_factor(&self, dt: f64) -> f64 {
        ((self.net_rate() - 0.5 * self.volatility * self.volatility) * dt).exp()
    }

    /// Random growth factor `exp(sigma*sqrt(dt)*z)` for a standard normal draw `z`.
    #[inline]
    pub fn diffusion_factor(&self, dt: f64, z: f64) -> f64 {
        (self.volatility * dt.sqrt() * z).exp()
    }

    /// Advances `spot` by one exact step of length `dt` using draw `z`.
    #[inline]
    pub fn evolve(&self, spot: f64, dt: f64, z: f64) -> f64 {
        spot * self.drift_factor(dt) * self.diffusion_factor(dt, z)
    }

    /// Advances a primary and an antithetic price by one step from a single draw.
    ///
    /// The primary price moves with `z`, the antithetic price with `-z`; both
    /// share the same drift factor.
    #[inline]
    pub fn evolve_antithetic(&self, spot: f64, a_spot: f64, dt: f64, z: f64) -> (f64, f64) {
        let drift = self.drift_factor(dt);
        (
            spot * drift * self.diffusion_factor(dt, z),
            a_spot * drift * self.diffusion_factor(dt, -z),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn standard_model() -> GbmModel {
        GbmModel::new(100.0, 0.05, 0.03, 0.1).unwrap()
    }

    #[test]
    fn test_new_valid() {
        let model = standard_model();
        assert_eq!(model.spot(), 100.0);
        assert_eq!(model.rate(), 0.05);
        assert_eq!(model.dividend(), 0.03);
        assert_eq!(model.volatility(), 0.1);
    }

    #[test]
    fn test_new_rejects_invalid() {
        assert!(GbmModel::new(0.0, 0.05, 0.03, 0.1).is_err()); // zero spot
        assert!(GbmModel::new(-100.0, 0.05, 0.03, 0.1).is_err()); // negative spot
        assert!(GbmModel::new(100.0, 0.05, 0.03, -0.1).is_err()); // negative vol
        assert!(GbmModel::new(f64::NAN, 0.05, 0.03, 0.1).is_err()); // NaN spot
        assert!(GbmModel::new(100.0, f64::INFINITY, 0.03, 0.1).is_err()); // infinite rate
    }

    #[test]
    fn test_zero_volatility_allowed() {
        let model = GbmModel::new(100.0, 0.05, 0.0, 0.0).unwrap();
        assert_relative_eq!(model.evolve(100.0, 1.0, 3.0), 100.0 * 0.05_f64.exp());
    }

    #[test]
    fn test_with_spot() {
        let model = standard_model().with_spot(84.0).unwrap();
        assert_eq!(model.spot(), 84.0);
        assert_eq!(model.volatility(), 0.1);
        assert!(standard_model().with_spot(-1.0).is_err());
        assert!(standard_model().with_volatility(-0.2).is_err());
    }

    #[test]
    fn test_zero_step_is_identity() {
        let model = standard_model();
        assert_eq!(model.drift_factor(0.0), 1.0);
        assert_eq!(model.diffusion_factor(0.0, -2.5), 1.0);
        assert_eq!(model.evolve(123.0, 0.0, 0.7), 123.0);
    }

    #[test]
    fn test_evolve_matches_closed_form() {
        let model = standard_model();
        let dt: f64 = 0.25;
        let z = 0.8;
        let expected =
            100.0 * ((0.02 - 0.5 * 0.01) * dt).exp() * (0.1 * dt.sqrt() * z).exp();
        assert_relative_eq!(model.evolve(100.0, dt, z), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_antithetic_shares_drift() {
        let model = standard_model();
        let dt = 1.0 / 12.0;
        let z = 1.3;
        let (up, down) = model.evolve_antithetic(100.0, 100.0, dt, z);

        assert_eq!(up, model.evolve(100.0, dt, z));
        assert_eq!(down, model.evolve(100.0, dt, -z));

        // Mirrored diffusion cancels in the product, leaving the drift squared
        let drift = model.drift_factor(dt);
        assert_relative_eq!(up * down, 100.0 * 100.0 * drift * drift, epsilon = 1e-9);
    }
}
