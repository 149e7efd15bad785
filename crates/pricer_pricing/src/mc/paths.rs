//! Path generation for Monte Carlo simulation.
//!
//! This module defines the [`PathGenerator`] capability the pricer depends
//! on, and its GBM implementation.
//!
//! # Path layout
//!
//! A path holds one price per observation time: `path[i]` is the simulated
//! price at `times[i]`, and `path[0]` is always the spot. One standard normal
//! draw is consumed per consecutive pair of times, in order, so a
//! single-point schedule consumes nothing.
//!
//! # Antithetic pairs
//!
//! The antithetic variant consumes exactly the same draws as the plain one:
//! each draw `z` moves the primary path with `z` and the mirror path with
//! `-z`.

use pricer_models::models::GbmModel;

use crate::rng::PricerRng;

/// Capability to simulate price paths over an observation schedule.
///
/// `fill_*` write into caller-owned buffers so the trial loop can reuse
/// them; `generate*` are allocating conveniences built on top.
///
/// Buffers are expected to match `times` in length. A shorter buffer is
/// filled as far as it reaches and consumes one draw per step written; slots
/// past the end of `times` are left untouched.
pub trait PathGenerator {
    /// Initial price of every generated path.
    fn spot(&self) -> f64;

    /// Net rate used to discount payoffs back to the first observation time.
    fn net_rate(&self) -> f64;

    /// Simulates one path into `path` (same length as `times`).
    fn fill_path(&self, times: &[f64], rng: &mut PricerRng, path: &mut [f64]);

    /// Simulates a primary path and its antithetic mirror from shared draws.
    fn fill_antithetic(
        &self,
        times: &[f64],
        rng: &mut PricerRng,
        path: &mut [f64],
        a_path: &mut [f64],
    );

    /// Simulates one path.
    fn generate(&self, times: &[f64], rng: &mut PricerRng) -> Vec<f64> {
        let mut path = vec![0.0; times.len()];
        self.fill_path(times, rng, &mut path);
        path
    }

    /// Simulates a primary path and its antithetic mirror.
    fn generate_antithetic(&self, times: &[f64], rng: &mut PricerRng) -> (Vec<f64>, Vec<f64>) {
        let mut path = vec![0.0; times.len()];
        let mut a_path = vec![0.0; times.len()];
        self.fill_antithetic(times, rng, &mut path, &mut a_path);
        (path, a_path)
    }
}

/// GBM path generator with continuous dividend yield.
///
/// Uses the exact log-normal step of [`GbmModel`] for each time increment,
/// so non-uniform schedules are simulated without discretisation bias.
///
/// # Examples
///
/// ```rust
/// use pricer_models::models::GbmModel;
/// use pricer_pricing::mc::{GbmPathGenerator, PathGenerator};
/// use pricer_pricing::rng::PricerRng;
///
/// let generator = GbmPathGenerator::new(GbmModel::new(100.0, 0.1, 0.01, 0.3).unwrap());
/// let mut rng = PricerRng::from_seed(42);
///
/// let path = generator.generate(&[0.0, 1.0, 2.0, 3.0], &mut rng);
/// assert_eq!(path.len(), 4);
/// assert_eq!(path[0], 100.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmPathGenerator {
    model: GbmModel,
}

impl GbmPathGenerator {
    /// Creates a generator for the given market scenario.
    #[inline]
    pub fn new(model: GbmModel) -> Self {
        Self { model }
    }

    /// Returns the market scenario.
    #[inline]
    pub fn model(&self) -> &GbmModel {
        &self.model
    }
}

impl From<GbmModel> for GbmPathGenerator {
    fn from(model: GbmModel) -> Self {
        Self::new(model)
    }
}

impl PathGenerator for GbmPathGenerator {
    #[inline]
    fn spot(&self) -> f64 {
        self.model.spot()
    }

    #[inline]
    fn net_rate(&self) -> f64 {
        self.model.net_rate()
    }

    fn fill_path(&self, times: &[f64], rng: &mut PricerRng, path: &mut [f64]) {
        let Some((first, rest)) = path.split_first_mut() else {
            return;
        };

        let mut price = self.model.spot();
        *first = price;
        for (slot, window) in rest.iter_mut().zip(times.windows(2)) {
            price = self.model.evolve(price, window[1] - window[0], rng.gen_normal());
            *slot = price;
        }
    }

    fn fill_antithetic(
        &self,
        times: &[f64],
        rng: &mut PricerRng,
        path: &mut [f64],
        a_path: &mut [f64],
    ) {
        let (Some((first, rest)), Some((a_first, a_rest))) =
            (path.split_first_mut(), a_path.split_first_mut())
        else {
            return;
        };

        let mut price = self.model.spot();
        let mut a_price = price;
        *first = price;
        *a_first = a_price;
        let slots = rest.iter_mut().zip(a_rest.iter_mut());
        for ((slot, a_slot), window) in slots.zip(times.windows(2)) {
            let dt = window[1] - window[0];
            (price, a_price) = self.model.evolve_antithetic(price, a_price, dt, rng.gen_normal());
            *slot = price;
            *a_slot = a_price;
        }
    }
}
