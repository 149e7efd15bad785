//! Stochastic models for the underlying.
//!
//! - [`gbm`]: Geometric Brownian motion with continuous dividend yield

pub mod gbm;

pub use gbm::GbmModel;
