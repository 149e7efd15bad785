//! # Pricer Models (L2: Business Logic)
//!
//! Market model and payoff definitions for exotic Monte Carlo pricing.
//!
//! This crate provides:
//! - The GBM market scenario and its exact-step transform (`models::gbm`)
//! - Path payoffs: vanilla, arithmetic Asian, discrete barrier (`instruments`)
//!
//! ## Design Principles
//!
//! - **Enum-based payoffs** for static dispatch across scenarios
//! - **Pure evaluation**: payoffs and model transforms never touch randomness;
//!   the Gaussian draws are supplied by the pricing layer

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod instruments;
pub mod models;
