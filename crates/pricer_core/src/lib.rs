//! # pricer_core: Foundation Types for Exotic Monte Carlo Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option labels: `OptionRight`, `BarrierDirection`, `BarrierActivation` (`types::option`)
//! - Observation schedules: `ObservationSchedule` (`types::schedule`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{ObservationSchedule, OptionRight};
//!
//! // Labels are parsed with an exact, case-sensitive match
//! let right: OptionRight = "Call".parse().unwrap();
//! assert_eq!(right.intrinsic(110.0, 103.0), 7.0);
//!
//! // Monthly setting dates over one year
//! let schedule = ObservationSchedule::uniform(12, 1.0).unwrap();
//! assert_eq!(schedule.len(), 13);
//! assert_eq!(schedule.maturity(), 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for labels and schedules

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
