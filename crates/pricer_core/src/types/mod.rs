//! Core option and schedule types.
//!
//! This module provides:
//! - `option`: Closed label types (option right, barrier direction, barrier activation)
//! - `schedule`: Validated observation schedules expressed in years
//! - `error`: Structured error type for pricing operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionRight`], [`BarrierDirection`], [`BarrierActivation`] from `option`
//! - [`ObservationSchedule`] from `schedule`
//! - [`PricingError`] from `error`

pub mod error;
pub mod option;
pub mod schedule;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use option::{BarrierActivation, BarrierDirection, OptionRight};
pub use schedule::ObservationSchedule;
