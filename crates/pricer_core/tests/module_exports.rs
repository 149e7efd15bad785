//! Integration tests for module exports.
//!
//! Verify that all public types are accessible via absolute paths and that
//! the serialised forms keep their validation.

/// Test that label types are accessible via absolute path.
#[test]
fn test_option_module_exports() {
    use pricer_core::types::option::{BarrierActivation, BarrierDirection, OptionRight};

    assert_eq!("Put".parse::<OptionRight>().unwrap(), OptionRight::Put);
    assert_eq!("Up".parse::<BarrierDirection>().unwrap(), BarrierDirection::Up);
    assert_eq!("In".parse::<BarrierActivation>().unwrap(), BarrierActivation::In);
}

/// Test that schedule and error types are accessible via absolute path.
#[test]
fn test_schedule_module_exports() {
    use pricer_core::types::error::PricingError;
    use pricer_core::types::schedule::ObservationSchedule;

    let schedule = ObservationSchedule::uniform(4, 1.0).unwrap();
    assert_eq!(schedule.times(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
    assert_eq!(
        ObservationSchedule::from_times(Vec::new()),
        Err(PricingError::EmptySchedule)
    );
}

/// Labels serialise as their exact names.
#[cfg(feature = "serde")]
#[test]
fn test_label_serialisation() {
    use pricer_core::types::{BarrierDirection, OptionRight};

    assert_eq!(serde_json::to_string(&OptionRight::Call).unwrap(), "\"Call\"");
    let direction: BarrierDirection = serde_json::from_str("\"Down\"").unwrap();
    assert_eq!(direction, BarrierDirection::Down);
    assert!(serde_json::from_str::<OptionRight>("\"call\"").is_err());
}

/// Deserialised schedules are validated like constructed ones.
#[cfg(feature = "serde")]
#[test]
fn test_schedule_deserialisation_validates() {
    use pricer_core::types::ObservationSchedule;

    let schedule: ObservationSchedule = serde_json::from_str("[0.0, 0.5, 1.0]").unwrap();
    assert_eq!(schedule.maturity(), 1.0);
    assert_eq!(serde_json::to_string(&schedule).unwrap(), "[0.0,0.5,1.0]");

    assert!(serde_json::from_str::<ObservationSchedule>("[1.0, 0.5]").is_err());
    assert!(serde_json::from_str::<ObservationSchedule>("[]").is_err());
}
