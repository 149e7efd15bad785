//! End-to-end tests for exotic option pricing
//!
//! These tests drive the full stack:
//! - L1 (pricer_core): labels, schedules, errors
//! - L2 (pricer_models): GBM scenario, payoff evaluators
//! - L3 (pricer_pricing): path generation, Monte Carlo engine

use approx::assert_relative_eq;
use pricer_core::types::{ObservationSchedule, PricingError};
use pricer_models::instruments::{
    AsianArithmeticPayoff, DiscreteBarrierPayoff, PathPayoff, Payoff, VanillaPayoff,
};
use pricer_models::models::GbmModel;
use pricer_pricing::mc::{GbmPathGenerator, MonteCarloConfig, MonteCarloPricer, PricingResult};

fn market() -> GbmModel {
    GbmModel::new(100.0, 0.05, 0.03, 0.1).unwrap()
}

fn pricer(payoff: Payoff, seed: u64) -> MonteCarloPricer<GbmPathGenerator, Payoff> {
    let config = MonteCarloConfig::builder().seed(seed).build().unwrap();
    MonteCarloPricer::new(config, GbmPathGenerator::new(market()), payoff)
}

fn call(strike: f64) -> Payoff {
    VanillaPayoff::from_labels(strike, "Call").unwrap().into()
}

fn put(strike: f64) -> Payoff {
    VanillaPayoff::from_labels(strike, "Put").unwrap().into()
}

fn asian_call(strike: f64) -> Payoff {
    AsianArithmeticPayoff::from_labels(strike, "Call").unwrap().into()
}

fn barrier(strike: f64, right: &str, level: f64, direction: &str, activation: &str) -> Payoff {
    DiscreteBarrierPayoff::from_labels(strike, right, level, direction, activation)
        .unwrap()
        .into()
}

// =============================================================================
// Payoff evaluation
// =============================================================================

/// Vanilla settles on the terminal price only.
#[test]
fn test_vanilla_payoff_values() {
    let payoff = call(150.0);
    assert_eq!(payoff.calculate(&[160.0]).unwrap(), 10.0);
    assert_eq!(payoff.calculate(&[140.0]).unwrap(), 0.0);
}

/// Asian settles on the mean of every observation.
#[test]
fn test_asian_payoff_value() {
    let payoff = asian_call(150.0);
    assert_eq!(
        payoff
            .calculate(&[140.0, 150.0, 160.0, 170.0, 180.0])
            .unwrap(),
        10.0
    );
}

/// Down-and-out call survives until the barrier is crossed.
#[test]
fn test_down_and_out_payoff_values() {
    let payoff = barrier(100.0, "Call", 90.0, "Down", "Out");
    assert_eq!(payoff.calculate(&[100.0, 110.0, 120.0]).unwrap(), 20.0);
    assert_eq!(
        payoff
            .calculate(&[100.0, 110.0, 120.0, 80.0, 110.0])
            .unwrap(),
        0.0
    );
}

/// Every evaluator rejects an empty path.
#[test]
fn test_empty_path_rejected() {
    for payoff in [
        call(100.0),
        asian_call(100.0),
        barrier(100.0, "Call", 90.0, "Down", "Out"),
    ] {
        assert_eq!(payoff.calculate(&[]), Err(PricingError::EmptyPath));
    }
}

/// Labels are matched case-sensitively and the error names the allowed set.
#[test]
fn test_unknown_labels_rejected() {
    let err = VanillaPayoff::from_labels(100.0, "call").unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(err.to_string().contains("Call, Put"));

    let err = DiscreteBarrierPayoff::from_labels(100.0, "Call", 90.0, "Sideways", "Out").unwrap_err();
    assert!(err.to_string().contains("Up, Down"));

    let err = DiscreteBarrierPayoff::from_labels(100.0, "Call", 90.0, "Down", "Both").unwrap_err();
    assert!(err.to_string().contains("In, Out"));
}

// =============================================================================
// Engine contract
// =============================================================================

/// Trial budgets smaller than the schedule are rejected.
#[test]
fn test_trial_budget_below_schedule_length() {
    let weekly = ObservationSchedule::uniform(52, 1.0).unwrap();
    let mut pricer = pricer(asian_call(103.0), 1);

    let err = pricer.price(&weekly, 52, true).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(
        err,
        PricingError::InsufficientTrials {
            n_trials: 52,
            schedule_len: 53
        }
    );

    // 53 trials pass the budget check but leave a single sample
    assert_eq!(
        pricer.price(&weekly, 53, true),
        Err(PricingError::InsufficientSamples { samples: 1 })
    );
}

/// Reseeding before identical calls yields bit-identical results.
#[test]
fn test_reseed_reproducibility() {
    let monthly = ObservationSchedule::uniform(12, 1.0).unwrap();
    let payoff = barrier(103.0, "Call", 80.0, "Down", "Out");

    let mut first = pricer(payoff, 7);
    let mut second = pricer(payoff, 99);

    first.reseed(1);
    second.reseed(1);
    let a = first.price(&monthly, 100_000, true).unwrap();
    let b = second.price(&monthly, 100_000, true).unwrap();
    assert_eq!(a, b);

    first.reseed(1);
    let c = first.price(&monthly, 100_000, true).unwrap();
    assert_eq!(a, c);
}

/// Knock-in plus knock-out rebuilds the vanilla on the same draws.
#[test]
fn test_in_out_parity() {
    let monthly = ObservationSchedule::uniform(12, 1.0).unwrap();
    let n_trials = 130_000;

    let mut pricer = pricer(barrier(103.0, "Call", 95.0, "Down", "Out"), 1);
    let knock_out = pricer.price(&monthly, n_trials, true).unwrap();

    pricer.reset();
    pricer.set_payoff(barrier(103.0, "Call", 95.0, "Down", "In"));
    let knock_in = pricer.price(&monthly, n_trials, true).unwrap();

    pricer.reset();
    pricer.set_payoff(call(103.0));
    let vanilla = pricer.price(&monthly, n_trials, true).unwrap();

    assert!(knock_out.price <= vanilla.price);
    assert!(knock_in.price <= vanilla.price);
    assert_relative_eq!(
        knock_out.price + knock_in.price,
        vanilla.price,
        max_relative = 1e-10
    );
}

/// Call minus put on the same draws tracks the discounted forward.
#[test]
fn test_put_call_parity() {
    let annual = [0.0, 1.0];
    let n_trials = 400_000;

    let mut pricer = pricer(call(103.0), 3);
    let call_price = pricer.price(&annual, n_trials, true).unwrap();

    pricer.reset();
    pricer.set_payoff(put(103.0));
    let put_price = pricer.price(&annual, n_trials, true).unwrap();

    // Discounting at the net rate: C - P = S - K exp(-(r - q) T)
    let expected = 100.0 - 103.0 * (-0.02_f64).exp();
    assert!((call_price.price - put_price.price - expected).abs() < 0.05);
}

/// Denser averaging raises the Asian call price across seeds.
#[test]
fn test_asian_price_increases_with_monitoring_density() {
    let quarterly = ObservationSchedule::uniform(4, 1.0).unwrap();
    let monthly = ObservationSchedule::uniform(12, 1.0).unwrap();
    let weekly = ObservationSchedule::uniform(52, 1.0).unwrap();
    let n_trials = 100_000;
    let seeds = 1..=20u64;

    let mean_price = |times: &ObservationSchedule| {
        let mut pricer = pricer(asian_call(103.0), 0);
        let total: f64 = seeds
            .clone()
            .map(|seed| {
                pricer.reseed(seed);
                pricer.price(times, n_trials, true).unwrap().price
            })
            .sum();
        total / 20.0
    };

    let coarse = mean_price(&quarterly);
    assert!(coarse < mean_price(&monthly));
    assert!(coarse < mean_price(&weekly));
}

/// Results carry a usable error estimate.
#[test]
fn test_result_reports_standard_error() {
    let monthly = ObservationSchedule::uniform(12, 1.0).unwrap();
    let mut pricer = pricer(asian_call(103.0), 1);

    let result: PricingResult = pricer.price_with_config(&monthly).unwrap();
    assert!(result.price > 0.0);
    assert!(result.std_error > 0.0);
    assert!(result.std_error < result.price);
    assert_relative_eq!(result.confidence_95(), 1.96 * result.std_error);
}
