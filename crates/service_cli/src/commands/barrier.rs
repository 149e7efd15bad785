//! Discrete barrier study
//!
//! One-year options struck at 103:
//! - (i) down-and-out call, barrier 80, monthly monitoring
//! - (ii) down-and-in call, barrier 80, monthly monitoring, spot 84
//! - (iii) down-and-out put, barrier 80, monthly monitoring
//! - (iv) down-and-out put, barrier 120, monitored at 0, 0.05, ..., 0.95
//!
//! followed by the vanilla call and put on `[0, 1]`.

use pricer_core::types::{BarrierActivation, BarrierDirection, ObservationSchedule, OptionRight};
use pricer_models::instruments::{DiscreteBarrierPayoff, VanillaPayoff};
use pricer_models::models::GbmModel;
use tracing::info;

use super::{Scenario, Session};
use crate::Result;

/// Study name used in reports
pub const STUDY: &str = "barrier";

const STRIKE: f64 = 103.0;

fn down(right: OptionRight, barrier: f64, activation: BarrierActivation) -> DiscreteBarrierPayoff {
    DiscreteBarrierPayoff::new(STRIKE, right, barrier, BarrierDirection::Down, activation)
}

/// Scenarios of the barrier study under `market`
pub fn scenarios(market: GbmModel) -> Result<Vec<Scenario>> {
    let monthly = ObservationSchedule::uniform(12, 1.0)?;
    let annual = ObservationSchedule::uniform(1, 1.0)?;

    Ok(vec![
        Scenario::new(
            "(i)",
            market,
            down(OptionRight::Call, 80.0, BarrierActivation::Out),
            monthly.clone(),
        ),
        Scenario::new(
            "(ii)",
            market.with_spot(84.0)?,
            down(OptionRight::Call, 80.0, BarrierActivation::In),
            monthly.clone(),
        ),
        Scenario::new(
            "(iii)",
            market,
            down(OptionRight::Put, 80.0, BarrierActivation::Out),
            monthly,
        ),
        Scenario::new(
            "(iv)",
            market,
            down(OptionRight::Put, 120.0, BarrierActivation::Out),
            ObservationSchedule::uniform_exclusive(20, 1.0)?,
        ),
        Scenario::new(
            "vanilla call",
            market,
            VanillaPayoff::new(STRIKE, OptionRight::Call),
            annual.clone(),
        ),
        Scenario::new(
            "vanilla put",
            market,
            VanillaPayoff::new(STRIKE, OptionRight::Put),
            annual,
        ),
    ])
}

/// Run the barrier study
pub fn run(session: &mut Session, market: GbmModel) -> Result<()> {
    info!("Pricing discrete barrier options");
    session.run_all(STUDY, &scenarios(market)?)
}
