//! Asian option study
//!
//! Arithmetic-average calls struck at 103, averaged monthly, quarterly and
//! weekly over one year, followed by the vanilla call on `[0, 1]` for
//! comparison. Denser averaging should price higher; the vanilla should
//! price highest.

use pricer_core::types::{ObservationSchedule, OptionRight};
use pricer_models::instruments::{AsianArithmeticPayoff, VanillaPayoff};
use pricer_models::models::GbmModel;
use tracing::info;

use super::{Scenario, Session};
use crate::Result;

/// Study name used in reports
pub const STUDY: &str = "asian";

const STRIKE: f64 = 103.0;

/// Scenarios of the Asian study under `market`
pub fn scenarios(market: GbmModel) -> Result<Vec<Scenario>> {
    let asian = AsianArithmeticPayoff::new(STRIKE, OptionRight::Call);
    let vanilla = VanillaPayoff::new(STRIKE, OptionRight::Call);

    Ok(vec![
        Scenario::new("(i)", market, asian, ObservationSchedule::uniform(12, 1.0)?),
        Scenario::new("(ii)", market, asian, ObservationSchedule::uniform(4, 1.0)?),
        Scenario::new("(iii)", market, asian, ObservationSchedule::uniform(52, 1.0)?),
        Scenario::new("vanilla", market, vanilla, ObservationSchedule::uniform(1, 1.0)?),
    ])
}

/// Run the Asian study
pub fn run(session: &mut Session, market: GbmModel) -> Result<()> {
    info!("Pricing Asian options");
    session.run_all(STUDY, &scenarios(market)?)
}
