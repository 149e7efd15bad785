//! Price command implementation
//!
//! Prices a single user-specified scenario.

use pricer_core::types::ObservationSchedule;
use pricer_models::instruments::{
    AsianArithmeticPayoff, DiscreteBarrierPayoff, Payoff, VanillaPayoff,
};
use pricer_models::models::GbmModel;
use tracing::info;

use super::{Scenario, Session};
use crate::{CliError, Result};

/// Study name used in reports
pub const STUDY: &str = "custom";

/// Payoff and schedule flags of the price command
#[derive(Clone, Debug, PartialEq)]
pub struct PriceArgs {
    /// Payoff kind: vanilla, asian or barrier
    pub kind: String,
    /// Option right label (Call, Put)
    pub right: String,
    pub strike: f64,
    /// Barrier level, required for barrier payoffs
    pub barrier: Option<f64>,
    /// Barrier direction label (Up, Down)
    pub direction: String,
    /// Barrier activation label (In, Out)
    pub activation: String,
    /// Number of equal observation periods
    pub periods: usize,
    /// Maturity in years
    pub maturity: f64,
    /// Drop the observation at maturity
    pub exclusive: bool,
    /// Spot override
    pub spot: Option<f64>,
    /// Volatility override
    pub volatility: Option<f64>,
}

impl PriceArgs {
    /// Build the payoff described by the flags
    pub fn payoff(&self) -> Result<Payoff> {
        let payoff = match self.kind.as_str() {
            "vanilla" => VanillaPayoff::from_labels(self.strike, &self.right)?.into(),
            "asian" => AsianArithmeticPayoff::from_labels(self.strike, &self.right)?.into(),
            "barrier" => {
                let barrier = self.barrier.ok_or_else(|| {
                    CliError::InvalidArgument("--barrier is required for barrier payoffs".into())
                })?;
                DiscreteBarrierPayoff::from_labels(
                    self.strike,
                    &self.right,
                    barrier,
                    &self.direction,
                    &self.activation,
                )?
                .into()
            }
            other => {
                return Err(CliError::InvalidArgument(format!(
                    "Unknown payoff: {}. Supported: vanilla, asian, barrier",
                    other
                )))
            }
        };
        Ok(payoff)
    }

    /// Build the observation schedule described by the flags
    pub fn schedule(&self) -> Result<ObservationSchedule> {
        let schedule = if self.exclusive {
            ObservationSchedule::uniform_exclusive(self.periods, self.maturity)?
        } else {
            ObservationSchedule::uniform(self.periods, self.maturity)?
        };
        Ok(schedule)
    }

    /// Build the scenario under `market`, applying overrides
    pub fn scenario(&self, market: GbmModel) -> Result<Scenario> {
        let mut model = market;
        if let Some(spot) = self.spot {
            model = model.with_spot(spot)?;
        }
        if let Some(volatility) = self.volatility {
            model = model.with_volatility(volatility)?;
        }
        Ok(Scenario::new(STUDY, model, self.payoff()?, self.schedule()?))
    }
}

/// Run the price command
pub fn run(session: &mut Session, market: GbmModel, args: &PriceArgs) -> Result<()> {
    let scenario = args.scenario(market)?;
    info!(
        payoff = %scenario.payoff,
        schedule_len = scenario.schedule.len(),
        spot = scenario.model.spot(),
        "Pricing custom scenario"
    );
    session.run(STUDY, &scenario)
}
