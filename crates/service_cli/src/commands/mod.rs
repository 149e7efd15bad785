//! CLI command implementations
//!
//! Each study submodule lists its scenarios; [`Session`] prices them against
//! one random stream so that a whole invocation is reproducible from a
//! single seed.

pub mod asian;
pub mod barrier;
pub mod price;
pub mod report;

use pricer_core::types::ObservationSchedule;
use pricer_models::instruments::Payoff;
use pricer_models::models::GbmModel;
use pricer_pricing::mc::{GbmPathGenerator, MonteCarloConfig, MonteCarloPricer};
use tracing::info;

use crate::config::StudyConfig;
use crate::Result;
use report::ScenarioRow;

/// One priced configuration within a study.
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    /// Short label, e.g. "(ii)" or "vanilla call"
    pub label: String,
    /// Market the paths are simulated under
    pub model: GbmModel,
    /// Payoff evaluated on each path
    pub payoff: Payoff,
    /// Observation times
    pub schedule: ObservationSchedule,
}

impl Scenario {
    /// Creates a scenario.
    pub fn new(
        label: impl Into<String>,
        model: GbmModel,
        payoff: impl Into<Payoff>,
        schedule: ObservationSchedule,
    ) -> Self {
        Self {
            label: label.into(),
            model,
            payoff: payoff.into(),
            schedule,
        }
    }
}

/// Prices scenarios against a single seeded engine and collects the rows.
pub struct Session {
    engine_config: MonteCarloConfig,
    trials: Vec<usize>,
    pricer: Option<MonteCarloPricer<GbmPathGenerator, Payoff>>,
    rows: Vec<ScenarioRow>,
}

impl Session {
    /// Creates a session from the validated configuration.
    pub fn new(config: &StudyConfig) -> Result<Self> {
        Ok(Self {
            engine_config: config.simulation.engine_config()?,
            trials: config.simulation.trials.clone(),
            pricer: None,
            rows: Vec::new(),
        })
    }

    /// Prices `scenario` once per configured trial budget.
    pub fn run(&mut self, study: &str, scenario: &Scenario) -> Result<()> {
        let generator = GbmPathGenerator::new(scenario.model);
        let engine_config = &self.engine_config;
        let pricer = self.pricer.get_or_insert_with(|| {
            MonteCarloPricer::new(engine_config.clone(), generator, scenario.payoff)
        });
        pricer.set_generator(generator);
        pricer.set_payoff(scenario.payoff);

        let antithetic = self.engine_config.antithetic();
        for &n_trials in &self.trials {
            info!(
                study,
                scenario = %scenario.label,
                payoff = %scenario.payoff,
                n_trials,
                "Pricing scenario"
            );
            let result = pricer.price(&scenario.schedule, n_trials, antithetic)?;
            self.rows.push(ScenarioRow::new(study, scenario, n_trials, result));
        }
        Ok(())
    }

    /// Runs every scenario of a study in order.
    pub fn run_all(&mut self, study: &str, scenarios: &[Scenario]) -> Result<()> {
        for scenario in scenarios {
            self.run(study, scenario)?;
        }
        Ok(())
    }

    /// Rows priced so far.
    pub fn rows(&self) -> &[ScenarioRow] {
        &self.rows
    }
}
