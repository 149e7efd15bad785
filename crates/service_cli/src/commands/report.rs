//! Result rendering
//!
//! Renders priced scenarios as a table or as JSON.

use pricer_pricing::mc::PricingResult;
use serde::Serialize;

use super::Scenario;
use crate::config::OutputFormat;
use crate::Result;

/// One priced scenario at one trial budget.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioRow {
    pub study: String,
    pub scenario: String,
    pub payoff: String,
    pub schedule_len: usize,
    pub n_trials: usize,
    pub effective_trials: usize,
    pub price: f64,
    pub std_error: f64,
}

impl ScenarioRow {
    /// Builds a row from a pricing result.
    pub fn new(study: &str, scenario: &Scenario, n_trials: usize, result: PricingResult) -> Self {
        let schedule_len = scenario.schedule.len();
        Self {
            study: study.to_string(),
            scenario: scenario.label.clone(),
            payoff: scenario.payoff.to_string(),
            schedule_len,
            n_trials,
            effective_trials: n_trials / schedule_len,
            price: result.price,
            std_error: result.std_error,
        }
    }
}

/// Render rows as a box table
pub fn render_table(rows: &[ScenarioRow]) -> String {
    let mut out = String::new();
    out.push_str("┌──────────┬────────────────┬──────────┬────────────┬────────────┐\n");
    out.push_str("│ Study    │ Scenario       │ Trials   │ Price      │ Std Error  │\n");
    out.push_str("├──────────┼────────────────┼──────────┼────────────┼────────────┤\n");
    for row in rows {
        out.push_str(&format!(
            "│ {:<8} │ {:<14} │ {:>8} │ {:>10.4} │ {:>10.4} │\n",
            row.study, row.scenario, row.n_trials, row.price, row.std_error
        ));
    }
    out.push_str("└──────────┴────────────────┴──────────┴────────────┴────────────┘\n");
    out
}

/// Render rows as pretty-printed JSON
pub fn render_json(rows: &[ScenarioRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Print rows to stdout in the requested format
pub fn print(rows: &[ScenarioRow], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print!("{}", render_table(rows)),
        OutputFormat::Json => println!("{}", render_json(rows)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::ObservationSchedule;
    use pricer_models::instruments::AsianArithmeticPayoff;
    use pricer_models::models::GbmModel;

    fn row() -> ScenarioRow {
        let scenario = Scenario::new(
            "(i)",
            GbmModel::new(100.0, 0.05, 0.03, 0.1).unwrap(),
            AsianArithmeticPayoff::from_labels(103.0, "Call").unwrap(),
            ObservationSchedule::uniform(12, 1.0).unwrap(),
        );
        ScenarioRow::new(
            "asian",
            &scenario,
            10_000,
            PricingResult {
                price: 1.2346,
                std_error: 0.0123,
            },
        )
    }

    #[test]
    fn test_row_from_result() {
        let row = row();
        assert_eq!(row.schedule_len, 13);
        assert_eq!(row.effective_trials, 769);
        assert_eq!(row.payoff, "AsianArithmetic(Call K=103)");
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&[row()]);
        assert!(table.contains("│ asian    │ (i)            │    10000 │     1.2346 │     0.0123 │"));
        assert_eq!(table.lines().count(), 5);
        assert!(table.ends_with("┘\n"));
    }

    #[test]
    fn test_render_empty_table() {
        let table = render_table(&[]);
        assert_eq!(table.lines().count(), 4);
        assert!(table.lines().all(|line| line.chars().count() == 66));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&[row()]).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed[0]["study"], "asian");
        assert_eq!(parsed[0]["effective_trials"], 769);
        assert_eq!(parsed[0]["price"], 1.2346);
    }
}
