//! Study configuration management
//!
//! Handles loading configuration from a TOML file and merging command line
//! flags on top. Environment variables reach the CLI through clap's `env`
//! attributes, so the effective priority is:
//!
//! 1. CLI arguments
//! 2. Environment variables (`EXOTIC_MC_*`)
//! 3. Config file
//! 4. Default values (the Asian and barrier study parameters)
//!
//! # Example file
//!
//! ```toml
//! log_level = "debug"
//! format = "json"
//!
//! [market]
//! spot = 100.0
//! rate = 0.05
//! dividend = 0.03
//! volatility = 0.1
//!
//! [simulation]
//! trials = [10000, 100000]
//! seed = 7
//! antithetic = true
//! ```

use pricer_core::types::PricingError;
use pricer_models::models::GbmModel;
use pricer_pricing::mc::MonteCarloConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidFormat(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Invalid simulation settings: {0}")]
    Simulation(String),

    #[error("Invalid market: {0}")]
    Market(#[from] PricingError),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Result output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

/// Market scenario parameters
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarketConfig {
    /// Initial spot price
    pub spot: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Continuous dividend yield
    pub dividend: f64,
    /// Volatility
    pub volatility: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            dividend: 0.03,
            volatility: 0.1,
        }
    }
}

impl MarketConfig {
    /// Build the validated GBM scenario
    pub fn model(&self) -> Result<GbmModel, PricingError> {
        GbmModel::new(self.spot, self.rate, self.dividend, self.volatility)
    }
}

/// Monte Carlo run parameters
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    /// Trial budgets; every scenario is priced once per entry
    pub trials: Vec<usize>,
    /// Seed applied once per invocation
    pub seed: u64,
    /// Whether to use antithetic pairs
    pub antithetic: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trials: vec![10_000, 100_000, 1_000_000],
            seed: 1,
            antithetic: true,
        }
    }
}

impl SimulationConfig {
    /// Engine configuration for the first trial budget.
    ///
    /// Every budget is checked against the engine's limits.
    pub fn engine_config(&self) -> Result<MonteCarloConfig, ConfigError> {
        let first = *self
            .trials
            .first()
            .ok_or_else(|| ConfigError::Simulation("at least one trial count required".into()))?;

        for &n_trials in &self.trials {
            MonteCarloConfig::builder()
                .n_trials(n_trials)
                .build()
                .map_err(|e| ConfigError::Simulation(e.to_string()))?;
        }

        MonteCarloConfig::builder()
            .n_trials(first)
            .antithetic(self.antithetic)
            .seed(self.seed)
            .build()
            .map_err(|e| ConfigError::Simulation(e.to_string()))
    }
}

/// Study configuration structure
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct StudyConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format
    #[serde(deserialize_with = "deserialize_format")]
    pub format: OutputFormat,
    /// Market scenario shared by all studies
    pub market: MarketConfig,
    /// Simulation parameters
    pub simulation: SimulationConfig,
}

impl StudyConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.market.model()?;
        self.simulation.engine_config()?;
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if !cli.trials.is_empty() {
            self.simulation.trials = cli.trials.clone();
        }
        if let Some(seed) = cli.seed {
            self.simulation.seed = seed;
        }
        if cli.no_antithetic {
            self.simulation.antithetic = false;
        }
        Ok(())
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Shortcut for debug logging
    pub verbose: bool,
    /// Output format override
    pub format: Option<String>,
    /// Trial budget override
    pub trials: Vec<usize>,
    /// Seed override
    pub seed: Option<u64>,
    /// Disable antithetic pairs
    pub no_antithetic: bool,
}

/// Build configuration from all sources
pub fn build_config(cli: &CliArgs) -> Result<StudyConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => StudyConfig::from_file(path)?,
        None => StudyConfig::default(),
    };

    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StudyConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.format, OutputFormat::Table);
        assert_eq!(config.market.spot, 100.0);
        assert_eq!(config.market.rate, 0.05);
        assert_eq!(config.market.dividend, 0.03);
        assert_eq!(config.market.volatility, 0.1);
        assert_eq!(config.simulation.trials, vec![10_000, 100_000, 1_000_000]);
        assert_eq!(config.simulation.seed, 1);
        assert!(config.simulation.antithetic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("loud").is_err());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("TABLE").unwrap(), OutputFormat::Table);
        assert!(matches!(
            OutputFormat::from_str("csv"),
            Err(ConfigError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StudyConfig::from_toml_str(
            r#"
            format = "JSON"

            [market]
            spot = 84.0

            [simulation]
            trials = [500]
            "#,
        )
        .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.market.spot, 84.0);
        assert_eq!(config.market.volatility, 0.1);
        assert_eq!(config.simulation.trials, vec![500]);
        assert_eq!(config.simulation.seed, 1);
    }

    #[test]
    fn test_toml_rejects_bad_values() {
        assert!(StudyConfig::from_toml_str("log_level = \"loud\"").is_err());
        assert!(StudyConfig::from_toml_str("[market]\nstrike = 103.0").is_err());
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config = StudyConfig::from_toml_str("[simulation]\nseed = 7").unwrap();
        let cli = CliArgs {
            format: Some("json".to_string()),
            trials: vec![2_000],
            seed: Some(3),
            no_antithetic: true,
            verbose: true,
            ..Default::default()
        };

        config.merge_with_cli(&cli).unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.simulation.trials, vec![2_000]);
        assert_eq!(config.simulation.seed, 3);
        assert!(!config.simulation.antithetic);
    }

    #[test]
    fn test_validate_market() {
        let mut config = StudyConfig::default();
        config.market.spot = -1.0;
        assert!(matches!(config.validate(), Err(ConfigError::Market(_))));
    }

    #[test]
    fn test_validate_trials() {
        let mut config = StudyConfig::default();
        config.simulation.trials.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Simulation(_))));

        config.simulation.trials = vec![10_000, 1];
        assert!(matches!(config.validate(), Err(ConfigError::Simulation(_))));
    }

    #[test]
    fn test_engine_config_uses_seed() {
        let config = StudyConfig::default();
        let engine = config.simulation.engine_config().unwrap();
        assert_eq!(engine.seed(), Some(1));
        assert_eq!(engine.n_trials(), 10_000);
        assert!(engine.antithetic());
    }

    #[test]
    fn test_build_config_missing_file() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/exotic_mc.toml")),
            ..Default::default()
        };
        assert!(matches!(build_config(&cli), Err(ConfigError::FileError(_))));
    }
}
