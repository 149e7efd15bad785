//! Exotic MC CLI - Monte Carlo pricing studies for exotic options
//!
//! Reproduces the Asian and discrete barrier studies under GBM and prices
//! arbitrary single scenarios.
//!
//! # Commands
//!
//! - `exotic_mc asian` - Asian calls with monthly, quarterly and weekly averaging
//! - `exotic_mc barrier` - Discrete knock-in and knock-out options against vanillas
//! - `exotic_mc all` - Both studies on one random stream
//! - `exotic_mc price --kind <kind> ...` - A single custom scenario
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate orchestrates the pricer
//! layers; it owns configuration, logging and output but no pricing logic.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::price::PriceArgs;
use commands::{asian, barrier, report, Session};
use config::{build_config, CliArgs};

/// Monte Carlo pricer for Asian and discrete barrier options
#[derive(Parser)]
#[command(name = "exotic_mc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "EXOTIC_MC_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "EXOTIC_MC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Trial budgets, comma separated (e.g. 10000,100000)
    #[arg(short = 'n', long, global = true, value_delimiter = ',')]
    trials: Vec<usize>,

    /// Seed for the invocation's random stream
    #[arg(short, long, global = true, env = "EXOTIC_MC_SEED")]
    seed: Option<u64>,

    /// Disable antithetic variates
    #[arg(long, global = true)]
    no_antithetic: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price Asian options with different averaging frequencies
    Asian,

    /// Price discrete barrier options and the matching vanillas
    Barrier,

    /// Run the Asian and barrier studies in sequence
    All,

    /// Price a single custom scenario
    Price(PriceCommand),
}

#[derive(Args)]
struct PriceCommand {
    /// Payoff kind (vanilla, asian, barrier)
    #[arg(long, default_value = "vanilla")]
    kind: String,

    /// Option right (Call, Put)
    #[arg(long, default_value = "Call")]
    right: String,

    /// Strike price
    #[arg(long, default_value_t = 103.0)]
    strike: f64,

    /// Barrier level
    #[arg(long)]
    barrier: Option<f64>,

    /// Barrier direction (Up, Down)
    #[arg(long, default_value = "Down")]
    direction: String,

    /// Barrier activation (In, Out)
    #[arg(long, default_value = "Out")]
    activation: String,

    /// Number of equal observation periods
    #[arg(long, default_value_t = 12)]
    periods: usize,

    /// Maturity in years
    #[arg(long, default_value_t = 1.0)]
    maturity: f64,

    /// Omit the observation at maturity
    #[arg(long)]
    exclusive: bool,

    /// Spot override
    #[arg(long)]
    spot: Option<f64>,

    /// Volatility override
    #[arg(long)]
    volatility: Option<f64>,
}

impl From<PriceCommand> for PriceArgs {
    fn from(cmd: PriceCommand) -> Self {
        PriceArgs {
            kind: cmd.kind,
            right: cmd.right,
            strike: cmd.strike,
            barrier: cmd.barrier,
            direction: cmd.direction,
            activation: cmd.activation,
            periods: cmd.periods,
            maturity: cmd.maturity,
            exclusive: cmd.exclusive,
            spot: cmd.spot,
            volatility: cmd.volatility,
        }
    }
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            verbose: cli.verbose,
            format: cli.format.clone(),
            trials: cli.trials.clone(),
            seed: cli.seed,
            no_antithetic: cli.no_antithetic,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());

    info!(
        seed = config.simulation.seed,
        antithetic = config.simulation.antithetic,
        trials = ?config.simulation.trials,
        format = %config.format,
        "Configuration loaded"
    );

    let market = config.market.model()?;
    let mut session = Session::new(&config)?;

    match cli.command {
        Commands::Asian => asian::run(&mut session, market)?,
        Commands::Barrier => barrier::run(&mut session, market)?,
        Commands::All => {
            asian::run(&mut session, market)?;
            barrier::run(&mut session, market)?;
        }
        Commands::Price(cmd) => commands::price::run(&mut session, market, &cmd.into())?,
    }

    report::print(session.rows(), config.format)?;
    info!("Pricing complete");
    Ok(())
}
