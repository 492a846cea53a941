//! gbm-pricer - Command Line Operations for GBM Option Pricing
//!
//! # Commands
//!
//! - `gbm-pricer simulate` - Generate GBM price or log-return paths
//! - `gbm-pricer price` - Price European options by Monte Carlo and Black-Scholes
//! - `gbm-pricer converge` - Sweep the path count against the closed form
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate turns a TOML file, environment
//! variables and command-line flags into validated `SimulationParameters`
//! and hands them to the pricer layers.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{build_settings, CliConfig, LogLevel, OutputFormat, Overrides};

/// GBM Monte Carlo option pricer
#[derive(Parser)]
#[command(name = "gbm-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "PRICER_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, env = "PRICER_LOG_LEVEL")]
    log_level: Option<LogLevel>,

    /// Output format (table, csv, json)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Write results to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    #[command(flatten)]
    model: ModelArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Simulation and contract overrides shared by every command
#[derive(Args)]
struct ModelArgs {
    /// Initial price S0
    #[arg(long, global = true)]
    spot: Option<f64>,

    /// Drift of the simulated paths
    #[arg(long, global = true)]
    drift: Option<f64>,

    /// Volatility
    #[arg(long, global = true)]
    volatility: Option<f64>,

    /// Horizon in years
    #[arg(long, global = true)]
    maturity: Option<f64>,

    /// Number of time steps (default 252 per year)
    #[arg(long, global = true)]
    steps: Option<usize>,

    /// Number of Monte Carlo paths
    #[arg(short = 'n', long, global = true)]
    paths: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(long, global = true, env = "PRICER_SEED")]
    seed: Option<u64>,

    /// Strike price
    #[arg(short = 'k', long, global = true)]
    strike: Option<f64>,

    /// Risk-free rate used for discounting
    #[arg(short = 'r', long, global = true)]
    rate: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate GBM paths
    Simulate {
        /// Ensemble variant (price, log-return)
        #[arg(long, default_value = "price")]
        variant: commands::simulate::Variant,

        /// Histogram of terminal values with this many bins
        #[arg(long)]
        bins: Option<usize>,
    },

    /// Price European options
    Price {
        /// Option kind (call, put); both when omitted
        #[arg(short = 't', long)]
        kind: Option<String>,
    },

    /// Run a convergence sweep against Black-Scholes
    Converge {
        /// Largest path count in the sweep
        #[arg(short = 'm', long, default_value = "100")]
        max_trials: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = CliConfig::load(cli.config.as_deref())?;
    let overrides = Overrides {
        spot: cli.model.spot,
        drift: cli.model.drift,
        volatility: cli.model.volatility,
        maturity: cli.model.maturity,
        n_steps: cli.model.steps,
        n_paths: cli.model.paths,
        seed: cli.model.seed,
        strike: cli.model.strike,
        rate: cli.model.rate,
        format: cli.format,
        log_level: cli.log_level,
        output: cli.output,
    };
    let settings = build_settings(&file, &overrides)?;

    // Initialise tracing; logs go to stderr so stdout stays machine-readable
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    debug!(?settings, "resolved settings");
    if let Some(path) = &cli.config {
        info!("Loaded configuration from {}", path.display());
    }

    match cli.command {
        Commands::Simulate { variant, bins } => commands::simulate::run(&settings, variant, bins),
        Commands::Price { kind } => commands::price::run(&settings, kind.as_deref()),
        Commands::Converge { max_trials } => commands::converge::run(&settings, max_trials),
    }
}
