//! CLI configuration loading
//!
//! Settings come from four sources. Priority (highest to lowest):
//! 1. Command-line arguments
//! 2. Environment variables (`PRICER_CONFIG`, `PRICER_LOG_LEVEL`, `PRICER_SEED`)
//! 3. TOML config file
//! 4. Default values
//!
//! Clap resolves the first two; [`build_settings`] layers the result over the
//! file and the defaults.
//!
//! # Example file
//!
//! ```toml
//! [simulation]
//! spot = 100.0
//! drift = 0.05
//! volatility = 0.2
//! maturity = 1.0
//! n_paths = 1000
//! seed = 42
//!
//! [contract]
//! strike = 100.0
//! rate = 0.05
//! kind = "call"
//!
//! [output]
//! format = "table"
//! log_level = "info"
//! ```

use pricer_models::models::SimulationParameters;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{CliError, Result};

/// Config file probed when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "gbm-pricer.toml";

/// Log levels accepted by `--log-level` and the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::InvalidArgument(format!(
                "log level '{}': use trace, debug, info, warn or error",
                s
            ))),
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

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Output formats for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: json, csv, table",
                s
            ))),
        }
    }
}

/// CLI configuration file
#[derive(Debug, Default, Deserialize)]
pub struct CliConfig {
    /// Path simulation settings
    #[serde(default)]
    pub simulation: SimulationConfig,

    /// Option contract settings
    #[serde(default)]
    pub contract: ContractConfig,

    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[simulation]` section
#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    #[serde(default = "default_spot")]
    pub spot: f64,

    #[serde(default = "default_drift")]
    pub drift: f64,

    #[serde(default = "default_volatility")]
    pub volatility: f64,

    #[serde(default = "default_maturity")]
    pub maturity: f64,

    /// Time steps; 252 per year of maturity when absent
    #[serde(default)]
    pub n_steps: Option<usize>,

    #[serde(default = "default_n_paths")]
    pub n_paths: usize,

    /// Seed for reproducible runs; fresh entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            drift: default_drift(),
            volatility: default_volatility(),
            maturity: default_maturity(),
            n_steps: None,
            n_paths: default_n_paths(),
            seed: None,
        }
    }
}

/// `[contract]` section
#[derive(Debug, Deserialize)]
pub struct ContractConfig {
    #[serde(default = "default_strike")]
    pub strike: f64,

    #[serde(default = "default_rate")]
    pub rate: f64,

    /// `call` or `put`; both are priced when absent
    #[serde(default)]
    pub kind: Option<String>,
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            strike: default_strike(),
            rate: default_rate(),
            kind: None,
        }
    }
}

/// `[output]` section
#[derive(Debug, Default, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub log_level: LogLevel,
}

fn default_spot() -> f64 {
    100.0
}

fn default_drift() -> f64 {
    0.05
}

fn default_volatility() -> f64 {
    0.2
}

fn default_maturity() -> f64 {
    1.0
}

fn default_n_paths() -> usize {
    1_000
}

fn default_strike() -> f64 {
    100.0
}

fn default_rate() -> f64 {
    0.05
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load the config file named on the command line, else the default
    /// file if present, else built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) if !path.exists() => {
                Err(CliError::FileNotFound(path.display().to_string()))
            }
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }
}

/// Command-line and environment overrides
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub spot: Option<f64>,
    pub drift: Option<f64>,
    pub volatility: Option<f64>,
    pub maturity: Option<f64>,
    pub n_steps: Option<usize>,
    pub n_paths: Option<usize>,
    pub seed: Option<u64>,
    pub strike: Option<f64>,
    pub rate: Option<f64>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<LogLevel>,
    pub output: Option<PathBuf>,
}

/// Fully resolved settings for one command
#[derive(Debug, Clone)]
pub struct Settings {
    pub params: SimulationParameters,
    pub strike: f64,
    pub rate: f64,
    pub kind: Option<String>,
    pub format: OutputFormat,
    pub log_level: LogLevel,
    pub output: Option<PathBuf>,
}

/// Build settings from all sources
///
/// The simulation parameters are validated here, so an invalid
/// configuration stops the process before any work starts. Contract values
/// are validated when the contract is built.
pub fn build_settings(file: &CliConfig, cli: &Overrides) -> Result<Settings> {
    let sim = &file.simulation;

    let params = SimulationParameters::builder()
        .spot(cli.spot.unwrap_or(sim.spot))
        .drift(cli.drift.unwrap_or(sim.drift))
        .volatility(cli.volatility.unwrap_or(sim.volatility))
        .maturity(cli.maturity.unwrap_or(sim.maturity))
        .maybe_n_steps(cli.n_steps.or(sim.n_steps))
        .n_paths(cli.n_paths.unwrap_or(sim.n_paths))
        .maybe_seed(cli.seed.or(sim.seed))
        .build()?;

    Ok(Settings {
        params,
        strike: cli.strike.unwrap_or(file.contract.strike),
        rate: cli.rate.unwrap_or(file.contract.rate),
        kind: file.contract.kind.clone(),
        format: cli.format.unwrap_or(file.output.format),
        log_level: cli.log_level.unwrap_or(file.output.log_level),
        output: cli.output.clone(),
    })
}
