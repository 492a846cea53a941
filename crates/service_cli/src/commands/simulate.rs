//! Simulate command implementation
//!
//! Generates a GBM ensemble and writes the paths, the cross-sectional mean
//! and optionally a histogram of the terminal values.

use pricer_models::models::{Histogram, PathEnsemble, PathKind, PathSimulator};
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;
use tracing::info;

use crate::config::{OutputFormat, Settings};
use crate::output::{open_sink, write_json, Table};
use crate::{CliError, Result};

/// Which ensemble variant to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Price,
    LogReturn,
}

impl FromStr for Variant {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "price" | "prices" => Ok(Variant::Price),
            "log-return" | "log_return" | "logreturn" => Ok(Variant::LogReturn),
            _ => Err(CliError::InvalidArgument(format!(
                "Unknown variant: {}. Supported: price, log-return",
                s
            ))),
        }
    }
}

#[derive(Serialize)]
struct EnsembleOutput<'a> {
    kind: PathKind,
    n_steps: usize,
    n_paths: usize,
    dt: f64,
    times: Vec<f64>,
    mean_path: Vec<f64>,
    paths: Vec<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    terminal_histogram: Option<&'a Histogram>,
}

/// Run the simulate command
pub fn run(settings: &Settings, variant: Variant, bins: Option<usize>) -> Result<()> {
    let params = &settings.params;
    let mut simulator = PathSimulator::for_params(params);

    info!("Starting simulation...");
    info!("  Variant: {:?}", variant);
    info!(
        "  S0={} mu={} sigma={} T={}",
        params.spot(),
        params.drift(),
        params.volatility(),
        params.maturity()
    );
    info!("  Steps: {}  Paths: {}", params.n_steps(), params.n_paths());
    info!("  Seed: {}", simulator.seed());

    let ensemble = match variant {
        Variant::Price => simulator.generate(params)?,
        Variant::LogReturn => simulator.generate_log_returns(params)?,
    };
    let histogram = match bins {
        Some(0) => {
            return Err(CliError::InvalidArgument(
                "bins must be at least 1".to_string(),
            ))
        }
        Some(bins) => ensemble.terminal_histogram(bins),
        None => None,
    };

    let mut sink = open_sink(settings.output.as_deref())?;
    match settings.format {
        OutputFormat::Table => write_table(&mut sink, &ensemble, histogram.as_ref())?,
        OutputFormat::Csv => write_grid_csv(&mut sink, &ensemble)?,
        OutputFormat::Json => {
            let out = EnsembleOutput {
                kind: ensemble.kind(),
                n_steps: ensemble.n_steps(),
                n_paths: ensemble.n_paths(),
                dt: ensemble.dt(),
                times: ensemble.times(),
                mean_path: ensemble.mean_path(),
                paths: (0..ensemble.n_paths())
                    .map(|j| ensemble.path(j).collect())
                    .collect(),
                terminal_histogram: histogram.as_ref(),
            };
            write_json(&mut sink, &out)?;
        }
    }
    sink.flush()?;

    info!("Simulation complete");
    Ok(())
}

/// One row per time point: step, time, then every path.
fn write_grid_csv<W: Write>(writer: W, ensemble: &PathEnsemble) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = vec!["step".to_string(), "time".to_string()];
    header.extend((0..ensemble.n_paths()).map(|j| format!("path_{}", j)));
    csv.write_record(&header)?;

    for (t, (time, row)) in ensemble.times().into_iter().zip(ensemble.rows()).enumerate() {
        let mut record = Vec::with_capacity(row.len() + 2);
        record.push(t.to_string());
        record.push(time.to_string());
        record.extend(row.iter().map(f64::to_string));
        csv.write_record(&record)?;
    }

    csv.flush()?;
    Ok(())
}

fn write_table<W: Write>(
    writer: &mut W,
    ensemble: &PathEnsemble,
    histogram: Option<&Histogram>,
) -> Result<()> {
    let mut table = Table::new(["step", "time", "mean", "min", "max"]);
    for (t, (time, row)) in ensemble.times().into_iter().zip(ensemble.rows()).enumerate() {
        let (min, max) = row
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        let mean = row.iter().sum::<f64>() / row.len() as f64;
        table.push_row(vec![
            t.to_string(),
            format!("{:.4}", time),
            format!("{:.4}", mean),
            format!("{:.4}", min),
            format!("{:.4}", max),
        ]);
    }
    table.write(writer)?;

    if let Some(histogram) = histogram {
        writeln!(writer, "\nTerminal distribution")?;
        let peak = histogram.counts.iter().copied().max().unwrap_or(0).max(1);
        let mut hist = Table::new(["from", "to", "count", ""]);
        for (edge, &count) in histogram.edges.windows(2).zip(&histogram.counts) {
            let bar = "█".repeat(count * 40 / peak);
            hist.push_row(vec![
                format!("{:.4}", edge[0]),
                format!("{:.4}", edge[1]),
                count.to_string(),
                bar,
            ]);
        }
        hist.write(writer)?;
    }
    Ok(())
}
