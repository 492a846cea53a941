//! Converge command implementation
//!
//! Sweeps the path count from 1 to `max_trials` and reports how the Monte
//! Carlo call and put prices approach the Black-Scholes values.

use pricer_models::instruments::OptionContract;
use pricer_pricing::mc::OptionPricer;
use pricer_pricing::ConvergenceReport;
use serde::Serialize;
use std::io::Write;
use tracing::info;

use crate::config::{OutputFormat, Settings};
use crate::output::{open_sink, write_csv, write_json, Table};
use crate::Result;

#[derive(Serialize)]
struct ConvergenceRow {
    trial_count: usize,
    call_price: f64,
    put_price: f64,
    bs_call: f64,
    bs_put: f64,
}

/// Runs the sweep for the configured contract terms.
pub fn sweep(settings: &Settings, max_trials: usize) -> Result<ConvergenceReport> {
    let call = OptionContract::call(settings.strike, settings.rate)?;
    let put = OptionContract::put(settings.strike, settings.rate)?;

    let mut pricer = OptionPricer::for_params(&settings.params);
    info!("  Seed: {}", pricer.seed());

    Ok(pricer.convergence(&settings.params, &call, &put, max_trials)?)
}

/// Run the converge command
pub fn run(settings: &Settings, max_trials: usize) -> Result<()> {
    info!("Starting convergence sweep...");
    info!("  Trials: 1..={}", max_trials);
    info!("  Strike: {}  Rate: {}", settings.strike, settings.rate);
    info!("  Steps per path: {}", settings.params.n_steps());

    let report = sweep(settings, max_trials)?;

    let mut sink = open_sink(settings.output.as_deref())?;
    match settings.format {
        OutputFormat::Json => write_json(&mut sink, &report)?,
        OutputFormat::Csv => {
            let rows: Vec<ConvergenceRow> = report
                .points
                .iter()
                .map(|p| ConvergenceRow {
                    trial_count: p.trial_count,
                    call_price: p.call_price,
                    put_price: p.put_price,
                    bs_call: report.bs_call,
                    bs_put: report.bs_put,
                })
                .collect();
            write_csv(&mut sink, &rows)?;
        }
        OutputFormat::Table => {
            let mut table = Table::new(["Trials", "MC call", "Call error", "MC put", "Put error"]);
            for p in &report.points {
                table.push_row(vec![
                    p.trial_count.to_string(),
                    format!("{:.4}", p.call_price),
                    format!("{:+.4}", p.call_price - report.bs_call),
                    format!("{:.4}", p.put_price),
                    format!("{:+.4}", p.put_price - report.bs_put),
                ]);
            }
            table.write(&mut sink)?;
            writeln!(
                sink,
                "Black-Scholes: call {:.4}, put {:.4}",
                report.bs_call, report.bs_put
            )?;
        }
    }
    sink.flush()?;

    info!("Convergence sweep complete");
    Ok(())
}
