//! Price command implementation
//!
//! Prices European options by Monte Carlo and compares each estimate with
//! the Black-Scholes closed form.

use pricer_pricing::mc::OptionPricer;
use serde::Serialize;
use std::io::Write;
use tracing::info;

use crate::config::{OutputFormat, Settings};
use crate::output::{open_sink, write_csv, write_json, Table};
use crate::Result;

/// One priced contract
#[derive(Debug, Clone, Serialize)]
pub struct PriceRow {
    pub kind: String,
    pub strike: f64,
    pub n_paths: usize,
    pub mc_price: f64,
    pub std_error: f64,
    pub ci95_low: f64,
    pub ci95_high: f64,
    pub bs_price: f64,
    pub abs_error: f64,
}

/// Prices every requested kind with one pricer, so a seeded run is
/// reproducible as a whole.
pub fn price_rows(settings: &Settings, kinds: &[String]) -> Result<Vec<PriceRow>> {
    let params = &settings.params;
    let mut pricer = OptionPricer::for_params(params);
    info!("  Seed: {}", pricer.seed());

    kinds
        .iter()
        .map(|kind| {
            let bs_price = pricer.price_bs_kind(params, settings.strike, settings.rate, kind)?;
            let mc = pricer.price_mc_kind(params, settings.strike, settings.rate, kind)?;
            Ok(PriceRow {
                kind: kind.trim().to_lowercase(),
                strike: settings.strike,
                n_paths: mc.n_paths,
                mc_price: mc.price,
                std_error: mc.std_error,
                ci95_low: mc.price - mc.confidence_95(),
                ci95_high: mc.price + mc.confidence_95(),
                bs_price,
                abs_error: (mc.price - bs_price).abs(),
            })
        })
        .collect()
}

/// Run the price command
pub fn run(settings: &Settings, kind: Option<&str>) -> Result<()> {
    let kinds: Vec<String> = match kind.or(settings.kind.as_deref()) {
        Some(kind) => vec![kind.to_string()],
        None => vec!["call".to_string(), "put".to_string()],
    };

    info!("Starting pricing...");
    info!("  Kinds: {}", kinds.join(", "));
    info!("  Strike: {}  Rate: {}", settings.strike, settings.rate);
    info!(
        "  Monte Carlo paths: {}  Steps: {}",
        settings.params.n_paths(),
        settings.params.n_steps()
    );

    let rows = price_rows(settings, &kinds)?;

    let mut sink = open_sink(settings.output.as_deref())?;
    match settings.format {
        OutputFormat::Json => write_json(&mut sink, &rows)?,
        OutputFormat::Csv => write_csv(&mut sink, &rows)?,
        OutputFormat::Table => {
            let mut table = Table::new([
                "Kind", "Strike", "Paths", "MC price", "Std error", "95% CI", "BS price", "|MC-BS|",
            ]);
            for row in &rows {
                table.push_row(vec![
                    row.kind.clone(),
                    format!("{:.2}", row.strike),
                    row.n_paths.to_string(),
                    format!("{:.4}", row.mc_price),
                    format!("{:.4}", row.std_error),
                    format!("[{:.4}, {:.4}]", row.ci95_low, row.ci95_high),
                    format!("{:.4}", row.bs_price),
                    format!("{:.4}", row.abs_error),
                ]);
            }
            table.write(&mut sink)?;
        }
    }
    sink.flush()?;

    info!("Pricing complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{build_settings, CliConfig, Overrides};
    use crate::CliError;
    use approx::assert_relative_eq;

    fn settings(n_paths: usize) -> Settings {
        let overrides = Overrides {
            n_paths: Some(n_paths),
            n_steps: Some(12),
            seed: Some(42),
            ..Default::default()
        };
        build_settings(&CliConfig::default(), &overrides).unwrap()
    }

    #[test]
    fn test_both_kinds_close_to_closed_form() {
        let kinds = ["call".to_string(), "put".to_string()];
        let rows = price_rows(&settings(50_000), &kinds).unwrap();

        assert_eq!(rows.len(), 2);
        assert_relative_eq!(rows[0].bs_price, 10.450583572185565, epsilon = 1e-6);
        assert_relative_eq!(rows[1].bs_price, 5.573526022256971, epsilon = 1e-6);
        for row in &rows {
            assert!(row.abs_error < 0.05 * row.bs_price, "{:?}", row);
            assert!(row.ci95_low <= row.mc_price && row.mc_price <= row.ci95_high);
        }
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let kinds = ["put".to_string()];
        let a = price_rows(&settings(1_000), &kinds).unwrap();
        let b = price_rows(&settings(1_000), &kinds).unwrap();
        assert_eq!(a[0].mc_price, b[0].mc_price);
    }

    #[test]
    fn test_unknown_kind_fails() {
        let err = price_rows(&settings(10), &["straddle".to_string()]).unwrap_err();
        assert!(matches!(err, CliError::Pricing(e) if e.is_invalid_argument()));
    }
}
