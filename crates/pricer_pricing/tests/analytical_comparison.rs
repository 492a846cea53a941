//! Monte Carlo versus Black-Scholes comparison tests.
//!
//! # Test Categories
//!
//! 1. **European Options**: MC vs closed form at a large path count
//! 2. **Put-Call Parity**: closed-form consistency
//! 3. **Convergence Sweeps**: shape, ordering and error narrowing
//! 4. **Error Handling**: invalid kinds and degenerate volatility

use approx::assert_relative_eq;
use pricer_models::instruments::OptionContract;
use pricer_models::models::SimulationParameters;
use pricer_pricing::mc::OptionPricer;
use pricer_pricing::ConvergenceReport;
use proptest::prelude::*;

const BS_CALL: f64 = 10.450583572185565;
const BS_PUT: f64 = 5.573526022256971;

/// Standard test parameters: S0 = K = 100, T = 1, r = μ = 5%, σ = 20%.
fn standard_params(n_paths: usize) -> SimulationParameters {
    SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 12, n_paths).unwrap()
}

fn contracts() -> (OptionContract, OptionContract) {
    (
        OptionContract::call(100.0, 0.05).unwrap(),
        OptionContract::put(100.0, 0.05).unwrap(),
    )
}

// ============================================================================
// European Option Tests
// ============================================================================

#[test]
fn test_european_call_mc_vs_analytical() {
    let params = standard_params(100_000);
    let (call, _) = contracts();
    let mut pricer = OptionPricer::from_seed(42);

    let mc = pricer.price_mc(&params, &call).unwrap();
    let bs = pricer.price_bs(&params, &call).unwrap();

    assert_relative_eq!(bs, BS_CALL, epsilon = 1e-6);
    assert!(
        (mc.price - bs).abs() < 0.05 * bs,
        "MC call {} too far from BS {}",
        mc.price,
        bs
    );
    assert!(mc.is_within(bs, 4.0), "MC call outside 4 standard errors");
}

#[test]
fn test_european_put_mc_vs_analytical() {
    let params = standard_params(100_000);
    let (_, put) = contracts();
    let mut pricer = OptionPricer::from_seed(43);

    let mc = pricer.price_mc(&params, &put).unwrap();
    let bs = pricer.price_bs(&params, &put).unwrap();

    assert_relative_eq!(bs, BS_PUT, epsilon = 1e-6);
    assert!(
        (mc.price - bs).abs() < 0.05 * bs,
        "MC put {} too far from BS {}",
        mc.price,
        bs
    );
}

#[test]
fn test_standard_error_scales_with_paths() {
    let (call, _) = contracts();
    let mut pricer = OptionPricer::from_seed(7);

    let small = pricer.price_mc(&standard_params(2_500), &call).unwrap();
    let large = pricer.price_mc(&standard_params(40_000), &call).unwrap();

    // Sixteen times the paths, roughly a quarter of the error.
    let ratio = small.std_error / large.std_error;
    assert!(ratio > 3.0 && ratio < 5.0, "unexpected ratio {}", ratio);
}

#[test]
fn test_single_path_estimate() {
    let (call, _) = contracts();
    let estimate = OptionPricer::from_seed(1)
        .price_mc(&standard_params(1), &call)
        .unwrap();

    assert_eq!(estimate.n_paths, 1);
    assert!(estimate.price >= 0.0);
    assert_eq!(estimate.std_error, 0.0);
}

#[test]
fn test_mc_reproducible_with_seed() {
    let params = standard_params(5_000);
    let (call, put) = contracts();

    let run = |seed| {
        let mut pricer = OptionPricer::from_seed(seed);
        (
            pricer.price_mc(&params, &call).unwrap(),
            pricer.price_mc(&params, &put).unwrap(),
        )
    };

    assert_eq!(run(99), run(99));
    assert_ne!(run(99).0.price, run(100).0.price);
}

// ============================================================================
// Put-Call Parity
// ============================================================================

#[test]
fn test_put_call_parity_standard() {
    let params = standard_params(1);
    let (call, put) = contracts();
    let pricer = OptionPricer::from_seed(0);

    let c = pricer.price_bs(&params, &call).unwrap();
    let p = pricer.price_bs(&params, &put).unwrap();

    assert_relative_eq!(c - p, 100.0 - 100.0 * (-0.05_f64).exp(), epsilon = 1e-10);
}

proptest! {
    #[test]
    fn prop_put_call_parity(
        spot in 50.0..150.0f64,
        strike in 50.0..150.0f64,
        rate in 0.0..0.1f64,
        vol in 0.05..0.6f64,
        maturity in 0.1..3.0f64,
    ) {
        let params = SimulationParameters::new(spot, rate, vol, maturity, 1, 1).unwrap();
        let call = OptionContract::call(strike, rate).unwrap();
        let put = OptionContract::put(strike, rate).unwrap();
        let pricer = OptionPricer::from_seed(0);

        let c = pricer.price_bs(&params, &call).unwrap();
        let p = pricer.price_bs(&params, &put).unwrap();
        let forward = spot - strike * (-rate * maturity).exp();

        prop_assert!(c >= 0.0 && p >= 0.0);
        prop_assert!((c - p - forward).abs() < 1e-4, "parity gap {}", c - p - forward);
    }
}

// ============================================================================
// Convergence Sweeps
// ============================================================================

#[test]
fn test_convergence_report_structure() {
    let params = standard_params(1);
    let (call, put) = contracts();

    let report = OptionPricer::from_seed(3)
        .convergence(&params, &call, &put, 50)
        .unwrap();

    assert_eq!(report.len(), 50);
    let counts = report.trial_counts();
    assert_eq!(counts.first(), Some(&1));
    assert_eq!(counts.last(), Some(&50));
    assert!(counts.windows(2).all(|w| w[0] < w[1]));
    assert!(report.call_prices().iter().all(|&p| p >= 0.0));
    assert!(report.put_prices().iter().all(|&p| p >= 0.0));
    assert_relative_eq!(report.bs_call, BS_CALL, epsilon = 1e-6);
    assert_relative_eq!(report.bs_put, BS_PUT, epsilon = 1e-6);
}

#[test]
fn test_convergence_error_narrows() {
    let params = SimulationParameters::new(100.0, 0.05, 0.2, 1.0, 2, 1).unwrap();
    let (call, put) = contracts();

    let report = OptionPricer::from_seed(2024)
        .convergence(&params, &call, &put, 300)
        .unwrap();

    let mean_abs_error = |r: &ConvergenceReport, range: std::ops::Range<usize>| {
        let n = range.len() as f64;
        r.points[range]
            .iter()
            .map(|p| (p.call_price - r.bs_call).abs())
            .sum::<f64>()
            / n
    };

    let early = mean_abs_error(&report, 0..20);
    let late = mean_abs_error(&report, 280..300);
    assert!(late < early, "late error {} not below early {}", late, early);
}

#[test]
fn test_convergence_reproducible_with_seed() {
    let params = standard_params(1);
    let (call, put) = contracts();

    let a = OptionPricer::from_seed(8)
        .convergence(&params, &call, &put, 25)
        .unwrap();
    let b = OptionPricer::from_seed(8)
        .convergence(&params, &call, &put, 25)
        .unwrap();

    assert_eq!(a, b);
}

// ============================================================================
// Error Handling
// ============================================================================

#[test]
fn test_straddle_rejected_everywhere() {
    let params = standard_params(100);
    let mut pricer = OptionPricer::from_seed(1);

    assert!(pricer
        .price_mc_kind(&params, 100.0, 0.05, "straddle")
        .unwrap_err()
        .is_invalid_argument());
    assert!(pricer
        .price_bs_kind(&params, 100.0, 0.05, "straddle")
        .unwrap_err()
        .is_invalid_argument());
}

#[test]
fn test_zero_volatility_halts_sweep() {
    let params = SimulationParameters::new(100.0, 0.05, 0.0, 1.0, 12, 1).unwrap();
    let (call, put) = contracts();

    let err = OptionPricer::from_seed(1)
        .convergence(&params, &call, &put, 10)
        .unwrap_err();
    assert!(err.is_domain_error());
}

#[test]
fn test_invalid_strike_rejected() {
    let params = standard_params(100);
    let mut pricer = OptionPricer::from_seed(1);
    assert!(pricer
        .price_mc_kind(&params, 0.0, 0.05, "call")
        .unwrap_err()
        .is_invalid_argument());
    assert!(pricer
        .price_bs_kind(&params, -5.0, 0.05, "put")
        .unwrap_err()
        .is_invalid_argument());
}
