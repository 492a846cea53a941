//! Integration tests for module exports.
//!
//! Verify that public modules and types are reachable via absolute paths.

/// Error taxonomy is reachable from both the module and the re-export.
#[test]
fn test_error_exports() {
    use pricer_core::types::error::{ensure_at_least_one, ensure_positive};
    use pricer_core::types::{PricingError, PricingResult};

    fn check(spot: f64, n_paths: usize) -> PricingResult<()> {
        ensure_positive("spot", spot)?;
        ensure_at_least_one("n_paths", n_paths)?;
        Ok(())
    }

    assert!(check(100.0, 10).is_ok());
    assert!(matches!(
        check(-1.0, 10),
        Err(PricingError::InvalidArgument(_))
    ));
    assert!(matches!(
        check(100.0, 0),
        Err(PricingError::InvalidArgument(_))
    ));
}

/// Distribution functions are reachable through `math` and `math::distributions`.
#[test]
fn test_distribution_exports() {
    use pricer_core::math::{distributions, norm_cdf, norm_pdf};

    assert_eq!(norm_cdf(1.0_f64), distributions::norm_cdf(1.0_f64));
    assert!(norm_pdf(0.0_f64) > 0.39);
}

/// The RNG is reachable and reproducible from outside the crate.
#[test]
fn test_rng_exports() {
    use pricer_core::rng::PricerRng;

    let mut a = PricerRng::from_seed(2024);
    let mut b = PricerRng::from_seed(2024);
    let mut buf_a = [0.0; 8];
    let mut buf_b = [0.0; 8];
    a.fill_normal(&mut buf_a);
    b.fill_normal(&mut buf_b);
    assert_eq!(buf_a, buf_b);
}
