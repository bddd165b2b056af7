//! Cross-module checks of the distribution kernels: reference values,
//! proportional-only evaluation, derivatives and error policies.
//!
//! Run:
//! - `cargo test -p ld-prob --test kernels`

use approx::assert_relative_eq;
use ld_ad::Dual;
use ld_core::{Error, ErrorPolicy};
use ld_prob::special::binomial_coefficient_log;
use ld_prob::{binomial_log, binomial_logit_log, inv_chi_square_log, wishart_log};
use nalgebra::DMatrix;

const RAISE: ErrorPolicy = ErrorPolicy::Raise;

fn spd(k: usize) -> DMatrix<f64> {
    DMatrix::from_fn(k, k, |i, j| if i == j { 1.0 + i as f64 * 0.5 } else { 0.1 })
}

#[test]
fn test_binomial_reference_value() {
    let lp = binomial_log::<false, f64>(3, 10, 0.5, RAISE).unwrap();
    let expected = binomial_coefficient_log(10.0, 3.0) + 3.0 * 0.5_f64.ln() + 7.0 * 0.5_f64.ln();
    assert_relative_eq!(lp, expected, epsilon = 1e-12);
}

#[test]
fn test_binomial_large_population_uses_stable_coefficient() {
    let lp = binomial_log::<false, f64>(1500, 3000, 0.5, RAISE).unwrap();
    assert!(lp.is_finite());
    assert!(lp < 0.0);
    // Normal approximation of the central mass: 1 / sqrt(2 pi N p (1-p)).
    let approx_mass = 1.0 / (2.0 * std::f64::consts::PI * 750.0).sqrt();
    assert_relative_eq!(lp, approx_mass.ln(), max_relative = 1e-3);
}

#[test]
fn test_propto_with_constant_arguments_is_zero() {
    assert_eq!(binomial_log::<true, f64>(3, 10, 0.5, RAISE).unwrap(), 0.0);
    assert_eq!(binomial_logit_log::<true, f64>(3, 10, -1.0, RAISE).unwrap(), 0.0);
    assert_eq!(inv_chi_square_log::<true, f64, f64>(3.2, 9.1, RAISE).unwrap(), 0.0);
    assert_eq!(wishart_log::<true, f64, f64, f64>(&spd(3), 5.0, &spd(3), RAISE).unwrap(), 0.0);
}

#[test]
fn test_propto_preserves_gradients() {
    let theta = Dual::var(0.42);
    let full = binomial_log::<false, Dual>(6, 17, theta, RAISE).unwrap();
    let propto = binomial_log::<true, Dual>(6, 17, theta, RAISE).unwrap();
    assert_relative_eq!(full.dot, propto.dot, epsilon = 1e-12);

    let nu = Dual::var(6.5);
    let full = inv_chi_square_log::<false, f64, Dual>(2.0, nu, RAISE).unwrap();
    let propto = inv_chi_square_log::<true, f64, Dual>(2.0, nu, RAISE).unwrap();
    assert_relative_eq!(full.dot, propto.dot, epsilon = 1e-12);
    // The -1/(2y) term depends only on y and is dropped.
    assert_relative_eq!(full.val - propto.val, -0.25, epsilon = 1e-12);
}

#[test]
fn test_wishart_scale_derivative_matches_finite_difference() {
    let w = spd(3);
    let base = spd(3);
    // Perturb S along the symmetric direction e01 + e10.
    let at = |t: f64| {
        let mut s = base.clone();
        s[(0, 1)] += t;
        s[(1, 0)] += t;
        s
    };
    let f = |t: f64| wishart_log::<false, f64, f64, f64>(&w, 5.0, &at(t), RAISE).unwrap();
    let h = 1e-6;
    let fd = (f(h) - f(-h)) / (2.0 * h);

    let s_dual = base.map_with_location(|i, j, v| {
        if (i, j) == (0, 1) || (i, j) == (1, 0) { Dual::var(v) } else { Dual::constant(v) }
    });
    let lp = wishart_log::<false, f64, f64, Dual>(&w, 5.0, &s_dual, RAISE).unwrap();
    assert_relative_eq!(lp.dot, fd, epsilon = 1e-6);
}

#[test]
fn test_wishart_failures() {
    let w = spd(2);
    assert!(matches!(
        wishart_log::<false, f64, f64, f64>(&w, 0.9, &w, RAISE),
        Err(Error::Validation(_))
    ));
    let rect = DMatrix::<f64>::zeros(3, 2);
    assert!(wishart_log::<false, f64, f64, f64>(&rect, 5.0, &w, RAISE).is_err());
    assert!(wishart_log::<false, f64, f64, f64>(&w, 5.0, &spd(3), RAISE).is_err());
}

#[test]
fn test_sentinel_policy_from_config_string() {
    let policy: ErrorPolicy = "sentinel".parse().unwrap();
    assert!(binomial_log::<false, f64>(4, 3, 0.5, policy).unwrap().is_nan());
    assert!(binomial_log::<false, f64>(1, 3, 1.5, policy).unwrap().is_nan());
    assert!(inv_chi_square_log::<false, f64, f64>(1.0, 0.0, policy).unwrap().is_nan());
    let w = spd(2);
    let lp = wishart_log::<false, Dual, f64, f64>(&w.map(Dual::constant), 0.5, &w, policy).unwrap();
    assert!(lp.val.is_nan());

    // Valid arguments are unaffected by the policy.
    let a = binomial_log::<false, f64>(1, 3, 0.5, policy).unwrap();
    let b = binomial_log::<false, f64>(1, 3, 0.5, RAISE).unwrap();
    assert_eq!(a, b);
}
