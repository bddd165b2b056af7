//! Plain `f64` log-density helpers.
//!
//! One-liner wrappers around the generic kernels for callers that need
//! neither derivatives nor proportional-only evaluation. Every wrapper
//! returns the full density and reports invalid arguments as errors.

use ld_core::{ErrorPolicy, Result};
use nalgebra::DMatrix;

use crate::link::inv_logit;

/// Log-PMF of `Binomial(trials, theta)` at count `n`.
pub fn binomial_logpmf(n: i64, trials: i64, theta: f64) -> Result<f64> {
    crate::binomial::binomial_log::<false, f64>(n, trials, theta, ErrorPolicy::Raise)
}

/// Log-PMF of `Binomial(trials, inv_logit(alpha))` at count `n`.
pub fn binomial_logit_logpmf(n: i64, trials: i64, alpha: f64) -> Result<f64> {
    crate::binomial::binomial_logit_log::<false, f64>(n, trials, alpha, ErrorPolicy::Raise)
}

/// Log-PDF of `Wishart(nu, s)` at the matrix `w`.
pub fn wishart_logpdf(w: &DMatrix<f64>, nu: f64, s: &DMatrix<f64>) -> Result<f64> {
    crate::wishart::wishart_log::<false, f64, f64, f64>(w, nu, s, ErrorPolicy::Raise)
}

/// Log-PDF of `InvChiSquare(nu)` at `y`.
pub fn inv_chi_square_logpdf(y: f64, nu: f64) -> Result<f64> {
    crate::inv_chi_square::inv_chi_square_log::<false, f64, f64>(y, nu, ErrorPolicy::Raise)
}

/// Convert a log-odds value into a probability.
pub fn logit_to_prob(alpha: f64) -> f64 {
    inv_logit(alpha)
}
