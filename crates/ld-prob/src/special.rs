//! Gamma-function family: log-beta, log binomial coefficient, multivariate
//! log-gamma, and the regularized incomplete beta function.

use ld_ad::Scalar;
use ld_core::constants::LOG_PI_OVER_FOUR;
use ld_core::{Error, Result};
use statrs::function::beta::beta_reg;

/// Above this size (for both `N` and `N - n`) the log binomial coefficient
/// switches from differences of `ln Γ` to a Stirling expansion.
const BINOMIAL_COEFFICIENT_CUTOFF: f64 = 1000.0;

/// `ln B(a, b) = ln Γ(a) + ln Γ(b) - ln Γ(a + b)`.
#[inline]
pub fn lbeta<T: Scalar>(a: T, b: T) -> T {
    a.ln_gamma() + b.ln_gamma() - (a + b).ln_gamma()
}

/// `ln (N choose n)`, generalized to real arguments through `ln Γ`.
///
/// When both `N` and `N - n` are at least 1000 the three large `ln Γ` terms
/// nearly cancel, so the Stirling form
/// `n ln(N-n) + (N+1/2) ln(N/(N-n)) + 1/(12N) - n - 1/(12(N-n)) - ln Γ(n+1)`
/// is used instead.
pub fn binomial_coefficient_log<T: Scalar>(big_n: T, n: T) -> T {
    let one = T::from_f64(1.0);
    let rest = big_n - n;
    if big_n.value() < BINOMIAL_COEFFICIENT_CUTOFF || rest.value() < BINOMIAL_COEFFICIENT_CUTOFF {
        return (big_n + one).ln_gamma() - (n + one).ln_gamma() - (rest + one).ln_gamma();
    }
    let twelve = T::from_f64(12.0);
    n * rest.ln() + (big_n + T::from_f64(0.5)) * (big_n / rest).ln() + one / (twelve * big_n)
        - n
        - one / (twelve * rest)
        - (n + one).ln_gamma()
}

/// Log of the multivariate gamma function of dimension `k`:
/// `k(k-1)/4 ln(pi) + sum_{j=1..k} ln Γ(x + (1-j)/2)`.
pub fn lmgamma<T: Scalar>(k: usize, x: T) -> T {
    let kf = k as f64;
    (1..=k).fold(T::from_f64(kf * (kf - 1.0) * LOG_PI_OVER_FOUR), |acc, j| {
        acc + (x + T::from_f64((1.0 - j as f64) / 2.0)).ln_gamma()
    })
}

/// Regularized incomplete beta function `I_x(a, b)`.
///
/// Evaluation is delegated to `statrs`; arguments outside `a > 0`, `b > 0`,
/// `0 <= x <= 1` are rejected with a domain error.
pub fn ibeta(a: f64, b: f64, x: f64) -> Result<f64> {
    if !(a.is_finite() && a > 0.0) {
        return Err(Error::Domain(format!("ibeta: a must be finite and > 0, got {}", a)));
    }
    if !(b.is_finite() && b > 0.0) {
        return Err(Error::Domain(format!("ibeta: b must be finite and > 0, got {}", b)));
    }
    if !(0.0..=1.0).contains(&x) {
        return Err(Error::Domain(format!("ibeta: x must be in [0,1], got {}", x)));
    }
    Ok(beta_reg(a, b, x))
}
