//! Inverse-link functions and their stable logarithms.

use ld_ad::Scalar;
use ld_core::constants::INV_SQRT_TWO;

use crate::math::log1p_tiered;

/// Inverse logit: `1 / (1 + exp(-a))`.
#[inline]
pub fn inv_logit<T: Scalar>(a: T) -> T {
    let one = T::from_f64(1.0);
    one / (one + (-a).exp())
}

/// Log odds: `ln(a / (1 - a))`. Inverse of [`inv_logit`] on `(0, 1)`.
#[inline]
pub fn logit<T: Scalar>(a: T) -> T {
    (a / (T::from_f64(1.0) - a)).ln()
}

/// Standard normal CDF: `0.5 * (1 + erf(x / sqrt(2)))`.
#[inline]
pub fn phi<T: Scalar>(x: T) -> T {
    T::from_f64(0.5) * (T::from_f64(1.0) + (T::from_f64(INV_SQRT_TWO) * x).erf())
}

/// Logistic approximation of the standard normal CDF:
/// `inv_logit(0.07056 x^3 + 1.5976 x)`.
///
/// Cheaper and less accurate than [`phi`] (absolute error below ~1.4e-4).
#[inline]
pub fn phi_approx<T: Scalar>(x: T) -> T {
    inv_logit(T::from_f64(0.07056) * x.powi(3) + T::from_f64(1.5976) * x)
}

/// Inverse complementary log-log: `exp(-exp(x))`.
#[inline]
pub fn inv_cloglog<T: Scalar>(x: T) -> T {
    (-x.exp()).exp()
}

/// `ln(inv_logit(u))`.
#[inline]
pub fn log_inv_logit<T: Scalar>(u: T) -> T {
    if u.value() < 0.0 {
        u - log1p_tiered(u.exp())
    } else {
        -log1p_tiered((-u).exp())
    }
}

/// `ln(1 - inv_logit(u))`.
#[inline]
pub fn log1m_inv_logit<T: Scalar>(u: T) -> T {
    if u.value() > 0.0 {
        -u - log1p_tiered((-u).exp())
    } else {
        -log1p_tiered(u.exp())
    }
}

/// Log loss of prediction `y_hat` in `[0, 1]` for outcome `y`.
///
/// `-ln(y_hat)` when `y != 0`, otherwise `-ln(1 - y_hat)`.
#[inline]
pub fn binary_log_loss<T: Scalar>(y: i32, y_hat: T) -> T {
    let p = if y != 0 { y_hat } else { T::from_f64(1.0) - y_hat };
    -p.ln()
}
