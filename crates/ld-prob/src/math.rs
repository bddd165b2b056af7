//! Small numerically-stable math utilities used across probability code.
//!
//! Everything here is generic over [`Scalar`], so the same code path serves
//! plain evaluation and forward-mode derivatives.

use ld_ad::Scalar;
use ld_core::constants::ln_2;
use ld_core::{Error, Result};

/// `2^y`.
#[inline]
pub fn exp2<T: Scalar>(y: T) -> T {
    (y * T::from_f64(ln_2())).exp()
}

/// Base-2 logarithm: `ln(a) / ln(2)`.
#[inline]
pub fn log2<T: Scalar>(a: T) -> T {
    a.ln() / T::from_f64(ln_2())
}

/// Positive difference: `a - b` if `a > b`, otherwise `0.0`.
///
/// Note the false branch is the literal `0.0`, not `min(a - b, 0)`.
#[inline]
pub fn fdim<T: Scalar>(a: T, b: T) -> T {
    if a > b { a - b } else { T::from_f64(0.0) }
}

/// `a * b + c` (plain composition, no fused rounding).
#[inline]
pub fn fma<T: Scalar>(a: T, b: T, c: T) -> T {
    a * b + c
}

/// `1` if `y > 0`, else `0`.
#[inline]
pub fn int_step<T: PartialOrd + Default>(y: T) -> i32 {
    if y > T::default() { 1 } else { 0 }
}

/// `0` if `y < 0`, else `1`. Unlike [`int_step`], zero maps to `1`.
#[inline]
pub fn step<T: PartialOrd + Default>(y: T) -> i32 {
    if y < T::default() { 0 } else { 1 }
}

#[inline]
pub fn square<T: Scalar>(x: T) -> T {
    x * x
}

/// The ternary operator as a function.
#[inline]
pub fn if_else<T>(c: bool, y_true: T, y_false: T) -> T {
    if c { y_true } else { y_false }
}

/// C truthiness: `1` if `x != 0`, else `0`.
#[inline]
pub fn as_bool<T: PartialEq + Default>(x: T) -> i32 {
    i32::from(x != T::default())
}

/// `ln(1 + x)`.
///
/// Fails with a domain error for `x < -1`. Close to zero the logarithm is
/// replaced by its Taylor expansion to avoid cancellation in `1 + x`:
/// - `|x| > 1e-9`: `ln(1 + x)`
/// - `1e-16 < |x| <= 1e-9`: `x - x^2/2`
/// - `|x| <= 1e-16`: `x`
pub fn log1p<T: Scalar>(x: T) -> Result<T> {
    if x.value() < -1.0 {
        return Err(Error::Domain(format!("log1p: x can not be less than -1, got {}", x.value())));
    }
    Ok(log1p_tiered(x))
}

/// [`log1p`] without the domain check, for callers whose argument is `>= -1`
/// by construction (e.g. `exp(..)`).
#[inline]
pub(crate) fn log1p_tiered<T: Scalar>(x: T) -> T {
    let v = x.value();
    if !(-1e-9..=1e-9).contains(&v) {
        (T::from_f64(1.0) + x).ln()
    } else if !(-1e-16..=1e-16).contains(&v) {
        x - T::from_f64(0.5) * x * x
    } else {
        x
    }
}

/// `ln(1 - x)`. Fails with a domain error for `x > 1`.
pub fn log1m<T: Scalar>(x: T) -> Result<T> {
    if x.value() > 1.0 {
        return Err(Error::Domain(format!("log1m: x can not be greater than 1, got {}", x.value())));
    }
    Ok(log1p_tiered(-x))
}

/// `a * ln(b)`, defined as exactly `0` when `a == 0` and `b == 0`.
#[inline]
pub fn multiply_log<T: Scalar>(a: T, b: T) -> T {
    if b.value() == 0.0 && a.value() == 0.0 {
        return T::from_f64(0.0);
    }
    a * b.ln()
}

/// Stable `ln(1 + exp(a))`.
#[inline]
pub fn log1p_exp<T: Scalar>(a: T) -> T {
    // exp of a non-positive argument only; cannot overflow.
    if a.value() > 0.0 {
        a + log1p_tiered((-a).exp())
    } else {
        log1p_tiered(a.exp())
    }
}

/// `ln(exp(a) + exp(b))` without overflow.
///
/// If the larger argument is infinite the result is that infinity, so two
/// negative infinities give negative infinity instead of NaN.
pub fn log_sum_exp<T: Scalar>(a: T, b: T) -> T {
    let (hi, lo) = if a > b { (a, b) } else { (b, a) };
    if hi.value().is_infinite() {
        return hi;
    }
    hi + log1p_tiered((lo - hi).exp())
}

/// `ln(sum_i exp(x_i))` without overflow.
///
/// Elements equal to negative infinity contribute nothing. An empty or
/// all-negative-infinity input gives negative infinity; any positive
/// infinity gives positive infinity.
pub fn log_sum_exp_slice<T: Scalar>(x: &[T]) -> T {
    let neg_inf = T::from_f64(f64::NEG_INFINITY);
    let max = x.iter().fold(neg_inf, |m, &v| if v > m { v } else { m });
    if max.value().is_infinite() {
        return max;
    }
    let sum: T =
        x.iter().filter(|v| v.value() != f64::NEG_INFINITY).map(|&v| (v - max).exp()).sum();
    max + sum.ln()
}
