//! Read-only numeric constants.
//!
//! Accessors return fixed `f64` values; the `const` items below are the
//! precomputed pieces kernels combine into normalizing terms.

use std::f64::consts;

/// `ln(pi) / 4`, the per-pair factor of the multivariate log-gamma.
pub const LOG_PI_OVER_FOUR: f64 = 0.286_182_471_462_350_04;

/// `-ln(2) / 2`.
pub const NEG_LOG_TWO_OVER_TWO: f64 = -0.346_573_590_279_972_64;

/// `ln(2) / 2`.
pub const HALF_LOG_TWO: f64 = 0.346_573_590_279_972_64;

/// `1 / sqrt(2)`.
pub const INV_SQRT_TWO: f64 = consts::FRAC_1_SQRT_2;

/// Pi.
#[inline]
pub fn pi() -> f64 {
    consts::PI
}

/// Base of the natural logarithm.
#[inline]
pub fn e() -> f64 {
    consts::E
}

/// Square root of two.
#[inline]
pub fn sqrt2() -> f64 {
    consts::SQRT_2
}

/// Natural logarithm of two.
#[inline]
pub fn ln_2() -> f64 {
    consts::LN_2
}

/// Natural logarithm of ten.
#[inline]
pub fn ln_10() -> f64 {
    consts::LN_10
}

/// Positive infinity.
#[inline]
pub fn positive_infinity() -> f64 {
    f64::INFINITY
}

/// Negative infinity.
#[inline]
pub fn negative_infinity() -> f64 {
    f64::NEG_INFINITY
}

/// Quiet not-a-number.
#[inline]
pub fn not_a_number() -> f64 {
    f64::NAN
}

/// Machine epsilon: the gap between 1.0 and the next representable value.
#[inline]
pub fn epsilon() -> f64 {
    f64::EPSILON
}

/// Negative machine epsilon.
#[inline]
pub fn negative_epsilon() -> f64 {
    -f64::EPSILON
}
