//! Argument checks run by the distribution kernels before any numerical work.
//!
//! Every check takes the calling function's name and a human-readable name
//! for the argument, and fails with [`Error::Validation`]. Values are
//! compared through [`ValueOf`], so derivative information never affects
//! validity. NaN fails every ordering check.

use ld_ad::{Scalar, ValueOf};
use ld_core::{Error, Result};
use nalgebra::DMatrix;

/// Absolute tolerance for symmetry checks.
pub const SYMMETRY_TOLERANCE: f64 = 1e-8;

/// `low <= x <= high`.
pub fn check_bounded<X: ValueOf>(
    function: &str,
    name: &str,
    x: X,
    low: f64,
    high: f64,
) -> Result<()> {
    let v = x.value_of();
    if v >= low && v <= high {
        return Ok(());
    }
    Err(Error::Validation(format!(
        "{}: {} is {}, but must be in the interval [{}, {}]",
        function, name, v, low, high
    )))
}

/// `x >= 0`.
pub fn check_nonnegative<X: ValueOf>(function: &str, name: &str, x: X) -> Result<()> {
    let v = x.value_of();
    if v >= 0.0 {
        return Ok(());
    }
    Err(Error::Validation(format!("{}: {} is {}, but must be >= 0", function, name, v)))
}

/// `x > 0`.
pub fn check_positive<X: ValueOf>(function: &str, name: &str, x: X) -> Result<()> {
    let v = x.value_of();
    if v > 0.0 {
        return Ok(());
    }
    Err(Error::Validation(format!("{}: {} is {}, but must be > 0", function, name, v)))
}

/// `x` is neither infinite nor NaN.
pub fn check_finite<X: ValueOf>(function: &str, name: &str, x: X) -> Result<()> {
    let v = x.value_of();
    if v.is_finite() {
        return Ok(());
    }
    Err(Error::Validation(format!("{}: {} is {}, but must be finite", function, name, v)))
}

/// `x` is not NaN.
pub fn check_not_nan<X: ValueOf>(function: &str, name: &str, x: X) -> Result<()> {
    let v = x.value_of();
    if !v.is_nan() {
        return Ok(());
    }
    Err(Error::Validation(format!("{}: {} is nan, but must not be nan", function, name)))
}

/// `x >= low`.
pub fn check_greater_or_equal<X: ValueOf>(
    function: &str,
    name: &str,
    x: X,
    low: f64,
) -> Result<()> {
    let v = x.value_of();
    if v >= low {
        return Ok(());
    }
    Err(Error::Validation(format!(
        "{}: {} is {}, but must be greater than or equal to {}",
        function, name, v, low
    )))
}

/// Two sizes are equal.
pub fn check_size_match(
    function: &str,
    name_a: &str,
    a: usize,
    name_b: &str,
    b: usize,
) -> Result<()> {
    if a == b {
        return Ok(());
    }
    Err(Error::Validation(format!(
        "{}: size of {} ({}) and size of {} ({}) must match",
        function, name_a, a, name_b, b
    )))
}

/// The matrix has as many rows as columns.
pub fn check_square<T: Scalar>(function: &str, name: &str, m: &DMatrix<T>) -> Result<()> {
    if m.is_square() {
        return Ok(());
    }
    Err(Error::Validation(format!(
        "{}: expecting a square matrix; rows of {} ({}) and columns of {} ({}) must match",
        function,
        name,
        m.nrows(),
        name,
        m.ncols()
    )))
}

/// Square and `|m[i,j] - m[j,i]| <= 1e-8` for every off-diagonal pair.
pub fn check_symmetric<T: Scalar>(function: &str, name: &str, m: &DMatrix<T>) -> Result<()> {
    check_square(function, name, m)?;
    let k = m.nrows();
    for i in 0..k {
        for j in (i + 1)..k {
            let a = m[(i, j)].value();
            let b = m[(j, i)].value();
            let diff = (a - b).abs();
            if diff.is_nan() || diff > SYMMETRY_TOLERANCE {
                return Err(Error::Validation(format!(
                    "{}: {} is not symmetric. {}[{},{}] = {}, but {}[{},{}] = {}",
                    function, name, name, i, j, a, name, j, i, b
                )));
            }
        }
    }
    Ok(())
}

/// Symmetric, non-empty, finite, and positive definite.
///
/// Definiteness is decided by a Cholesky factorization of the values.
pub fn check_pos_definite<T: Scalar>(function: &str, name: &str, m: &DMatrix<T>) -> Result<()> {
    check_symmetric(function, name, m)?;
    if m.nrows() == 0 {
        return Err(Error::Validation(format!(
            "{}: {} must have at least one row to be positive definite",
            function, name
        )));
    }
    let values = m.map(|v| v.value());
    if values.iter().any(|v| !v.is_finite()) {
        return Err(Error::Validation(format!("{}: {} must be finite", function, name)));
    }
    if values.cholesky().is_none() {
        return Err(Error::Validation(format!("{}: {} is not positive definite", function, name)));
    }
    Ok(())
}
