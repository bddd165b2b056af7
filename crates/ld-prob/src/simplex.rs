//! Softmax and its inverse on the unit simplex.

use ld_ad::Scalar;
use ld_core::{Error, Result};

fn maximum<T: Scalar>(x: &[T]) -> Result<T> {
    let (&first, rest) = x
        .split_first()
        .ok_or_else(|| Error::EmptyInput("x must have at least one element".to_string()))?;
    Ok(rest.iter().fold(first, |m, &v| if v > m { v } else { m }))
}

/// Write `softmax(x)` into `simplex`.
///
/// `simplex[i] = exp(x[i] - max(x)) / sum_j exp(x[j] - max(x))`, so the result
/// is non-negative and sums to one without overflowing for large inputs.
pub fn softmax<T: Scalar>(x: &[T], simplex: &mut [T]) -> Result<()> {
    if x.len() != simplex.len() {
        return Err(Error::SizeMismatch(format!(
            "softmax: x has {} elements, simplex has {}",
            x.len(),
            simplex.len()
        )));
    }
    let max_x = maximum(x)?;
    for (s, &v) in simplex.iter_mut().zip(x) {
        *s = (v - max_x).exp();
    }
    let sum: T = simplex.iter().copied().sum();
    for s in simplex.iter_mut() {
        *s = *s / sum;
    }
    Ok(())
}

/// Write `ln(simplex[i])` into `y`.
///
/// The input is not checked to be a simplex.
pub fn inverse_softmax<T: Scalar>(simplex: &[T], y: &mut [T]) -> Result<()> {
    if simplex.len() != y.len() {
        return Err(Error::SizeMismatch(format!(
            "inverse_softmax: simplex has {} elements, y has {}",
            simplex.len(),
            y.len()
        )));
    }
    for (out, &s) in y.iter_mut().zip(simplex) {
        *out = s.ln();
    }
    Ok(())
}
