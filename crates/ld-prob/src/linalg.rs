//! Dense matrix operations generic over [`Scalar`].
//!
//! `nalgebra` supplies the container; the arithmetic is written out here so
//! that derivatives carried by [`Dual`](ld_ad::Dual) entries flow through.

use ld_ad::Scalar;
use ld_core::{Error, Result};
use nalgebra::DMatrix;

fn pivot_row<T: Scalar>(m: &DMatrix<T>, col: usize) -> usize {
    (col..m.nrows()).fold(col, |best, r| {
        if m[(r, col)].value().abs() > m[(best, col)].value().abs() { r } else { best }
    })
}

/// Determinant by LU decomposition with partial pivoting.
///
/// The empty matrix has determinant 1. A matrix whose values are singular
/// returns a plain zero: elimination stops at the zero pivot, so any tangent
/// carried by the entries is not propagated.
pub fn determinant<T: Scalar>(m: &DMatrix<T>) -> Result<T> {
    if !m.is_square() {
        return Err(Error::SizeMismatch(format!(
            "determinant: matrix is {}x{}, expected square",
            m.nrows(),
            m.ncols()
        )));
    }
    let n = m.nrows();
    let mut lu = m.clone();
    let mut det = T::from_f64(1.0);
    for col in 0..n {
        let p = pivot_row(&lu, col);
        if lu[(p, col)].value() == 0.0 {
            return Ok(T::from_f64(0.0));
        }
        if p != col {
            lu.swap_rows(p, col);
            det = -det;
        }
        let pivot = lu[(col, col)];
        det = det * pivot;
        for r in (col + 1)..n {
            let factor = lu[(r, col)] / pivot;
            for c in (col + 1)..n {
                lu[(r, c)] = lu[(r, c)] - factor * lu[(col, c)];
            }
        }
    }
    Ok(det)
}

/// Inverse by Gauss-Jordan elimination with partial pivoting.
pub fn inverse<T: Scalar>(m: &DMatrix<T>) -> Result<DMatrix<T>> {
    if !m.is_square() {
        return Err(Error::SizeMismatch(format!(
            "inverse: matrix is {}x{}, expected square",
            m.nrows(),
            m.ncols()
        )));
    }
    let n = m.nrows();
    let zero = T::from_f64(0.0);
    let one = T::from_f64(1.0);
    let mut a = m.clone();
    let mut inv = DMatrix::from_fn(n, n, |i, j| if i == j { one } else { zero });

    for col in 0..n {
        let p = pivot_row(&a, col);
        let pv = a[(p, col)].value();
        if pv == 0.0 || !pv.is_finite() {
            return Err(Error::Computation(format!(
                "inverse: matrix is singular (zero pivot in column {})",
                col
            )));
        }
        if p != col {
            a.swap_rows(p, col);
            inv.swap_rows(p, col);
        }
        let pivot = a[(col, col)];
        for c in 0..n {
            a[(col, c)] = a[(col, c)] / pivot;
            inv[(col, c)] = inv[(col, c)] / pivot;
        }
        for r in 0..n {
            if r == col {
                continue;
            }
            let factor = a[(r, col)];
            for c in 0..n {
                a[(r, c)] = a[(r, c)] - factor * a[(col, c)];
                inv[(r, c)] = inv[(r, c)] - factor * inv[(col, c)];
            }
        }
    }
    Ok(inv)
}

/// Matrix product `a * b`.
pub fn multiply<T: Scalar>(a: &DMatrix<T>, b: &DMatrix<T>) -> Result<DMatrix<T>> {
    if a.ncols() != b.nrows() {
        return Err(Error::SizeMismatch(format!(
            "multiply: columns of a ({}) must match rows of b ({})",
            a.ncols(),
            b.nrows()
        )));
    }
    Ok(DMatrix::from_fn(a.nrows(), b.ncols(), |i, j| {
        (0..a.ncols()).map(|l| a[(i, l)] * b[(l, j)]).sum()
    }))
}

/// Sum of the diagonal.
pub fn trace<T: Scalar>(m: &DMatrix<T>) -> T {
    (0..m.nrows().min(m.ncols())).map(|i| m[(i, i)]).sum()
}
