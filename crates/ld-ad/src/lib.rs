//! # ld-ad
//!
//! Numeric interface for the logdensity kernels.
//!
//! Provides:
//! - [`Scalar`] trait for writing generic code over `f64` and `Dual`
//! - **Forward-mode AD** via [`dual::Dual`] numbers
//! - [`Promote`] for kernels whose arguments have different scalar types
//! - [`value_of`] to drop derivative information

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod dual;
pub mod scalar;

pub use dual::Dual;
pub use scalar::{
    Promote, Promoted, Promoted3, Scalar, ValueOf, promote_lhs, promote_rhs, value_of,
};
