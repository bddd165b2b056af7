//! # ld-core
//!
//! Shared foundation for the logdensity crates:
//! - [`Error`] / [`Result`] used by every fallible operation
//! - [`constants`]: read-only numeric constants
//! - [`ErrorPolicy`]: whether a failed validation raises or returns a sentinel

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod constants;
pub mod error;
pub mod policy;

pub use error::{Error, Result};
pub use policy::ErrorPolicy;
