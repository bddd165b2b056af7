//! What a failed validation check turns into.
//!
//! Density kernels validate their arguments before doing any numerical work.
//! A failed check produces an [`Error`]; the active [`ErrorPolicy`] decides
//! whether the caller sees that error or a sentinel value in its place.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Failure handling for validation checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Return the validation error to the caller.
    #[default]
    Raise,
    /// Log the failure and return a quiet NaN as the log-density.
    Sentinel,
}

impl ErrorPolicy {
    /// Resolve a failed check into the kernel's return value.
    ///
    /// `Raise` yields `Err(err)`. `Sentinel` yields `Ok(NaN)`; the caller
    /// converts it into its own accumulator type.
    pub fn on_failure(self, err: Error) -> Result<f64> {
        match self {
            ErrorPolicy::Raise => Err(err),
            ErrorPolicy::Sentinel => {
                log::warn!("{err}; returning NaN sentinel");
                Ok(f64::NAN)
            }
        }
    }

    /// Stable lowercase name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorPolicy::Raise => "raise",
            ErrorPolicy::Sentinel => "sentinel",
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raise" => Ok(ErrorPolicy::Raise),
            "sentinel" => Ok(ErrorPolicy::Sentinel),
            other => Err(Error::Validation(format!(
                "unknown error policy '{other}', expected 'raise' or 'sentinel'"
            ))),
        }
    }
}
