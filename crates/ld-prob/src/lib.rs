//! Numerically-stable special functions and log-density kernels.
//!
//! Layers, bottom to top:
//! - special functions ([`math`], [`special`], [`link`], [`simplex`], [`logical`])
//! - argument checks ([`validation`]) and dense matrix helpers ([`linalg`])
//! - distribution kernels ([`binomial`], [`wishart`], [`inv_chi_square`])
//!
//! Kernels are generic over [`ld_ad::Scalar`] and take a `const PROPTO: bool`
//! parameter. With `PROPTO = true` terms that are constant in every varying
//! argument are dropped (see [`propto::include_summand`]). A failed argument
//! check is resolved by the caller's [`ld_core::ErrorPolicy`].

pub mod binomial;
pub mod distributions;
pub mod inv_chi_square;
pub mod linalg;
pub mod link;
pub mod logical;
pub mod math;
pub mod propto;
pub mod simplex;
pub mod special;
pub mod validation;
pub mod wishart;

pub use binomial::{binomial_log, binomial_logit_log};
pub use inv_chi_square::inv_chi_square_log;
pub use ld_ad::value_of;
pub use wishart::wishart_log;
