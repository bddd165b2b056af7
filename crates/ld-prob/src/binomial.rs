//! Binomial distribution log-probability mass.

use ld_ad::Scalar;
use ld_core::{ErrorPolicy, Result};

use crate::link::{log_inv_logit, log1m_inv_logit};
use crate::math::{log1m, multiply_log};
use crate::propto::include_summand;
use crate::special::binomial_coefficient_log;
use crate::validation::{check_bounded, check_finite, check_nonnegative};

fn check_counts(function: &str, n: i64, trials: i64) -> Result<()> {
    check_bounded(function, "Successes variable", n, 0.0, trials as f64)?;
    check_nonnegative(function, "Population size parameter", trials)
}

/// Log of `Binomial(n | trials, theta)`.
///
/// Arguments are validated in order: `0 <= n <= trials`, `trials >= 0`,
/// `theta` finite, `theta` in `[0, 1]`. A failed check is resolved through
/// `policy`.
///
/// With `PROPTO = true` the binomial coefficient is always dropped, and the
/// remaining terms are dropped too unless `T` is varying.
pub fn binomial_log<const PROPTO: bool, T: Scalar>(
    n: i64,
    trials: i64,
    theta: T,
    policy: ErrorPolicy,
) -> Result<T> {
    const FUNCTION: &str = "binomial_log";
    let checks = check_counts(FUNCTION, n, trials)
        .and_then(|()| check_finite(FUNCTION, "Probability parameter", theta))
        .and_then(|()| check_bounded(FUNCTION, "Probability parameter", theta, 0.0, 1.0));
    if let Err(err) = checks {
        return policy.on_failure(err).map(T::from_f64);
    }

    let mut lp = T::from_f64(0.0);
    if include_summand(PROPTO, &[]) {
        lp = lp + T::from_f64(binomial_coefficient_log(trials as f64, n as f64));
    }
    if include_summand(PROPTO, &[T::VARYING]) {
        lp = lp + multiply_log(T::from_f64(n as f64), theta);
        // 0 * ln(0) counts as 0 when every trial succeeds.
        if n < trials {
            lp = lp + T::from_f64((trials - n) as f64) * log1m(theta)?;
        }
    }
    Ok(lp)
}

/// Log of `Binomial(n | trials, inv_logit(alpha))`, computed in log-odds
/// space without forming the probability.
pub fn binomial_logit_log<const PROPTO: bool, T: Scalar>(
    n: i64,
    trials: i64,
    alpha: T,
    policy: ErrorPolicy,
) -> Result<T> {
    const FUNCTION: &str = "binomial_logit_log";
    let checks = check_counts(FUNCTION, n, trials)
        .and_then(|()| check_finite(FUNCTION, "Probability parameter", alpha));
    if let Err(err) = checks {
        return policy.on_failure(err).map(T::from_f64);
    }

    let mut lp = T::from_f64(0.0);
    if include_summand(PROPTO, &[]) {
        lp = lp + T::from_f64(binomial_coefficient_log(trials as f64, n as f64));
    }
    if include_summand(PROPTO, &[T::VARYING]) {
        lp = lp
            + T::from_f64(n as f64) * log_inv_logit(alpha)
            + T::from_f64((trials - n) as f64) * log1m_inv_logit(alpha);
    }
    Ok(lp)
}
