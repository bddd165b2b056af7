//! Wishart distribution log-density.

use ld_ad::{Promote, Promoted, Promoted3, Scalar, promote_lhs, promote_rhs};
use ld_core::constants::NEG_LOG_TWO_OVER_TWO;
use ld_core::{ErrorPolicy, Result};
use nalgebra::DMatrix;

use crate::linalg::{determinant, inverse, multiply, trace};
use crate::math::multiply_log;
use crate::propto::include_summand;
use crate::special::lmgamma;
use crate::validation::{
    check_greater_or_equal, check_pos_definite, check_size_match, check_square, check_symmetric,
};

/// Varying flags of the three argument types, in `(W, nu, S)` order.
#[derive(Debug, Clone, Copy)]
struct Varying {
    w: bool,
    nu: bool,
    s: bool,
}

fn validate<Y: Scalar, D: Scalar, S: Scalar>(
    function: &str,
    w: &DMatrix<Y>,
    nu: D,
    s: &DMatrix<S>,
) -> Result<()> {
    let k = w.nrows();
    check_greater_or_equal(function, "Degrees of freedom parameter", nu, k as f64 - 1.0)?;
    check_square(function, "random variable", w)?;
    check_square(function, "scale parameter", s)?;
    check_size_match(function, "Rows of random variable", w.nrows(), "rows of scale parameter", s.nrows())?;
    check_symmetric(function, "scale parameter", s)?;
    check_pos_definite(function, "scale parameter", s)?;
    check_symmetric(function, "random variable", w)
}

fn log_density<const PROPTO: bool, T: Scalar>(
    w: &DMatrix<T>,
    nu: T,
    s: &DMatrix<T>,
    varying: Varying,
) -> Result<T> {
    let k = w.nrows();
    let kf = k as f64;
    let half = T::from_f64(0.5);
    let half_nu = half * nu;

    let mut lp = T::from_f64(0.0);
    if include_summand(PROPTO, &[varying.nu]) {
        lp = lp + nu * T::from_f64(kf * NEG_LOG_TWO_OVER_TWO);
        lp = lp - lmgamma(k, half_nu);
    }
    if include_summand(PROPTO, &[varying.nu, varying.s]) {
        lp = lp - multiply_log(half_nu, determinant(s)?);
    }
    if include_summand(PROPTO, &[varying.s, varying.w]) {
        let s_inv_w = multiply(&inverse(s)?, w)?;
        lp = lp - half * trace(&s_inv_w).abs();
    }
    if include_summand(PROPTO, &[varying.w, varying.nu]) && nu.value() != kf + 1.0 {
        lp = lp + multiply_log(half * (nu - T::from_f64(kf + 1.0)), determinant(w)?);
    }
    Ok(lp)
}

/// Log of `Wishart(W | nu, S)` for a `k x k` symmetric positive-definite
/// random matrix `W`, degrees of freedom `nu` and scale matrix `S`.
///
/// `log p = (nu-k-1)/2 ln|W| - tr(S^-1 W)/2 - nu k/2 ln 2 - nu/2 ln|S| - ln Γ_k(nu/2)`
///
/// Checks, in order: `nu >= k - 1`, `W` square, `S` square, matching
/// dimensions, `S` symmetric positive definite, `W` symmetric. The result
/// type is the promotion of all three argument types.
pub fn wishart_log<const PROPTO: bool, Y, D, S>(
    w: &DMatrix<Y>,
    nu: D,
    s: &DMatrix<S>,
    policy: ErrorPolicy,
) -> Result<Promoted3<Y, D, S>>
where
    Y: Promote<D>,
    D: Scalar,
    S: Scalar,
    Promoted<Y, D>: Promote<S>,
{
    if let Err(err) = validate("wishart_log", w, nu, s) {
        return policy.on_failure(err).map(<Promoted3<Y, D, S> as Scalar>::from_f64);
    }

    let w_p = w.map(|v| promote_lhs::<Promoted<Y, D>, S>(promote_lhs::<Y, D>(v)));
    let nu_p = promote_lhs::<Promoted<Y, D>, S>(promote_rhs::<Y, D>(nu));
    let s_p = s.map(promote_rhs::<Promoted<Y, D>, S>);
    let varying = Varying { w: Y::VARYING, nu: D::VARYING, s: S::VARYING };
    log_density::<PROPTO, _>(&w_p, nu_p, &s_p, varying)
}
