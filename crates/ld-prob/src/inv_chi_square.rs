//! Inverse chi-square distribution log-density.

use ld_ad::{Promote, Promoted, Scalar, promote_lhs, promote_rhs};
use ld_core::constants::HALF_LOG_TWO;
use ld_core::{ErrorPolicy, Result};

use crate::propto::include_summand;
use crate::validation::{check_finite, check_not_nan, check_positive};

/// Log of `InvChiSquare(y | nu)`.
///
/// `log p = -ln Γ(nu/2) - nu/2 ln 2 - (nu/2 + 1) ln y - 1/(2y)` for `y > 0`.
/// Values `y <= 0` lie outside the support and give `-inf`.
///
/// `nu` must be positive and finite; `y` must not be NaN.
pub fn inv_chi_square_log<const PROPTO: bool, Y, D>(
    y: Y,
    nu: D,
    policy: ErrorPolicy,
) -> Result<Promoted<Y, D>>
where
    Y: Promote<D>,
    D: Scalar,
{
    const FUNCTION: &str = "inv_chi_square_log";
    let checks = check_positive(FUNCTION, "Degrees of freedom parameter", nu)
        .and_then(|()| check_finite(FUNCTION, "Degrees of freedom parameter", nu))
        .and_then(|()| check_not_nan(FUNCTION, "Random variable", y));
    if let Err(err) = checks {
        return policy.on_failure(err).map(<Promoted<Y, D> as Scalar>::from_f64);
    }
    if y.value() <= 0.0 {
        log::trace!("{}: y = {} is outside the support", FUNCTION, y.value());
        return Ok(<Promoted<Y, D> as Scalar>::from_f64(f64::NEG_INFINITY));
    }

    let lit = <Promoted<Y, D> as Scalar>::from_f64;
    let y = promote_lhs::<Y, D>(y);
    let nu = promote_rhs::<Y, D>(nu);
    let half_nu = lit(0.5) * nu;

    let mut lp = lit(0.0);
    if include_summand(PROPTO, &[D::VARYING]) {
        lp = lp - (half_nu.ln_gamma() + nu * lit(HALF_LOG_TWO));
    }
    if include_summand(PROPTO, &[Y::VARYING, D::VARYING]) {
        lp = lp - (half_nu + lit(1.0)) * y.ln();
    }
    if include_summand(PROPTO, &[Y::VARYING]) {
        lp = lp - lit(0.5) / y;
    }
    Ok(lp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ld_ad::Dual;
    use ld_core::Error;

    const RAISE: ErrorPolicy = ErrorPolicy::Raise;

    #[test]
    fn test_golden_values() {
        let lp = inv_chi_square_log::<false, f64, f64>(0.5, 2.0, RAISE).unwrap();
        assert_relative_eq!(lp, -0.306_852_8, max_relative = 1e-6);
        let lp = inv_chi_square_log::<false, f64, f64>(3.2, 9.1, RAISE).unwrap();
        assert_relative_eq!(lp, -12.289_05, max_relative = 1e-6);
    }

    #[test]
    fn test_propto_with_constants_is_zero() {
        assert_eq!(inv_chi_square_log::<true, f64, f64>(0.5, 2.0, RAISE).unwrap(), 0.0);
        assert_eq!(inv_chi_square_log::<true, f64, f64>(3.2, 9.1, RAISE).unwrap(), 0.0);
    }

    #[test]
    fn test_propto_keeps_terms_of_varying_y() {
        let full = inv_chi_square_log::<false, Dual, f64>(Dual::var(3.2), 9.1, RAISE).unwrap();
        let propto = inv_chi_square_log::<true, Dual, f64>(Dual::var(3.2), 9.1, RAISE).unwrap();
        let constant = -(statrs::function::gamma::ln_gamma(4.55) + 9.1 * HALF_LOG_TWO);
        assert_relative_eq!(full.val - propto.val, constant, epsilon = 1e-12);
        assert_relative_eq!(full.dot, propto.dot, epsilon = 1e-15);
    }

    #[test]
    fn test_derivatives() {
        let (y, nu) = (3.2, 9.1);
        // d/dy = -(nu/2 + 1)/y + 1/(2 y^2)
        let dy = inv_chi_square_log::<false, Dual, f64>(Dual::var(y), nu, RAISE).unwrap();
        assert_relative_eq!(dy.dot, -(nu / 2.0 + 1.0) / y + 0.5 / (y * y), epsilon = 1e-12);

        let f = |nu: f64| inv_chi_square_log::<false, f64, f64>(y, nu, RAISE).unwrap();
        let h = 1e-6;
        let fd = (f(nu + h) - f(nu - h)) / (2.0 * h);
        let dnu = inv_chi_square_log::<false, f64, Dual>(y, Dual::var(nu), RAISE).unwrap();
        assert_relative_eq!(dnu.dot, fd, epsilon = 1e-6);
    }

    #[test]
    fn test_outside_support() {
        assert_eq!(inv_chi_square_log::<false, f64, f64>(0.0, 2.0, RAISE).unwrap(), f64::NEG_INFINITY);
        assert_eq!(inv_chi_square_log::<false, f64, f64>(-1.0, 2.0, RAISE).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_failures() {
        for nu in [0.0, -1.0, f64::INFINITY, f64::NAN] {
            let r = inv_chi_square_log::<false, f64, f64>(1.0, nu, RAISE);
            assert!(matches!(r, Err(Error::Validation(_))), "nu={}", nu);
        }
        assert!(inv_chi_square_log::<false, f64, f64>(f64::NAN, 2.0, RAISE).is_err());
        let lp = inv_chi_square_log::<false, f64, f64>(f64::NAN, 2.0, ErrorPolicy::Sentinel).unwrap();
        assert!(lp.is_nan());
    }
}
