//! Term selection for proportional-only evaluation.
//!
//! With `PROPTO = true` a kernel may drop every additive term that is
//! constant in the arguments being varied. A term is kept when full
//! evaluation was requested or when at least one argument type it depends
//! on is varying (see [`Scalar::VARYING`](ld_ad::Scalar::VARYING)).

/// Whether a summand depending on argument types with the given `varying`
/// flags belongs in the result.
///
/// An empty `varying` list describes a term that depends on no argument
/// type at all (a normalizing constant).
#[inline]
pub const fn include_summand(propto: bool, varying: &[bool]) -> bool {
    if !propto {
        return true;
    }
    let mut i = 0;
    while i < varying.len() {
        if varying[i] {
            return true;
        }
        i += 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use ld_ad::{Dual, Scalar};

    #[test]
    fn test_full_evaluation_keeps_everything() {
        assert!(include_summand(false, &[]));
        assert!(include_summand(false, &[false, false]));
    }

    #[test]
    fn test_propto_keeps_only_varying_terms() {
        assert!(!include_summand(true, &[]));
        assert!(!include_summand(true, &[f64::VARYING]));
        assert!(include_summand(true, &[f64::VARYING, Dual::VARYING]));
        assert!(include_summand(true, &[Dual::VARYING]));
    }

    #[test]
    fn test_usable_in_const_context() {
        const KEEP: bool = include_summand(true, &[false, true]);
        assert!(KEEP);
    }
}
