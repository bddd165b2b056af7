//! [`Scalar`] trait: abstraction over `f64` and [`Dual`](crate::dual::Dual)
//! that lets special functions and log-density kernels be written once and
//! evaluated either plainly or with forward-mode derivatives.

use crate::dual::Dual;
use std::fmt::Debug;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use statrs::function::erf::erf;
use statrs::function::gamma::ln_gamma;

/// A scalar type suitable for log-density computation.
///
/// Implement this for `f64` (plain evaluation) and `Dual` (forward-mode AD).
pub trait Scalar:
    Copy
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Sum
    + PartialOrd
    + PartialEq
    + Debug
    + ValueOf
    + Sized
    + 'static
{
    /// Whether values of this type carry derivative information.
    ///
    /// Proportional-only evaluation keeps a term only if at least one of the
    /// argument types it depends on is varying.
    const VARYING: bool;

    /// Wrap an `f64` constant (derivative = 0 for AD types).
    fn from_f64(v: f64) -> Self;

    /// Extract the primal (function) value.
    fn value(&self) -> f64;

    /// Natural logarithm.
    fn ln(self) -> Self;

    /// Exponential.
    fn exp(self) -> Self;

    /// Square root.
    fn sqrt(self) -> Self;

    /// Power with f64 exponent.
    fn powf(self, n: f64) -> Self;

    /// Integer power.
    fn powi(self, n: i32) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Maximum of two values (non-smooth; passes derivative of the winner).
    fn max_s(self, other: Self) -> Self;

    /// Natural log of the gamma function.
    fn ln_gamma(self) -> Self;

    /// Error function.
    fn erf(self) -> Self;
}

// --- f64 implementation ---

impl Scalar for f64 {
    const VARYING: bool = false;

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn value(&self) -> f64 {
        *self
    }

    #[inline]
    fn ln(self) -> Self {
        f64::ln(self)
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        f64::sqrt(self)
    }

    #[inline]
    fn powf(self, n: f64) -> Self {
        f64::powf(self, n)
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        f64::powi(self, n)
    }

    #[inline]
    fn abs(self) -> Self {
        f64::abs(self)
    }

    #[inline]
    fn max_s(self, other: Self) -> Self {
        f64::max(self, other)
    }

    #[inline]
    fn ln_gamma(self) -> Self {
        ln_gamma(self)
    }

    #[inline]
    fn erf(self) -> Self {
        erf(self)
    }
}

// --- Dual implementation ---

impl Scalar for Dual {
    const VARYING: bool = true;

    #[inline]
    fn from_f64(v: f64) -> Self {
        Dual::constant(v)
    }

    #[inline]
    fn value(&self) -> f64 {
        self.val
    }

    #[inline]
    fn ln(self) -> Self {
        Dual::ln(self)
    }

    #[inline]
    fn exp(self) -> Self {
        Dual::exp(self)
    }

    #[inline]
    fn sqrt(self) -> Self {
        Dual::sqrt(self)
    }

    #[inline]
    fn powf(self, n: f64) -> Self {
        Dual::powf(self, n)
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        Dual::powi(self, n)
    }

    #[inline]
    fn abs(self) -> Self {
        Dual::abs(self)
    }

    #[inline]
    fn max_s(self, other: Self) -> Self {
        Dual::max(self, other)
    }

    #[inline]
    fn ln_gamma(self) -> Self {
        Dual::ln_gamma(self)
    }

    #[inline]
    fn erf(self) -> Self {
        Dual::erf(self)
    }
}

/// Result type of an operation mixing `Self` and `Rhs`.
///
/// Plain values stay plain; anything touching a [`Dual`] becomes a `Dual`.
pub trait Promote<Rhs: Scalar>: Scalar {
    /// Common type both operands convert into.
    type Output: Scalar + From<Self> + From<Rhs>;
}

impl Promote<f64> for f64 {
    type Output = f64;
}

impl Promote<Dual> for f64 {
    type Output = Dual;
}

impl Promote<f64> for Dual {
    type Output = Dual;
}

impl Promote<Dual> for Dual {
    type Output = Dual;
}

/// Promoted type of two scalars.
pub type Promoted<A, B> = <A as Promote<B>>::Output;

/// Promoted type of three scalars.
pub type Promoted3<A, B, C> = Promoted<Promoted<A, B>, C>;

/// Convert the left operand of a pair into the pair's promoted type.
#[inline]
pub fn promote_lhs<A: Promote<B>, B: Scalar>(a: A) -> Promoted<A, B> {
    <Promoted<A, B> as From<A>>::from(a)
}

/// Convert the right operand of a pair into the pair's promoted type.
#[inline]
pub fn promote_rhs<A: Promote<B>, B: Scalar>(b: B) -> Promoted<A, B> {
    <Promoted<A, B> as From<B>>::from(b)
}

/// Conversion of any numeric value to a plain `f64`.
pub trait ValueOf {
    /// The value as `f64`, dropping any derivative information.
    fn value_of(&self) -> f64;
}

macro_rules! impl_value_of_primitive {
    ($($t:ty),*) => {
        $(
            impl ValueOf for $t {
                #[inline]
                fn value_of(&self) -> f64 {
                    *self as f64
                }
            }
        )*
    };
}

impl_value_of_primitive!(f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl ValueOf for f64 {
    #[inline(always)]
    fn value_of(&self) -> f64 {
        *self
    }
}

impl ValueOf for Dual {
    #[inline]
    fn value_of(&self) -> f64 {
        self.val
    }
}

/// Return the value of `x` as a plain `f64`.
///
/// For `f64` this is the identity and compiles away.
#[inline]
pub fn value_of<T: ValueOf>(x: T) -> f64 {
    x.value_of()
}
