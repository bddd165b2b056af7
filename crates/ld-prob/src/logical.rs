//! Logical operators returning `1` / `0`.
//!
//! Operands follow C truthiness: anything unequal to its type's zero value
//! is true.

#[inline]
fn truthy<T: PartialEq + Default>(x: T) -> bool {
    x != T::default()
}

/// `1` if `x` is zero, else `0`.
#[inline]
pub fn logical_negation<T: PartialEq + Default>(x: T) -> i32 {
    i32::from(!truthy(x))
}

/// `1` if either operand is nonzero.
#[inline]
pub fn logical_or<T1, T2>(x1: T1, x2: T2) -> i32
where
    T1: PartialEq + Default,
    T2: PartialEq + Default,
{
    i32::from(truthy(x1) || truthy(x2))
}

/// `1` if both operands are nonzero.
#[inline]
pub fn logical_and<T1, T2>(x1: T1, x2: T2) -> i32
where
    T1: PartialEq + Default,
    T2: PartialEq + Default,
{
    i32::from(truthy(x1) && truthy(x2))
}

/// `x1 == x2`.
#[inline]
pub fn logical_eq<T1: PartialEq<T2>, T2>(x1: T1, x2: T2) -> i32 {
    i32::from(x1 == x2)
}

/// `x1 != x2`.
#[inline]
pub fn logical_neq<T1: PartialEq<T2>, T2>(x1: T1, x2: T2) -> i32 {
    i32::from(x1 != x2)
}

/// `x1 < x2`.
#[inline]
pub fn logical_lt<T1: PartialOrd<T2>, T2>(x1: T1, x2: T2) -> i32 {
    i32::from(x1 < x2)
}

/// `x1 <= x2`.
#[inline]
pub fn logical_lte<T1: PartialOrd<T2>, T2>(x1: T1, x2: T2) -> i32 {
    i32::from(x1 <= x2)
}

/// `x1 > x2`.
#[inline]
pub fn logical_gt<T1: PartialOrd<T2>, T2>(x1: T1, x2: T2) -> i32 {
    i32::from(x1 > x2)
}

/// `x1 >= x2`.
#[inline]
pub fn logical_gte<T1: PartialOrd<T2>, T2>(x1: T1, x2: T2) -> i32 {
    i32::from(x1 >= x2)
}
