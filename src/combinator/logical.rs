//! Predicate combinators.
//!
//! Predicates take their argument by reference, like the closures accepted
//! by [`Iterator::filter`]. The binary combinators short-circuit where
//! boolean logic allows.

/// Negates a predicate.
///
/// # Examples
///
/// ```rust
/// use memolambda::combinator::logical_not;
///
/// let is_one = |x: &i32| *x == 1;
/// let is_not_one = logical_not(is_one);
/// assert!(!is_not_one(&1));
/// assert!(is_not_one(&2));
/// ```
#[inline]
pub fn logical_not<A, P>(predicate: P) -> impl Fn(&A) -> bool
where
    P: Fn(&A) -> bool,
{
    move |value: &A| !predicate(value)
}

/// Holds when both predicates hold.
#[inline]
pub fn logical_and<A, P, Q>(left: P, right: Q) -> impl Fn(&A) -> bool
where
    P: Fn(&A) -> bool,
    Q: Fn(&A) -> bool,
{
    move |value: &A| left(value) && right(value)
}

/// Holds when at least one predicate holds.
#[inline]
pub fn logical_or<A, P, Q>(left: P, right: Q) -> impl Fn(&A) -> bool
where
    P: Fn(&A) -> bool,
    Q: Fn(&A) -> bool,
{
    move |value: &A| left(value) || right(value)
}

/// Holds when exactly one predicate holds.
///
/// # Examples
///
/// ```rust
/// use memolambda::combinator::logical_xor;
///
/// let is_one = |x: &i32| *x == 1;
/// let is_two = |x: &i32| *x == 2;
///
/// assert!(logical_xor(is_two, is_one)(&1));
/// assert!(!logical_xor(is_one, is_one)(&1));
/// assert!(!logical_xor(is_two, is_two)(&1));
/// ```
#[inline]
pub fn logical_xor<A, P, Q>(left: P, right: Q) -> impl Fn(&A) -> bool
where
    P: Fn(&A) -> bool,
    Q: Fn(&A) -> bool,
{
    move |value: &A| left(value) != right(value)
}
