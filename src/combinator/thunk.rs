//! Nullary thunks.
//!
//! A thunk recomputes on every call; wrap the function with
//! [`memoize`](crate::memo::memoize) first when the result should be cached.

/// Defers `function(argument)` until the returned thunk is called.
///
/// # Examples
///
/// ```rust
/// use memolambda::combinator::lazy;
///
/// let square_of_three = lazy(|x: i32| x * x, 3);
/// assert_eq!(square_of_three(), 9);
/// ```
#[inline]
pub fn lazy<A, R, F>(function: F, argument: A) -> impl Fn() -> R
where
    A: Clone,
    F: Fn(A) -> R,
{
    move || function(argument.clone())
}

/// Returns a thunk that always yields a clone of `value`.
///
/// # Examples
///
/// ```rust
/// use memolambda::combinator::fixed;
///
/// let three = fixed(3);
/// assert_eq!(three(), 3);
/// ```
#[inline]
pub fn fixed<T: Clone>(value: T) -> impl Fn() -> T {
    move || value.clone()
}
