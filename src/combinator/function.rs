//! Application and composition helpers.

/// Composes functions from right to left.
///
/// `compose!(f, g, h)(x)` is `f(g(h(x)))`; `compose!(f)` is `f`.
///
/// # Examples
///
/// ```rust
/// use memolambda::compose;
///
/// let increment = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// assert_eq!(compose!(increment, double)(5), 11);
/// assert_eq!(compose!(double, increment)(5), 12);
/// ```
///
/// Types flow through the chain:
///
/// ```rust
/// use memolambda::compose;
///
/// let render = |x: u32| x.to_string();
/// let width = |text: String| text.len();
///
/// assert_eq!(compose!(width, render)(65_536), 5);
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };

    ($outer:expr, $($inner:expr),+ $(,)?) => {{
        let outer = $outer;
        let inner = $crate::compose!($($inner),+);
        move |input| outer(inner(input))
    }};
}

/// Returns its argument unchanged.
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns a function that ignores its input and yields a clone of `value`.
///
/// # Examples
///
/// ```rust
/// use memolambda::combinator::constant;
///
/// let zeros: Vec<i32> = ["a", "b"].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the two arguments of a binary function.
///
/// `flip(f)(b, a) == f(a, b)`.
///
/// # Examples
///
/// ```rust
/// use memolambda::combinator::flip;
///
/// let a_plus_two_b = |a: i32, b: i32| a + 2 * b;
/// assert_eq!(flip(a_plus_two_b)(2, 1), 5);
/// ```
#[inline]
pub fn flip<A, B, R, F>(function: F) -> impl Fn(B, A) -> R
where
    F: Fn(A, B) -> R,
{
    move |second, first| function(first, second)
}

/// Applies `function` to `value`, value first.
///
/// # Examples
///
/// ```rust
/// use memolambda::combinator::forward_apply;
///
/// assert_eq!(forward_apply(3, |x: i32| x * x), 9);
/// ```
#[inline]
pub fn forward_apply<T, R, F>(value: T, function: F) -> R
where
    F: FnOnce(T) -> R,
{
    function(value)
}

/// Calls a binary function with the two halves of a pair.
///
/// # Examples
///
/// ```rust
/// use memolambda::combinator::apply_to_pair;
///
/// fn a_plus_two_b(a: i32, b: i32) -> i32 { a + 2 * b }
///
/// assert_eq!(apply_to_pair(a_plus_two_b, (1, 2)), 5);
/// ```
#[inline]
pub fn apply_to_pair<A, B, R, F>(function: F, (first, second): (A, B)) -> R
where
    F: FnOnce(A, B) -> R,
{
    function(first, second)
}
