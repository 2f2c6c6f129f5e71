//! Positional argument binding.
//!
//! Each binder clones the fixed arguments on every call, so the returned
//! function can be called any number of times.

/// Binds the only argument of a unary function, producing a thunk.
///
/// # Examples
///
/// ```rust
/// use memolambda::combinator::bind_unary;
///
/// let four = bind_unary(|x: i32| x * x, 2);
/// assert_eq!(four(), 4);
/// ```
#[inline]
pub fn bind_unary<A, R, F>(function: F, argument: A) -> impl Fn() -> R
where
    A: Clone,
    F: Fn(A) -> R,
{
    move || function(argument.clone())
}

/// Binds the first argument of a binary function.
///
/// # Examples
///
/// ```rust
/// use memolambda::combinator::bind_1st_of_2;
///
/// fn square(x: i32) -> i32 { x * x }
///
/// fn transform(function: fn(i32) -> i32, row: Vec<i32>) -> Vec<i32> {
///     row.into_iter().map(function).collect()
/// }
///
/// let square_all = bind_1st_of_2(transform, square as fn(i32) -> i32);
/// assert_eq!(square_all(vec![1, 2, 3]), vec![1, 4, 9]);
/// ```
#[inline]
pub fn bind_1st_of_2<A, B, R, F>(function: F, first: A) -> impl Fn(B) -> R
where
    A: Clone,
    F: Fn(A, B) -> R,
{
    move |second| function(first.clone(), second)
}

/// Binds the second argument of a binary function.
///
/// # Examples
///
/// ```rust
/// use memolambda::combinator::bind_2nd_of_2;
///
/// let halve = bind_2nd_of_2(|x: i32, y: i32| x / y, 2);
/// assert_eq!(halve(6), 3);
/// ```
#[inline]
pub fn bind_2nd_of_2<A, B, R, F>(function: F, second: B) -> impl Fn(A) -> R
where
    B: Clone,
    F: Fn(A, B) -> R,
{
    move |first| function(first, second.clone())
}

/// Binds the first two arguments of a ternary function.
///
/// # Examples
///
/// ```rust
/// use memolambda::combinator::bind_1st_and_2nd_of_3;
///
/// let add_eight = bind_1st_and_2nd_of_3(|x: i32, y: i32, z: i32| x + y + z, 3, 5);
/// assert_eq!(add_eight(7), 15);
/// ```
#[inline]
pub fn bind_1st_and_2nd_of_3<A, B, C, R, F>(function: F, first: A, second: B) -> impl Fn(C) -> R
where
    A: Clone,
    B: Clone,
    F: Fn(A, B, C) -> R,
{
    move |third| function(first.clone(), second.clone(), third)
}
