//! Memoization of self-recursive functions.
//!
//! A recursive function is written in continuation-passing style: instead
//! of calling itself, the body receives a continuation and calls that for
//! every recursive subcall.
//!
//! ```text
//! body(recurse, n) = if n < 2 { n } else { recurse(n - 1) + recurse(n - 2) }
//! ```
//!
//! [`RecursiveMemo`] keeps the body and the store in one reference-counted
//! cell. The continuation it hands to the body dispatches back into that
//! same cell, so the outer call and every nested subcall read and write a
//! single store. Each distinct input evaluates the body at most once.
//!
//! # Limitations
//!
//! - Recursion depth is that of the body; deep descents can still overflow
//!   the stack even though shared subproblems are computed once.
//! - A body that requests its own input through the continuation recurses
//!   without bound, exactly as the unmemoized function would.

use std::cell::RefCell;
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;

use super::store::{CacheStore, DefaultHashBuilder};

struct Shared<N, R, F, S> {
    body: F,
    store: RefCell<CacheStore<N, R, S>>,
}

impl<N, R, F, S> Shared<N, R, F, S>
where
    N: Eq + Hash + Clone,
    R: Clone,
    S: BuildHasher,
{
    fn cached(&self, input: &N) -> Option<R> {
        self.store.borrow().lookup(input).cloned()
    }

    fn remember(&self, input: N, value: R) {
        let mut store = self.store.borrow_mut();
        store.put(input, value);
        tracing::trace!(entries = store.len(), "recursive memo cache insert");
    }

    fn call(&self, input: N) -> R
    where
        F: Fn(&dyn Fn(N) -> R, N) -> R,
    {
        if let Some(value) = self.cached(&input) {
            return value;
        }
        let recurse = |next: N| self.call(next);
        let value = (self.body)(&recurse, input.clone());
        self.remember(input, value.clone());
        value
    }

    fn try_call<E>(&self, input: N) -> Result<R, E>
    where
        F: Fn(&dyn Fn(N) -> Result<R, E>, N) -> Result<R, E>,
    {
        if let Some(value) = self.cached(&input) {
            return Ok(value);
        }
        let recurse = |next: N| self.try_call::<E>(next);
        match (self.body)(&recurse, input.clone()) {
            Ok(value) => {
                self.remember(input, value.clone());
                Ok(value)
            }
            Err(error) => {
                tracing::debug!("recursive memoized computation failed; result not cached");
                Err(error)
            }
        }
    }
}

/// A continuation-passing body paired with one shared result cache.
///
/// Cloning a `RecursiveMemo` is cheap and the clone shares the same store.
///
/// # Thread Safety
///
/// `RecursiveMemo` is neither `Send` nor `Sync`. Use `SyncRecursiveMemo`
/// (feature `sync`) for concurrent use.
///
/// # Examples
///
/// ```rust
/// use memolambda::memo::RecursiveMemo;
///
/// // Number of lattice paths from (0, 0) to (x, y).
/// let paths = RecursiveMemo::new(|recurse: &dyn Fn((u32, u32)) -> u64, (x, y): (u32, u32)| {
///     if x == 0 || y == 0 {
///         1
///     } else {
///         recurse((x - 1, y)) + recurse((x, y - 1))
///     }
/// });
///
/// assert_eq!(paths.call((16, 16)), 601_080_390);
/// assert_eq!(paths.cache_len(), 16 * 16 + 2 * 16);
/// ```
pub struct RecursiveMemo<N, R, F, S = DefaultHashBuilder> {
    shared: Rc<Shared<N, R, F, S>>,
}

impl<N, R, F> RecursiveMemo<N, R, F> {
    /// Wraps a continuation-passing `body` with an empty cache.
    #[inline]
    pub fn new(body: F) -> Self
    where
        F: Fn(&dyn Fn(N) -> R, N) -> R,
    {
        Self::with_hasher(body, DefaultHashBuilder::default())
    }

    /// Wraps a fallible continuation-passing `body`, caching `Ok` results only.
    ///
    /// Use [`try_call`](Self::try_call) to invoke it.
    #[inline]
    pub fn fallible<E>(body: F) -> Self
    where
        F: Fn(&dyn Fn(N) -> Result<R, E>, N) -> Result<R, E>,
    {
        Self::with_hasher(body, DefaultHashBuilder::default())
    }
}

impl<N, R, F, S> RecursiveMemo<N, R, F, S> {
    /// Wraps `body` with an empty cache hashed by `hasher`.
    #[inline]
    pub fn with_hasher(body: F, hasher: S) -> Self {
        Self {
            shared: Rc::new(Shared {
                body,
                store: RefCell::new(CacheStore::with_hasher(hasher)),
            }),
        }
    }

    /// Returns the number of distinct inputs cached so far.
    #[inline]
    pub fn cache_len(&self) -> usize {
        self.shared.store.borrow().len()
    }
}

impl<N, R, F, S> RecursiveMemo<N, R, F, S>
where
    N: Eq + Hash + Clone,
    R: Clone,
    S: BuildHasher,
{
    /// Returns `true` if a result for `input` is cached.
    #[inline]
    pub fn is_cached(&self, input: &N) -> bool {
        self.shared.store.borrow().contains(input)
    }

    /// Evaluates the body for `input` with full memoized self-reference.
    ///
    /// # Panics
    ///
    /// A panic in the body propagates unchanged. Results completed before
    /// the panic stay cached; the panicking input is not cached.
    #[inline]
    pub fn call(&self, input: N) -> R
    where
        F: Fn(&dyn Fn(N) -> R, N) -> R,
    {
        self.shared.call(input)
    }

    /// Evaluates a fallible body for `input`.
    ///
    /// # Errors
    ///
    /// Returns the first error produced anywhere in the recursive descent.
    /// Inputs whose evaluation failed are not cached.
    #[inline]
    pub fn try_call<E>(&self, input: N) -> Result<R, E>
    where
        F: Fn(&dyn Fn(N) -> Result<R, E>, N) -> Result<R, E>,
    {
        self.shared.try_call(input)
    }
}

impl<N, R, F, S> Clone for RecursiveMemo<N, R, F, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Rc::clone(&self.shared),
        }
    }
}

impl<N, R, F, S> fmt::Debug for RecursiveMemo<N, R, F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RecursiveMemo")
            .field("cached", &self.cache_len())
            .finish_non_exhaustive()
    }
}

/// Memoizes a function written in continuation-passing style.
///
/// `body(recurse, n)` computes the result for `n` and must use `recurse`,
/// never itself, for recursive subcalls. The returned function satisfies
/// `g(n) == body(g, n)` and evaluates `body` once per distinct `n`.
///
/// # Examples
///
/// ```rust
/// use memolambda::memo::memoize_recursive;
/// use std::cell::Cell;
///
/// let evaluations = Cell::new(0);
/// let fibonacci = memoize_recursive(|recurse: &dyn Fn(u64) -> u64, n: u64| {
///     evaluations.set(evaluations.get() + 1);
///     if n < 2 { n } else { recurse(n - 1) + recurse(n - 2) }
/// });
///
/// assert_eq!(fibonacci(10), 55);
/// assert_eq!(evaluations.get(), 11);
/// ```
pub fn memoize_recursive<N, R, F>(body: F) -> impl Fn(N) -> R
where
    N: Eq + Hash + Clone,
    R: Clone,
    F: Fn(&dyn Fn(N) -> R, N) -> R,
{
    let memo = RecursiveMemo::new(body);
    move |input| memo.call(input)
}

/// Memoizes a fallible function written in continuation-passing style.
///
/// Only `Ok` results are cached. An `Err` raised at any depth is returned
/// unchanged and the failing inputs are retried on the next call.
///
/// # Examples
///
/// ```rust
/// use memolambda::memo::try_memoize_recursive;
///
/// let factorial = try_memoize_recursive(|recurse: &dyn Fn(u64) -> Result<u64, String>, n: u64| {
///     if n == 0 {
///         Ok(1)
///     } else {
///         recurse(n - 1)?
///             .checked_mul(n)
///             .ok_or_else(|| format!("{n}! overflows u64"))
///     }
/// });
///
/// assert_eq!(factorial(20), Ok(2_432_902_008_176_640_000));
/// assert_eq!(factorial(21), Err("21! overflows u64".to_string()));
/// ```
pub fn try_memoize_recursive<N, R, E, F>(body: F) -> impl Fn(N) -> Result<R, E>
where
    N: Eq + Hash + Clone,
    R: Clone,
    F: Fn(&dyn Fn(N) -> Result<R, E>, N) -> Result<R, E>,
{
    let memo = RecursiveMemo::fallible(body);
    move |input| memo.try_call(input)
}
