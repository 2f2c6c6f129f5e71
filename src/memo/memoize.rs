//! Memoization of fixed-arity functions.
//!
//! [`Memo`] owns a function and the [`CacheStore`] of its results. The
//! free functions ([`memoize`], [`memoize_binary`], ...) build a `Memo` and
//! hand back a plain closure over it.
//!
//! Functions of several arguments are cached under the tuple of their
//! arguments, so `memoize_binary(f)` keys its store by `(A, B)`.

use std::cell::RefCell;
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::store::{CacheStore, DefaultHashBuilder};

/// A function paired with the cache of its results.
///
/// On each call the store is consulted first; on a miss the function runs
/// and its result is stored. The store is never borrowed while the function
/// runs, so the function may panic or call other memoized functions freely.
///
/// # Thread Safety
///
/// `Memo` is not `Sync`. Use `SyncMemo` (feature `sync`) to share one cache
/// between threads.
///
/// # Type Parameters
///
/// * `A` - The argument key (a tuple for several arguments)
/// * `R` - The cached result (for fallible functions, the `Ok` type)
/// * `F` - The wrapped function
/// * `S` - The hasher builder of the store
///
/// # Examples
///
/// ```rust
/// use memolambda::memo::Memo;
///
/// let length = Memo::new(|text: String| text.chars().count());
///
/// assert_eq!(length.call("héllo".to_string()), 5);
/// assert!(length.is_cached(&"héllo".to_string()));
/// assert_eq!(length.cache_len(), 1);
/// ```
pub struct Memo<A, R, F, S = DefaultHashBuilder> {
    function: F,
    store: RefCell<CacheStore<A, R, S>>,
}

impl<A, R, F> Memo<A, R, F> {
    /// Wraps `function` with an empty cache.
    #[inline]
    pub fn new(function: F) -> Self
    where
        F: Fn(A) -> R,
    {
        Self::with_hasher(function, DefaultHashBuilder::default())
    }

    /// Wraps a fallible `function`, caching only its `Ok` results.
    ///
    /// Use [`try_call`](Self::try_call) to invoke it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use memolambda::memo::Memo;
    ///
    /// let parse = Memo::fallible(|text: &'static str| text.parse::<u8>());
    ///
    /// assert_eq!(parse.try_call("42"), Ok(42));
    /// assert!(parse.try_call("four").is_err());
    /// assert_eq!(parse.cache_len(), 1);
    /// ```
    #[inline]
    pub fn fallible<E>(function: F) -> Self
    where
        F: Fn(A) -> Result<R, E>,
    {
        Self::with_hasher(function, DefaultHashBuilder::default())
    }
}

impl<A, R, F, S> Memo<A, R, F, S> {
    /// Wraps `function` with an empty cache hashed by `hasher`.
    #[inline]
    pub fn with_hasher(function: F, hasher: S) -> Self {
        Self {
            function,
            store: RefCell::new(CacheStore::with_hasher(hasher)),
        }
    }

    /// Returns the number of distinct argument keys cached so far.
    #[inline]
    pub fn cache_len(&self) -> usize {
        self.store.borrow().len()
    }
}

impl<A, R, F, S> Memo<A, R, F, S>
where
    A: Eq + Hash + Clone,
    R: Clone,
    S: BuildHasher,
{
    /// Returns `true` if a result for `argument` is cached.
    #[inline]
    pub fn is_cached(&self, argument: &A) -> bool {
        self.store.borrow().contains(argument)
    }

    fn cached(&self, argument: &A) -> Option<R> {
        self.store.borrow().lookup(argument).cloned()
    }

    fn remember(&self, argument: A, value: R) {
        let mut store = self.store.borrow_mut();
        store.put(argument, value);
        tracing::trace!(entries = store.len(), "memo cache insert");
    }

    /// Returns `function(argument)`, computing it at most once per key.
    ///
    /// # Panics
    ///
    /// A panic in the wrapped function propagates unchanged and nothing is
    /// cached for `argument`.
    pub fn call(&self, argument: A) -> R
    where
        F: Fn(A) -> R,
    {
        if let Some(value) = self.cached(&argument) {
            return value;
        }
        tracing::trace!("memo cache miss");
        let value = (self.function)(argument.clone());
        self.remember(argument, value.clone());
        value
    }

    /// Returns `function(argument)` for a fallible function, caching `Ok` only.
    ///
    /// # Errors
    ///
    /// Returns the wrapped function's error unchanged. Errors are not cached:
    /// the next call with the same argument runs the function again.
    pub fn try_call<E>(&self, argument: A) -> Result<R, E>
    where
        F: Fn(A) -> Result<R, E>,
    {
        if let Some(value) = self.cached(&argument) {
            return Ok(value);
        }
        tracing::trace!("memo cache miss");
        match (self.function)(argument.clone()) {
            Ok(value) => {
                self.remember(argument, value.clone());
                Ok(value)
            }
            Err(error) => {
                tracing::debug!("memoized computation failed; result not cached");
                Err(error)
            }
        }
    }
}

impl<A, R, F, S> fmt::Debug for Memo<A, R, F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memo")
            .field("cached", &self.cache_len())
            .finish_non_exhaustive()
    }
}

/// Memoizes a unary function.
///
/// For a function of several arguments, pass a function taking a tuple, or
/// use [`memoize_binary`] / [`memoize_ternary`].
///
/// # Examples
///
/// ```rust
/// use memolambda::memo::memoize;
///
/// let square = memoize(|x: i32| x * x);
/// assert_eq!(square(2), 4);
/// assert_eq!(square(3), 9);
/// ```
pub fn memoize<A, R, F>(function: F) -> impl Fn(A) -> R
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R,
{
    let memo = Memo::new(function);
    move |argument| memo.call(argument)
}

/// Memoizes a unary function using a caller-supplied hasher.
///
/// # Examples
///
/// ```rust
/// use memolambda::memo::memoize_with_hasher;
/// use std::collections::hash_map::RandomState;
///
/// let negate = memoize_with_hasher(|x: i64| -x, RandomState::new());
/// assert_eq!(negate(5), -5);
/// ```
pub fn memoize_with_hasher<A, R, F, S>(function: F, hasher: S) -> impl Fn(A) -> R
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> R,
    S: BuildHasher,
{
    let memo = Memo::with_hasher(function, hasher);
    move |argument| memo.call(argument)
}

/// Memoizes a binary function, keyed by the argument pair.
///
/// # Examples
///
/// ```rust
/// use memolambda::memo::memoize_binary;
///
/// let add = memoize_binary(|x: i32, y: i32| x + y);
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(2, 3), 5);
/// ```
pub fn memoize_binary<A, B, R, F>(function: F) -> impl Fn(A, B) -> R
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A, B) -> R,
{
    let memo = Memo::new(move |(first, second): (A, B)| function(first, second));
    move |first, second| memo.call((first, second))
}

/// Memoizes a ternary function, keyed by the argument triple.
///
/// # Examples
///
/// ```rust
/// use memolambda::memo::memoize_ternary;
///
/// let clamp = memoize_ternary(|value: i32, low: i32, high: i32| value.clamp(low, high));
/// assert_eq!(clamp(15, 0, 10), 10);
/// ```
pub fn memoize_ternary<A, B, C, R, F>(function: F) -> impl Fn(A, B, C) -> R
where
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A, B, C) -> R,
{
    let memo = Memo::new(move |(first, second, third): (A, B, C)| function(first, second, third));
    move |first, second, third| memo.call((first, second, third))
}

/// Memoizes a fallible unary function.
///
/// `Ok` results are cached. An `Err` is returned unchanged and the next call
/// with the same argument retries the computation.
///
/// # Examples
///
/// ```rust
/// use memolambda::memo::try_memoize;
///
/// let checked_half = try_memoize(|x: u32| {
///     if x % 2 == 0 { Ok(x / 2) } else { Err(format!("{x} is odd")) }
/// });
///
/// assert_eq!(checked_half(10), Ok(5));
/// assert_eq!(checked_half(7), Err("7 is odd".to_string()));
/// ```
pub fn try_memoize<A, R, E, F>(function: F) -> impl Fn(A) -> Result<R, E>
where
    A: Eq + Hash + Clone,
    R: Clone,
    F: Fn(A) -> Result<R, E>,
{
    let memo = Memo::fallible(function);
    move |argument| memo.try_call(argument)
}
