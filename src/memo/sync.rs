//! Thread-safe memoization.
//!
//! [`SyncMemo`] and [`SyncRecursiveMemo`] keep their store behind a mutex.
//! Each lookup and each insertion is one critical section; the lock is
//! never held while the wrapped function runs, so independent keys are
//! computed in parallel and recursive bodies can re-enter the store.
//!
//! Two threads that miss the same key at the same time may both run the
//! function. The first result written wins and both callers receive it.
//! For a pure function the two results are equal anyway.
//!
//! # Examples
//!
#![cfg_attr(not(feature = "loom"), doc = "```rust")]
#![cfg_attr(feature = "loom", doc = "```ignore")]
//! use memolambda::memo::memoize_sync;
//! use std::thread;
//!
//! let cube = memoize_sync(|x: u64| x * x * x);
//!
//! thread::scope(|scope| {
//!     for _ in 0..4 {
//!         scope.spawn(|| assert_eq!(cube(7), 343));
//!     }
//! });
//! ```

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::sync::Arc;

use super::lock::Mutex;
use super::store::{CacheStore, DefaultHashBuilder};

/// A function paired with a mutex-guarded result cache.
///
/// `SyncMemo` is `Send + Sync` whenever its argument, result and function
/// types allow it, so one instance can serve many threads by reference or
/// through an `Arc`.
///
/// # Examples
///
#[cfg_attr(not(feature = "loom"), doc = "```rust")]
#[cfg_attr(feature = "loom", doc = "```ignore")]
/// use memolambda::memo::SyncMemo;
/// use std::sync::Arc;
/// use std::thread;
///
/// let memo = Arc::new(SyncMemo::new(|x: i32| x.pow(2)));
///
/// let handles: Vec<_> = (0..4)
///     .map(|index| {
///         let memo = Arc::clone(&memo);
///         thread::spawn(move || memo.call(index % 2))
///     })
///     .collect();
///
/// for handle in handles {
///     assert!(handle.join().unwrap() <= 1);
/// }
/// assert_eq!(memo.cache_len(), 2);
/// ```
pub struct SyncMemo<A, R, F, S = DefaultHashBuilder> {
    function: F,
    store: Mutex<CacheStore<A, R, S>>,
}

impl<A, R, F> SyncMemo<A, R, F> {
    /// Wraps `function` with an empty cache.
    #[inline]
    pub fn new(function: F) -> Self
    where
        F: Fn(A) -> R,
    {
        Self::with_hasher(function, DefaultHashBuilder::default())
    }
}

impl<A, R, F, S> SyncMemo<A, R, F, S> {
    /// Wraps `function` with an empty cache hashed by `hasher`.
    #[inline]
    pub fn with_hasher(function: F, hasher: S) -> Self {
        Self {
            function,
            store: Mutex::new(CacheStore::with_hasher(hasher)),
        }
    }

    /// Returns the number of distinct argument keys cached so far.
    #[inline]
    pub fn cache_len(&self) -> usize {
        self.store.lock().len()
    }
}

impl<A, R, F, S> SyncMemo<A, R, F, S>
where
    A: Eq + Hash + Clone,
    R: Clone,
    S: BuildHasher,
{
    /// Returns `true` if a result for `argument` is cached.
    #[inline]
    pub fn is_cached(&self, argument: &A) -> bool {
        self.store.lock().contains(argument)
    }

    /// Returns `function(argument)`, served from the cache when possible.
    ///
    /// # Panics
    ///
    /// A panic in the wrapped function propagates unchanged and nothing is
    /// cached for `argument`.
    pub fn call(&self, argument: A) -> R
    where
        F: Fn(A) -> R,
    {
        if let Some(value) = cached(&self.store, &argument) {
            return value;
        }
        tracing::trace!("sync memo cache miss");
        let value = (self.function)(argument.clone());
        remember(&self.store, argument, value)
    }
}

impl<A, R, F, S> fmt::Debug for SyncMemo<A, R, F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SyncMemo")
            .field("cached", &self.cache_len())
            .finish_non_exhaustive()
    }
}

fn cached<K, V, S>(store: &Mutex<CacheStore<K, V, S>>, key: &K) -> Option<V>
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    store.lock().lookup(key).cloned()
}

/// Stores `value` unless another thread got there first, and returns the
/// value that ended up in the store.
fn remember<K, V, S>(store: &Mutex<CacheStore<K, V, S>>, key: K, value: V) -> V
where
    K: Eq + Hash,
    V: Clone,
    S: BuildHasher,
{
    let mut store = store.lock();
    let stored = store.get_or_insert_with(key, |_| value).clone();
    tracing::trace!(entries = store.len(), "sync memo cache insert");
    stored
}

struct SyncShared<N, R, F, S> {
    body: F,
    store: Mutex<CacheStore<N, R, S>>,
}

impl<N, R, F, S> SyncShared<N, R, F, S>
where
    N: Eq + Hash + Clone,
    R: Clone,
    S: BuildHasher,
    F: Fn(&dyn Fn(N) -> R, N) -> R,
{
    fn call(&self, input: N) -> R {
        if let Some(value) = cached(&self.store, &input) {
            return value;
        }
        let recurse = |next: N| self.call(next);
        let value = (self.body)(&recurse, input.clone());
        remember(&self.store, input, value)
    }
}

/// A continuation-passing body sharing one mutex-guarded cache across
/// threads.
///
/// Clones share the same store through an `Arc`.
///
/// # Examples
///
#[cfg_attr(not(feature = "loom"), doc = "```rust")]
#[cfg_attr(feature = "loom", doc = "```ignore")]
/// use memolambda::memo::SyncRecursiveMemo;
/// use std::thread;
///
/// let fibonacci = SyncRecursiveMemo::new(|recurse: &dyn Fn(u64) -> u64, n: u64| {
///     if n < 2 { n } else { recurse(n - 1) + recurse(n - 2) }
/// });
///
/// let worker = fibonacci.clone();
/// let handle = thread::spawn(move || worker.call(50));
///
/// assert_eq!(fibonacci.call(40), 102_334_155);
/// assert_eq!(handle.join().unwrap(), 12_586_269_025);
/// assert_eq!(fibonacci.cache_len(), 51);
/// ```
pub struct SyncRecursiveMemo<N, R, F, S = DefaultHashBuilder> {
    shared: Arc<SyncShared<N, R, F, S>>,
}

impl<N, R, F> SyncRecursiveMemo<N, R, F> {
    /// Wraps a continuation-passing `body` with an empty cache.
    #[inline]
    pub fn new(body: F) -> Self
    where
        F: Fn(&dyn Fn(N) -> R, N) -> R,
    {
        Self::with_hasher(body, DefaultHashBuilder::default())
    }
}

impl<N, R, F, S> SyncRecursiveMemo<N, R, F, S> {
    /// Wraps `body` with an empty cache hashed by `hasher`.
    #[inline]
    pub fn with_hasher(body: F, hasher: S) -> Self {
        Self {
            shared: Arc::new(SyncShared {
                body,
                store: Mutex::new(CacheStore::with_hasher(hasher)),
            }),
        }
    }

    /// Returns the number of distinct inputs cached so far.
    #[inline]
    pub fn cache_len(&self) -> usize {
        self.shared.store.lock().len()
    }
}

impl<N, R, F, S> SyncRecursiveMemo<N, R, F, S>
where
    N: Eq + Hash + Clone,
    R: Clone,
    S: BuildHasher,
    F: Fn(&dyn Fn(N) -> R, N) -> R,
{
    /// Evaluates the body for `input` with full memoized self-reference.
    #[inline]
    pub fn call(&self, input: N) -> R {
        self.shared.call(input)
    }

    /// Returns `true` if a result for `input` is cached.
    #[inline]
    pub fn is_cached(&self, input: &N) -> bool {
        self.shared.store.lock().contains(input)
    }
}

impl<N, R, F, S> Clone for SyncRecursiveMemo<N, R, F, S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<N, R, F, S> fmt::Debug for SyncRecursiveMemo<N, R, F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SyncRecursiveMemo")
            .field("cached", &self.cache_len())
            .finish_non_exhaustive()
    }
}

/// Thread-safe [`memoize`](super::memoize).
pub fn memoize_sync<A, R, F>(function: F) -> impl Fn(A) -> R + Send + Sync
where
    A: Eq + Hash + Clone + Send,
    R: Clone + Send,
    F: Fn(A) -> R + Send + Sync,
{
    let memo = SyncMemo::new(function);
    move |argument| memo.call(argument)
}

/// Thread-safe [`memoize_binary`](super::memoize_binary).
///
/// # Examples
///
#[cfg_attr(not(feature = "loom"), doc = "```rust")]
#[cfg_attr(feature = "loom", doc = "```ignore")]
/// use memolambda::memo::memoize_binary_sync;
///
/// let gcd = memoize_binary_sync(|mut a: u64, mut b: u64| {
///     while b != 0 {
///         (a, b) = (b, a % b);
///     }
///     a
/// });
/// assert_eq!(gcd(84, 36), 12);
/// ```
pub fn memoize_binary_sync<A, B, R, F>(function: F) -> impl Fn(A, B) -> R + Send + Sync
where
    A: Eq + Hash + Clone + Send,
    B: Eq + Hash + Clone + Send,
    R: Clone + Send,
    F: Fn(A, B) -> R + Send + Sync,
{
    let memo = SyncMemo::new(move |(first, second): (A, B)| function(first, second));
    move |first, second| memo.call((first, second))
}

/// Thread-safe [`memoize_recursive`](super::memoize_recursive).
///
/// The returned function is `Clone`; clones share one store.
pub fn memoize_recursive_sync<N, R, F>(body: F) -> impl Fn(N) -> R + Clone + Send + Sync
where
    N: Eq + Hash + Clone + Send,
    R: Clone + Send,
    F: Fn(&dyn Fn(N) -> R, N) -> R + Send + Sync,
{
    let memo = SyncRecursiveMemo::new(body);
    move |input| memo.call(input)
}

#[cfg(not(feature = "loom"))]
mod assertions {
    use crate::memo::{Memo, RecursiveMemo, SyncMemo, SyncRecursiveMemo};

    type Unary = fn(u64) -> u64;
    type Step = fn(&dyn Fn(u64) -> u64, u64) -> u64;

    static_assertions::assert_impl_all!(SyncMemo<u64, u64, Unary>: Send, Sync);
    static_assertions::assert_impl_all!(SyncRecursiveMemo<u64, u64, Step>: Send, Sync, Clone);
    static_assertions::assert_not_impl_any!(Memo<u64, u64, Unary>: Sync);
    static_assertions::assert_not_impl_any!(RecursiveMemo<u64, u64, Step>: Send, Sync);
}
