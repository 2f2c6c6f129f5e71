//! The result cache shared by every memoized wrapper.
//!
//! A [`CacheStore`] maps argument keys to computed results. It never
//! evicts and never overwrites: the first value written for a key stays
//! until the store is dropped.

use std::collections::HashMap;
use std::collections::hash_map::{self, Entry};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use super::error::MissingEntryError;

/// The hasher used by cache stores unless another one is supplied.
///
/// - feature `fxhash`: `rustc_hash::FxBuildHasher`
/// - feature `ahash` (without `fxhash`): `ahash::RandomState`
/// - otherwise: the standard library's `RandomState`
#[cfg(feature = "fxhash")]
pub type DefaultHashBuilder = rustc_hash::FxBuildHasher;

/// The hasher used by cache stores unless another one is supplied.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type DefaultHashBuilder = ahash::RandomState;

/// The hasher used by cache stores unless another one is supplied.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type DefaultHashBuilder = std::collections::hash_map::RandomState;

/// An unbounded, insert-once mapping from argument keys to results.
///
/// Keys are compared structurally through their `Eq` and `Hash`
/// implementations, so a tuple key `(a, b)` matches any other tuple whose
/// components compare equal. A type that is not `Eq + Hash` cannot be used
/// as a key:
///
/// ```compile_fail
/// use memolambda::memo::CacheStore;
///
/// let mut store = CacheStore::new();
/// store.put(1.5_f64, "not hashable");
/// ```
///
/// # Type Parameters
///
/// * `K` - The argument key, usually a tuple of the wrapped function's arguments
/// * `V` - The cached result
/// * `S` - The hasher builder (defaults to [`DefaultHashBuilder`])
///
/// # Examples
///
/// ```rust
/// use memolambda::memo::CacheStore;
///
/// let mut store = CacheStore::new();
/// assert!(store.put((2, 3), 5));
/// assert!(!store.put((2, 3), 6)); // first value stays
///
/// assert!(store.contains(&(2, 3)));
/// assert_eq!(*store.get(&(2, 3)), 5);
/// assert_eq!(store.lookup(&(1, 1)), None);
/// ```
#[derive(Clone)]
pub struct CacheStore<K, V, S = DefaultHashBuilder> {
    entries: HashMap<K, V, S>,
}

impl<K, V> CacheStore<K, V, DefaultHashBuilder> {
    /// Creates an empty store using the default hasher.
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(DefaultHashBuilder::default())
    }

    /// Creates an empty store with room for at least `capacity` entries.
    ///
    /// Capacity only affects allocation; the store still starts empty.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, DefaultHashBuilder::default())
    }
}

impl<K, V, S> CacheStore<K, V, S> {
    /// Creates an empty store that hashes keys with `hasher`.
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            entries: HashMap::with_hasher(hasher),
        }
    }

    /// Creates an empty store with the given capacity and hasher.
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            entries: HashMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    /// Returns the number of cached entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been cached yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the cached entries in arbitrary order.
    #[inline]
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }
}

impl<K, V, S> CacheStore<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Returns `true` if an entry exists for `key`.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the value cached for `key`.
    ///
    /// Only call this after [`contains`](Self::contains) returned `true`.
    ///
    /// # Panics
    ///
    /// Panics if no entry exists for `key`. Use [`lookup`](Self::lookup) or
    /// [`try_get`](Self::try_get) when absence is expected.
    pub fn get(&self, key: &K) -> &V {
        match self.entries.get(key) {
            Some(value) => value,
            None => panic!("CacheStore::get called for a key with no entry"),
        }
    }

    /// Returns the value cached for `key`, or [`MissingEntryError`].
    ///
    /// # Errors
    ///
    /// Returns [`MissingEntryError`] if no entry exists for `key`.
    #[inline]
    pub fn try_get(&self, key: &K) -> Result<&V, MissingEntryError> {
        self.entries.get(key).ok_or(MissingEntryError)
    }

    /// Returns the value cached for `key`, if any.
    #[inline]
    pub fn lookup(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Inserts `value` for `key` unless an entry already exists.
    ///
    /// Returns `true` if the entry was inserted. An existing entry is left
    /// untouched and `value` is dropped.
    pub fn put(&mut self, key: K, value: V) -> bool {
        match self.entries.entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(value);
                true
            }
        }
    }

    /// Returns the value for `key`, computing and inserting it on a miss.
    ///
    /// `compute` runs at most once and only when `key` is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use memolambda::memo::CacheStore;
    ///
    /// let mut store = CacheStore::new();
    /// assert_eq!(*store.get_or_insert_with(4, |key| key * key), 16);
    /// assert_eq!(*store.get_or_insert_with(4, |_| unreachable!()), 16);
    /// ```
    pub fn get_or_insert_with<C>(&mut self, key: K, compute: C) -> &V
    where
        C: FnOnce(&K) -> V,
    {
        self.entries.entry(key).or_insert_with_key(compute)
    }
}

impl<K, V, S: Default> Default for CacheStore<K, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for CacheStore<K, V, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<'a, K, V, S> IntoIterator for &'a CacheStore<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
