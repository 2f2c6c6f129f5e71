//! Generic memoization.
//!
//! This module wraps pure functions in a result cache keyed by their
//! arguments. Every wrapper owns exactly one [`CacheStore`], created empty
//! when the wrapper is built and dropped with it.
//!
//! # Overview
//!
//! - [`memoize`], [`memoize_binary`], [`memoize_ternary`]: fixed-arity functions
//! - [`try_memoize`]: functions returning `Result`, caching only `Ok` values
//! - [`memoize_recursive`], [`try_memoize_recursive`]: functions written in
//!   continuation-passing style, whose recursive subcalls share the cache
//! - `memoize_sync` and friends (feature `sync`): thread-safe variants
//!
//! # Contract
//!
//! The wrapped function must be pure: equal arguments always produce equal
//! results. The first computed value for a key is authoritative and is never
//! replaced. Memoizing a non-deterministic function returns whichever value
//! was computed first.
//!
//! The cache is unbounded. Entries live as long as the wrapper.
//!
//! # Examples
//!
//! ```rust
//! use memolambda::memo::memoize;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let square = memoize(|x: i64| {
//!     calls.set(calls.get() + 1);
//!     x * x
//! });
//!
//! assert_eq!(square(12), 144);
//! assert_eq!(square(12), 144);
//! assert_eq!(calls.get(), 1);
//! ```
//!
//! ## Recursive memoization
//!
//! ```rust
//! use memolambda::memo::memoize_recursive;
//!
//! fn fibonacci_step(recurse: &dyn Fn(u64) -> u64, n: u64) -> u64 {
//!     if n < 2 { n } else { recurse(n - 1) + recurse(n - 2) }
//! }
//!
//! let fibonacci = memoize_recursive(fibonacci_step);
//! assert_eq!(fibonacci(10), 55);
//! ```
//!
//! # Laws
//!
//! - **Transparency**: `memoize(f)(a) == f(a)`
//! - **Collapse**: calling `memoize(f)` twice with equal arguments runs `f` once
//! - **Sharing**: `memoize_recursive(body)` runs `body` once per distinct input

mod error;
mod memoize;
mod recursive;
mod store;
#[cfg(feature = "sync")]
mod lock;
#[cfg(feature = "sync")]
mod sync;

pub use error::MissingEntryError;
pub use memoize::{
    Memo, memoize, memoize_binary, memoize_ternary, memoize_with_hasher, try_memoize,
};
pub use recursive::{RecursiveMemo, memoize_recursive, try_memoize_recursive};
pub use store::{CacheStore, DefaultHashBuilder};
#[cfg(feature = "sync")]
pub use sync::{
    SyncMemo, SyncRecursiveMemo, memoize_binary_sync, memoize_recursive_sync, memoize_sync,
};
