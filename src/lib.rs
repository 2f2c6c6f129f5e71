//! # memolambda
//!
//! Generic memoization and small functional combinators for Rust.
//!
//! ## Overview
//!
//! - **Memoization**: [`memoize`](memo::memoize), [`memoize_binary`](memo::memoize_binary),
//!   [`memoize_ternary`](memo::memoize_ternary) and [`try_memoize`](memo::try_memoize)
//!   wrap a pure function in a result cache keyed by its arguments.
//! - **Recursive memoization**: [`memoize_recursive`](memo::memoize_recursive) memoizes
//!   a function written in continuation-passing style, so every recursive subcall
//!   goes through one shared cache.
//! - **Thread-safe variants**: `memoize_sync` and friends guard the cache with a mutex.
//! - **Combinators**: `compose!`, `flip`, argument binding, logical predicate
//!   combinators and thunks.
//!
//! ## Feature Flags
//!
//! - `memo`: Single-threaded memoization and the cache store
//! - `sync`: Thread-safe memoization (`parking_lot` mutex)
//! - `combinator`: Function combinators
//! - `fxhash`: Use `rustc_hash::FxBuildHasher` as the default cache hasher
//! - `ahash`: Use `ahash::RandomState` as the default cache hasher
//! - `loom`: Swap the sync mutex for `loom`'s model-checked one
//! - `full`: Enable all features except the hasher and `loom` switches
//!
//! ## Example
//!
//! ```rust
//! use memolambda::prelude::*;
//!
//! let fibonacci = memoize_recursive(|recurse: &dyn Fn(u64) -> u64, n: u64| {
//!     if n < 2 { n } else { recurse(n - 1) + recurse(n - 2) }
//! });
//! assert_eq!(fibonacci(90), 2_880_067_194_370_816_120);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use memolambda::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "memo")]
    pub use crate::memo::*;

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;
}

#[cfg(feature = "memo")]
pub mod memo;

#[cfg(feature = "combinator")]
pub mod combinator;
