//! Function combinators.
//!
//! Small, stateless building blocks used around memoized functions:
//!
//! - [`compose!`]: Compose functions right-to-left
//! - [`identity`], [`constant`], [`flip`], [`forward_apply`], [`apply_to_pair`]
//! - [`bind_unary`], [`bind_1st_of_2`], [`bind_2nd_of_2`], [`bind_1st_and_2nd_of_3`]:
//!   fix some arguments of a function
//! - [`logical_not`], [`logical_and`], [`logical_or`], [`logical_xor`]:
//!   combine predicates
//! - [`lazy`], [`fixed`]: nullary thunks
//!
//! # Examples
//!
//! ```rust
//! use memolambda::combinator::{bind_2nd_of_2, flip, logical_or};
//! use memolambda::compose;
//!
//! let square = |x: i32| x * x;
//! assert_eq!(compose!(square, square, square)(2), 256);
//!
//! let halve = bind_2nd_of_2(|x: i32, y: i32| x / y, 2);
//! assert_eq!(halve(6), 3);
//!
//! let subtract = |a: i32, b: i32| a - b;
//! assert_eq!(flip(subtract)(1, 10), 9);
//!
//! let small_or_even = logical_or(|x: &i32| *x < 3, |x: &i32| x % 2 == 0);
//! assert!(small_or_even(&8));
//! assert!(!small_or_even(&7));
//! ```
//!
//! # Laws
//!
//! - **Composition associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Double flip identity**: `flip(flip(f)) == f`
//! - **Double negation**: `logical_not(logical_not(p)) == p`

mod bind;
mod function;
mod logical;
mod thunk;

pub use bind::{bind_1st_and_2nd_of_3, bind_1st_of_2, bind_2nd_of_2, bind_unary};
pub use function::{apply_to_pair, constant, flip, forward_apply, identity};
pub use logical::{logical_and, logical_not, logical_or, logical_xor};
pub use thunk::{fixed, lazy};

// Already at the crate root via #[macro_export]
pub use crate::compose;
