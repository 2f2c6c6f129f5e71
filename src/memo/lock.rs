//! The mutex guarding shared cache stores.
//!
//! `parking_lot::Mutex` in normal builds. With the `loom` feature the
//! store is guarded by `loom`'s mutex instead so that the locking
//! discipline can be explored by the model checker.

#[cfg(not(feature = "loom"))]
pub(crate) use parking_lot::Mutex;

#[cfg(feature = "loom")]
pub(crate) use model::Mutex;

#[cfg(feature = "loom")]
mod model {
    use std::sync::PoisonError;

    /// `loom::sync::Mutex` with the `parking_lot` locking signature.
    pub(crate) struct Mutex<T>(loom::sync::Mutex<T>);

    impl<T> Mutex<T> {
        pub(crate) fn new(value: T) -> Self {
            Self(loom::sync::Mutex::new(value))
        }

        // Nothing in the store can panic mid-update, so a poisoned lock still
        // guards a consistent map.
        pub(crate) fn lock(&self) -> loom::sync::MutexGuard<'_, T> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner)
        }
    }
}
