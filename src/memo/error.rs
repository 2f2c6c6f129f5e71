//! Error types for the cache store.

use std::fmt;

/// Error returned by [`CacheStore::try_get`](super::CacheStore::try_get) when
/// no entry exists for the requested key.
///
/// Reading a missing entry is a usage error: check
/// [`contains`](super::CacheStore::contains) first, or use
/// [`lookup`](super::CacheStore::lookup).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingEntryError;

impl fmt::Display for MissingEntryError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "CacheStore: no entry exists for the requested key")
    }
}

impl std::error::Error for MissingEntryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_store() {
        assert_eq!(
            MissingEntryError.to_string(),
            "CacheStore: no entry exists for the requested key"
        );
    }
}
