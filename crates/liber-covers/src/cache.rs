//! # Cover Cache
//!
//! Process-wide cache of cover lookup outcomes, keyed by ISBN.
//!
//! The cache is an explicitly constructed object injected into the
//! resolver, not hidden global state: tests substitute their own
//! implementation, and whoever builds the catalog service decides the
//! cache's lifetime.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Cache of cover lookup outcomes.
///
/// ## Semantics
/// The stored value is the full outcome of a completed lookup:
/// - `Some(url)` - the provider has a cover at `url`
/// - `None` - the provider was asked and has no cover (or failed)
///
/// `get` wraps that in another Option: `None` means "never looked up",
/// which is the only case that triggers a provider probe.
pub trait CoverCache: Send + Sync {
    /// Returns the cached outcome for an ISBN, if a lookup has completed.
    fn get(&self, isbn: &str) -> Option<Option<String>>;

    /// Stores a lookup outcome. Racing writers for the same ISBN are fine:
    /// both compute the same value, last write wins.
    fn put(&self, isbn: &str, cover: Option<String>);
}

/// In-memory cover cache.
///
/// Unbounded and never evicted: the catalog is small, so the entry count
/// stays within the number of distinct ISBNs ever listed. A known scaling
/// limit, acceptable at this catalog's size.
#[derive(Debug, Default)]
pub struct MemoryCoverCache {
    entries: Mutex<HashMap<String, Option<String>>>,
}

impl MemoryCoverCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        MemoryCoverCache::default()
    }

    /// Number of completed lookups held.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// True if no lookup has completed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CoverCache for MemoryCoverCache {
    fn get(&self, isbn: &str) -> Option<Option<String>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(isbn)
            .cloned()
    }

    fn put(&self, isbn: &str, cover: Option<String>) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(isbn.to_string(), cover);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_distinguishes_missing_from_negative() {
        let cache = MemoryCoverCache::new();

        // Never looked up
        assert_eq!(cache.get("9780451524935"), None);

        // Looked up, no cover
        cache.put("9780451524935", None);
        assert_eq!(cache.get("9780451524935"), Some(None));

        // Looked up, cover found
        cache.put("9780553293357", Some("https://example.test/x.jpg".to_string()));
        assert_eq!(
            cache.get("9780553293357"),
            Some(Some("https://example.test/x.jpg".to_string()))
        );
    }

    #[test]
    fn test_put_overwrites() {
        let cache = MemoryCoverCache::new();
        cache.put("isbn", None);
        cache.put("isbn", Some("url".to_string()));

        assert_eq!(cache.get("isbn"), Some(Some("url".to_string())));
        assert_eq!(cache.len(), 1);
    }
}
