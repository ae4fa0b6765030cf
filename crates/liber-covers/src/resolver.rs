//! # Cover Resolver
//!
//! Ties the cache and the fetcher together behind a single `resolve` call.
//!
//! ## Idempotence
//! For any ISBN, the provider is contacted at most once per process: the
//! first call populates the cache with the outcome (positive or negative),
//! every later call answers from the cache. Concurrent first calls for the
//! same ISBN may both probe; they compute the same value, so last-write-wins
//! is harmless.

use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::cache::{CoverCache, MemoryCoverCache};
use crate::fetch::{CoverFetcher, HttpCoverFetcher};

/// Default provider base path; `<base>/<isbn>-M.jpg` yields a medium cover.
const DEFAULT_BASE_URL: &str = "https://covers.openlibrary.org/b/isbn";

/// Default per-probe timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(4);

// =============================================================================
// Configuration
// =============================================================================

/// Cover resolver configuration.
///
/// ## Example
/// ```rust,ignore
/// let resolver = CoverResolver::new(
///     CoverConfig::new().timeout(Duration::from_secs(2)),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct CoverConfig {
    /// Provider base path the ISBN is appended to.
    pub base_url: String,

    /// Per-probe request timeout.
    /// Default: 4 seconds
    pub timeout: Duration,
}

impl CoverConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        CoverConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the provider base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-probe timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for CoverConfig {
    fn default() -> Self {
        CoverConfig::new()
    }
}

// =============================================================================
// Resolver
// =============================================================================

/// Resolves ISBNs to cover-image URLs.
///
/// Cloning shares the cache and the fetcher, so every clone answers from
/// the same process-wide lookup history.
#[derive(Clone)]
pub struct CoverResolver {
    fetcher: Arc<dyn CoverFetcher>,
    cache: Arc<dyn CoverCache>,
    base_url: String,
}

impl CoverResolver {
    /// Creates a resolver with the HTTP fetcher and an in-memory cache.
    pub fn new(config: CoverConfig) -> Self {
        CoverResolver::with_parts(
            Arc::new(HttpCoverFetcher::new(config.timeout)),
            Arc::new(MemoryCoverCache::new()),
            config.base_url,
        )
    }

    /// Creates a resolver from explicit parts.
    ///
    /// ## Usage
    /// Tests inject counting fakes here; production wiring can share one
    /// cache between resolvers if it ever needs to.
    pub fn with_parts(
        fetcher: Arc<dyn CoverFetcher>,
        cache: Arc<dyn CoverCache>,
        base_url: impl Into<String>,
    ) -> Self {
        CoverResolver {
            fetcher,
            cache,
            base_url: base_url.into(),
        }
    }

    /// The templated provider URL for an ISBN.
    pub fn cover_url(&self, isbn: &str) -> String {
        format!("{}/{}-M.jpg", self.base_url.trim_end_matches('/'), isbn)
    }

    /// Resolves an ISBN to a displayable cover URL.
    ///
    /// ## Returns
    /// * `Some(url)` - the provider has a cover for this ISBN
    /// * `None` - blank ISBN, no cover, or the provider was unreachable
    ///
    /// Blank/absent ISBNs return immediately without consulting or
    /// populating the cache. This method never fails.
    pub async fn resolve(&self, isbn: Option<&str>) -> Option<String> {
        let isbn = isbn.map(str::trim).filter(|s| !s.is_empty())?;

        if let Some(cached) = self.cache.get(isbn) {
            debug!(isbn = %isbn, hit = cached.is_some(), "cover cache hit");
            return cached;
        }

        let url = self.cover_url(isbn);
        let cover = if self.fetcher.cover_exists(&url).await {
            Some(url)
        } else {
            debug!(isbn = %isbn, "no cover available");
            None
        };

        self.cache.put(isbn, cover.clone());
        cover
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Fetcher fake that counts probes and answers a fixed outcome.
    struct CountingFetcher {
        exists: bool,
        calls: AtomicUsize,
    }

    impl CountingFetcher {
        fn new(exists: bool) -> Arc<Self> {
            Arc::new(CountingFetcher {
                exists,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CoverFetcher for CountingFetcher {
        async fn cover_exists(&self, _url: &str) -> bool {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.exists
        }
    }

    fn resolver(
        fetcher: Arc<CountingFetcher>,
        cache: Arc<MemoryCoverCache>,
    ) -> CoverResolver {
        CoverResolver::with_parts(fetcher, cache, "https://covers.test/b/isbn")
    }

    #[tokio::test]
    async fn test_second_resolve_hits_cache_not_network() {
        let fetcher = CountingFetcher::new(true);
        let cache = Arc::new(MemoryCoverCache::new());
        let resolver = resolver(fetcher.clone(), cache);

        let first = resolver.resolve(Some("9780451524935")).await;
        let second = resolver.resolve(Some("9780451524935")).await;

        assert_eq!(
            first.as_deref(),
            Some("https://covers.test/b/isbn/9780451524935-M.jpg")
        );
        assert_eq!(first, second);
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_blank_isbn_touches_nothing() {
        let fetcher = CountingFetcher::new(true);
        let cache = Arc::new(MemoryCoverCache::new());
        let resolver = resolver(fetcher.clone(), cache.clone());

        assert_eq!(resolver.resolve(None).await, None);
        assert_eq!(resolver.resolve(Some("")).await, None);
        assert_eq!(resolver.resolve(Some("   ")).await, None);

        assert_eq!(fetcher.calls(), 0);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_cached_as_no_cover() {
        let fetcher = CountingFetcher::new(false);
        let cache = Arc::new(MemoryCoverCache::new());
        let resolver = resolver(fetcher.clone(), cache.clone());

        assert_eq!(resolver.resolve(Some("9781501142976")).await, None);
        // The negative outcome is cached: no second probe
        assert_eq!(resolver.resolve(Some("9781501142976")).await, None);

        assert_eq!(fetcher.calls(), 1);
        assert_eq!(cache.get("9781501142976"), Some(None));
    }

    #[tokio::test]
    async fn test_pre_populated_cache_short_circuits() {
        let fetcher = CountingFetcher::new(false);
        let cache = Arc::new(MemoryCoverCache::new());
        cache.put("9780618260300", Some("https://covers.test/known.jpg".to_string()));
        let resolver = resolver(fetcher.clone(), cache);

        let resolved = resolver.resolve(Some("9780618260300")).await;

        assert_eq!(resolved.as_deref(), Some("https://covers.test/known.jpg"));
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_isbn_is_trimmed_before_lookup() {
        let fetcher = CountingFetcher::new(true);
        let cache = Arc::new(MemoryCoverCache::new());
        let resolver = resolver(fetcher.clone(), cache.clone());

        let resolved = resolver.resolve(Some("  9780553293357 ")).await;

        assert_eq!(
            resolved.as_deref(),
            Some("https://covers.test/b/isbn/9780553293357-M.jpg")
        );
        assert_eq!(cache.get("9780553293357"), Some(resolved));
    }

    #[test]
    fn test_cover_url_template() {
        let resolver = CoverResolver::new(CoverConfig::new());
        assert_eq!(
            resolver.cover_url("9780684801223"),
            "https://covers.openlibrary.org/b/isbn/9780684801223-M.jpg"
        );

        // Trailing slash on the base does not double up
        let resolver = CoverResolver::new(CoverConfig::new().base_url("https://covers.test/"));
        assert_eq!(resolver.cover_url("x"), "https://covers.test/x-M.jpg");
    }

    #[tokio::test]
    #[ignore = "network probe for manual debugging"]
    async fn live_provider_probe() {
        let resolver = CoverResolver::new(CoverConfig::new());
        let resolved = resolver.resolve(Some("9780451524935")).await;
        println!("live probe resolved: {:?}", resolved);
    }
}
