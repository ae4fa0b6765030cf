//! # Catalog Service
//!
//! Orchestrates catalog operations over the store and the cover resolver.
//!
//! ## Listing Precedence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  list_books(search, sort)                               │
//! │                                                                         │
//! │  search non-empty (after trim)?                                        │
//! │       │                                                                 │
//! │       ├── yes ──► title-substring matches, store-default order         │
//! │       │           (any requested sort is IGNORED)                      │
//! │       │                                                                 │
//! │       └── no ───► all books in the requested order                     │
//! │                   (Unsorted │ Title │ Author)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Annotate every row with its resolved cover URL                        │
//! │  (cached per ISBN; failures degrade to "no cover")                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use liber_core::validation::validate_search_query;
use liber_core::{Author, Book, BookSort, NewAuthor, NewBook};
use liber_covers::CoverResolver;
use liber_db::{Database, DbError};

use crate::error::{CatalogError, CatalogResult};
use crate::listing::BookListing;

/// The catalog service.
///
/// Holds a database handle and a cover resolver; both are cheap to clone,
/// so the service itself is too.
#[derive(Clone)]
pub struct CatalogService {
    db: Database,
    covers: CoverResolver,
}

impl CatalogService {
    /// Creates a catalog service over the given store and resolver.
    ///
    /// The resolver's cache is owned by whoever constructed the resolver;
    /// passing the same resolver to several services shares one cache.
    pub fn new(db: Database, covers: CoverResolver) -> Self {
        CatalogService { db, covers }
    }

    /// Lists books, optionally filtered by a title search or ordered.
    ///
    /// A non-empty search query takes precedence over `sort`: searches
    /// always come back in store-default order. Every returned row carries
    /// its resolved cover URL.
    pub async fn list_books(
        &self,
        search_query: Option<&str>,
        sort: BookSort,
    ) -> CatalogResult<Vec<BookListing>> {
        let query = match search_query {
            Some(raw) => validate_search_query(raw)?,
            None => String::new(),
        };

        let summaries = if query.is_empty() {
            self.db.books().list(sort).await?
        } else {
            debug!(query = %query, "search overrides requested sort");
            self.db.books().search_by_title(&query).await?
        };

        // Cover annotation is display-only enrichment: each uncached ISBN
        // costs at most one bounded probe, and failures just leave the row
        // without a cover.
        let mut listings = Vec::with_capacity(summaries.len());
        for summary in summaries {
            let cover_url = self.covers.resolve(summary.isbn.as_deref()).await;
            listings.push(BookListing::from_summary(summary, cover_url));
        }

        debug!(count = listings.len(), "listing assembled");
        Ok(listings)
    }

    /// Lists all authors (for the author selection in the add-book flow).
    pub async fn list_authors(&self) -> CatalogResult<Vec<Author>> {
        Ok(self.db.authors().list().await?)
    }

    /// Adds an author.
    ///
    /// Validation runs before the write; no duplicate-name check by design.
    pub async fn add_author(&self, input: NewAuthor) -> CatalogResult<Author> {
        input.validate()?;

        let author = self.db.authors().insert(&input).await?;
        info!(id = %author.id, name = %author.name, "author added");
        Ok(author)
    }

    /// Adds a book.
    ///
    /// The author reference is checked explicitly before the write, so a
    /// bad `author_id` fails with [`CatalogError::AuthorNotFound`] and
    /// leaves the store unchanged. The schema's foreign key backs the
    /// check up against races.
    pub async fn add_book(&self, input: NewBook) -> CatalogResult<Book> {
        input.validate()?;

        if !self.db.authors().exists(&input.author_id).await? {
            return Err(CatalogError::AuthorNotFound(input.author_id.clone()));
        }

        let book = self.db.books().insert(&input).await?;
        info!(id = %book.id, title = %book.title, "book added");
        Ok(book)
    }

    /// Deletes a book by id, removing its author too when that was the
    /// author's last book.
    ///
    /// Both deletions live in one store transaction: callers and concurrent
    /// readers see either nothing changed or both rows gone.
    pub async fn delete_book(&self, id: &str) -> CatalogResult<()> {
        match self.db.books().delete_cascading(id).await {
            Ok(author_removed) => {
                info!(id = %id, author_removed, "book deleted");
                Ok(())
            }
            Err(DbError::NotFound { .. }) => Err(CatalogError::BookNotFound(id.to_string())),
            Err(other) => Err(other.into()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use liber_covers::{CoverFetcher, MemoryCoverCache};
    use liber_db::DbConfig;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

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

    /// Builds a service over an in-memory store and a counting fake fetcher.
    async fn test_service(covers_exist: bool) -> (CatalogService, Database, Arc<CountingFetcher>) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let fetcher = CountingFetcher::new(covers_exist);
        let resolver = CoverResolver::with_parts(
            fetcher.clone(),
            Arc::new(MemoryCoverCache::new()),
            "https://covers.test/b/isbn",
        );
        let service = CatalogService::new(db.clone(), resolver);
        (service, db, fetcher)
    }

    fn author(name: &str) -> NewAuthor {
        NewAuthor {
            name: name.to_string(),
            birth_date: None,
            date_of_death: None,
        }
    }

    fn book(title: &str, isbn: Option<&str>, author_id: &str) -> NewBook {
        NewBook {
            isbn: isbn.map(str::to_string),
            title: title.to_string(),
            publication_year: None,
            author_id: author_id.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_author_rejects_empty_name() {
        let (service, db, _) = test_service(true).await;

        let err = service.add_author(author("   ")).await.unwrap_err();

        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(db.authors().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_book_with_unknown_author_leaves_store_unchanged() {
        let (service, db, _) = test_service(true).await;

        let err = service
            .add_book(book("Orphan", None, "no-such-author"))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::AuthorNotFound(_)));
        assert_eq!(db.books().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_add_book_happy_path() {
        let (service, _, _) = test_service(true).await;

        let orwell = service.add_author(author("George Orwell")).await.unwrap();
        let added = service
            .add_book(book("1984", Some(" 9780451524935 "), &orwell.id))
            .await
            .unwrap();

        assert_eq!(added.title, "1984");
        // Stored form is trimmed
        assert_eq!(added.isbn.as_deref(), Some("9780451524935"));
        assert_eq!(added.author_id, orwell.id);
    }

    #[tokio::test]
    async fn test_listing_annotates_covers() {
        let (service, _, fetcher) = test_service(true).await;

        let orwell = service.add_author(author("George Orwell")).await.unwrap();
        service
            .add_book(book("1984", Some("9780451524935"), &orwell.id))
            .await
            .unwrap();

        let listings = service.list_books(None, BookSort::Unsorted).await.unwrap();

        assert_eq!(listings.len(), 1);
        assert_eq!(
            listings[0].cover_url.as_deref(),
            Some("https://covers.test/b/isbn/9780451524935-M.jpg")
        );
        assert_eq!(listings[0].author_name, "George Orwell");
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_listing_skips_cover_lookup_without_isbn() {
        let (service, _, fetcher) = test_service(true).await;

        let lee = service.add_author(author("Harper Lee")).await.unwrap();
        service
            .add_book(book("To Kill a Mockingbird", None, &lee.id))
            .await
            .unwrap();

        let listings = service.list_books(None, BookSort::Unsorted).await.unwrap();

        assert_eq!(listings[0].cover_url, None);
        assert_eq!(fetcher.calls(), 0);
    }

    #[tokio::test]
    async fn test_search_overrides_sort() {
        let (service, _, _) = test_service(false).await;

        let tolkien = service.add_author(author("J.R.R. Tolkien")).await.unwrap();
        let orwell = service.add_author(author("George Orwell")).await.unwrap();
        service
            .add_book(book("The Lord of the Rings", None, &tolkien.id))
            .await
            .unwrap();
        service.add_book(book("1984", None, &orwell.id)).await.unwrap();

        // The sort request is ignored while a search query is present
        let listings = service
            .list_books(Some(" Lord "), BookSort::Author)
            .await
            .unwrap();

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].title, "The Lord of the Rings");
    }

    #[tokio::test]
    async fn test_blank_search_falls_back_to_sort() {
        let (service, _, _) = test_service(false).await;

        let various = service.add_author(author("Various")).await.unwrap();
        for title in ["It", "1984", "Foundation"] {
            service.add_book(book(title, None, &various.id)).await.unwrap();
        }

        let titles: Vec<String> = service
            .list_books(Some("   "), BookSort::Title)
            .await
            .unwrap()
            .into_iter()
            .map(|l| l.title)
            .collect();

        assert_eq!(titles, ["1984", "Foundation", "It"]);
    }

    #[tokio::test]
    async fn test_listing_is_idempotent_and_probes_once_per_isbn() {
        let (service, _, fetcher) = test_service(true).await;

        let asimov = service.add_author(author("Isaac Asimov")).await.unwrap();
        service
            .add_book(book("Foundation", Some("9780553293357"), &asimov.id))
            .await
            .unwrap();

        let first = service.list_books(None, BookSort::Unsorted).await.unwrap();
        let second = service.list_books(None, BookSort::Unsorted).await.unwrap();

        assert_eq!(first, second);
        // The second listing answers from the cover cache
        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_delete_book_cascades_through_service() {
        let (service, db, _) = test_service(false).await;

        let lee = service.add_author(author("Harper Lee")).await.unwrap();
        let only = service
            .add_book(book("To Kill a Mockingbird", None, &lee.id))
            .await
            .unwrap();

        service.delete_book(&only.id).await.unwrap();

        assert_eq!(db.books().count().await.unwrap(), 0);
        assert_eq!(db.authors().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_missing_book_reports_not_found() {
        let (service, _, _) = test_service(false).await;

        let err = service.delete_book("no-such-book").await.unwrap_err();
        assert!(matches!(err, CatalogError::BookNotFound(_)));
    }

    #[tokio::test]
    async fn test_list_authors_for_selection() {
        let (service, _, _) = test_service(false).await;

        service.add_author(author("Margaret Atwood")).await.unwrap();
        service.add_author(author("Agatha Christie")).await.unwrap();

        let authors = service.list_authors().await.unwrap();
        assert_eq!(authors.len(), 2);
        // Store-default order: insertion order, no name sort
        assert_eq!(authors[0].name, "Margaret Atwood");
    }
}
