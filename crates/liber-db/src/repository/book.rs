//! # Book Repository
//!
//! Database operations for books: listing queries and the cascade delete.
//!
//! ## Cascade Delete
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                 delete_cascading(book_id)                               │
//! │                                                                         │
//! │  BEGIN TRANSACTION                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SELECT book by id ──── absent? ──► ROLLBACK, NotFound                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DELETE the book                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  COUNT remaining books with the same author_id                         │
//! │       │                                                                 │
//! │       ├── > 0 ──► author keeps its other books                         │
//! │       │                                                                 │
//! │       └── = 0 ──► DELETE the author too (orphan rule)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  COMMIT ── both deletions become visible atomically                    │
//! │                                                                         │
//! │  Readers never observe a permanently orphaned author; a failure at     │
//! │  any step rolls the whole operation back. SQLite serializes writing    │
//! │  transactions, so two deletes racing over sibling books cannot both    │
//! │  pass the orphan check.                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::{DbError, DbResult};
use liber_core::{Book, BookSort, BookSummary, NewBook};

/// Columns selected for the joined listing read model.
const SUMMARY_SELECT: &str = r#"
    SELECT
        b.id,
        b.isbn,
        b.title,
        b.publication_year,
        b.author_id,
        a.name AS author_name,
        b.created_at
    FROM books b
    INNER JOIN authors a ON a.id = b.author_id
"#;

/// Repository for book database operations.
#[derive(Debug, Clone)]
pub struct BookRepository {
    pool: SqlitePool,
}

impl BookRepository {
    /// Creates a new BookRepository.
    pub fn new(pool: SqlitePool) -> Self {
        BookRepository { pool }
    }

    /// Inserts a new book, assigning its id and creation timestamp.
    ///
    /// Blank ISBNs are stored as NULL. The author reference is enforced by
    /// the schema's foreign key; the catalog service additionally pre-checks
    /// it to report a distinct error before attempting the write.
    pub async fn insert(&self, input: &NewBook) -> DbResult<Book> {
        let book = Book {
            id: Uuid::new_v4().to_string(),
            isbn: input.normalized_isbn(),
            title: input.title.trim().to_string(),
            publication_year: input.publication_year,
            author_id: input.author_id.clone(),
            created_at: Utc::now(),
        };

        debug!(id = %book.id, title = %book.title, "Inserting book");

        sqlx::query(
            r#"
            INSERT INTO books (id, isbn, title, publication_year, author_id, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&book.id)
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(book.publication_year)
        .bind(&book.author_id)
        .bind(book.created_at)
        .execute(&self.pool)
        .await?;

        Ok(book)
    }

    /// Gets a book by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, isbn, title, publication_year, author_id, created_at
            FROM books
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    /// Lists all books (joined with author names) in the requested order.
    ///
    /// ## Ordering
    /// - `Unsorted`: store-default (insertion) order
    /// - `Title`: ascending by title, store collation
    /// - `Author`: ascending by the joined author name
    pub async fn list(&self, sort: BookSort) -> DbResult<Vec<BookSummary>> {
        debug!(?sort, "Listing books");

        let order_by = match sort {
            BookSort::Unsorted => "ORDER BY b.rowid",
            BookSort::Title => "ORDER BY b.title",
            BookSort::Author => "ORDER BY a.name",
        };
        let sql = format!("{SUMMARY_SELECT} {order_by}");

        let books = sqlx::query_as::<_, BookSummary>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Searches books whose title contains the query, store-default order.
    ///
    /// Matching uses SQLite's native LIKE operator: "contains" anywhere in
    /// the title, case-insensitive for ASCII. The query arrives pre-trimmed
    /// from the service layer and is bound as a parameter, so LIKE
    /// metacharacters in user input stay inert as a pattern prefix/suffix.
    pub async fn search_by_title(&self, query: &str) -> DbResult<Vec<BookSummary>> {
        debug!(query = %query, "Searching books by title");

        let sql = format!("{SUMMARY_SELECT} WHERE b.title LIKE '%' || ?1 || '%' ORDER BY b.rowid");

        let books = sqlx::query_as::<_, BookSummary>(&sql)
            .bind(query)
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    /// Gets all books referencing an author.
    ///
    /// This is the query form of the "author has books" relationship; the
    /// entity structs deliberately carry no back-references.
    pub async fn by_author(&self, author_id: &str) -> DbResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, isbn, title, publication_year, author_id, created_at
            FROM books
            WHERE author_id = ?1
            ORDER BY rowid
            "#,
        )
        .bind(author_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Counts books (for diagnostics and the seed guard).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    /// Deletes a book and, when it was the author's last book, the author.
    ///
    /// Both deletions happen inside one transaction: readers observe either
    /// the old state or the fully-deleted state, never an orphaned author.
    ///
    /// ## Arguments
    /// * `id` - Book UUID
    ///
    /// ## Returns
    /// * `Ok(true)` - Book deleted and its newly-orphaned author with it
    /// * `Ok(false)` - Book deleted; the author keeps other books
    /// * `Err(DbError::NotFound)` - No book with that id
    pub async fn delete_cascading(&self, id: &str) -> DbResult<bool> {
        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT id, isbn, title, publication_year, author_id, created_at
            FROM books
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(book) = book else {
            return Err(DbError::not_found("Book", id));
        };

        debug!(id = %book.id, author_id = %book.author_id, "Deleting book");

        sqlx::query("DELETE FROM books WHERE id = ?1")
            .bind(&book.id)
            .execute(&mut *tx)
            .await?;

        // The orphan check must see the state inside this transaction.
        let remaining: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE author_id = ?1")
                .bind(&book.author_id)
                .fetch_one(&mut *tx)
                .await?;

        let author_removed = remaining == 0;
        if author_removed {
            debug!(author_id = %book.author_id, "Deleting orphaned author");
            sqlx::query("DELETE FROM authors WHERE id = ?1")
                .bind(&book.author_id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit()
            .await
            .map_err(|e| DbError::TransactionFailed(e.to_string()))?;

        Ok(author_removed)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
