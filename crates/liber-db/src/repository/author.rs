//! # Author Repository
//!
//! Database operations for authors.
//!
//! Authors are created directly but never deleted directly: removal happens
//! only inside [`crate::repository::book::BookRepository::delete_cascading`]
//! when the last referencing book goes away. Keeping the delete off this
//! repository makes the orphan rule hard to bypass.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::error::DbResult;
use liber_core::{Author, NewAuthor};

/// Repository for author database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = AuthorRepository::new(pool);
///
/// let author = repo.insert(&new_author).await?;
/// let all = repo.list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct AuthorRepository {
    pool: SqlitePool,
}

impl AuthorRepository {
    /// Creates a new AuthorRepository.
    pub fn new(pool: SqlitePool) -> Self {
        AuthorRepository { pool }
    }

    /// Inserts a new author, assigning its id and creation timestamp.
    ///
    /// ## Arguments
    /// * `input` - Validated author input (validation happens in the
    ///   catalog service before this call)
    ///
    /// ## Returns
    /// The stored author with its store-assigned id.
    pub async fn insert(&self, input: &NewAuthor) -> DbResult<Author> {
        let author = Author {
            id: Uuid::new_v4().to_string(),
            name: input.name.trim().to_string(),
            birth_date: input.birth_date,
            date_of_death: input.date_of_death,
            created_at: Utc::now(),
        };

        debug!(id = %author.id, name = %author.name, "Inserting author");

        sqlx::query(
            r#"
            INSERT INTO authors (id, name, birth_date, date_of_death, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&author.id)
        .bind(&author.name)
        .bind(author.birth_date)
        .bind(author.date_of_death)
        .bind(author.created_at)
        .execute(&self.pool)
        .await?;

        Ok(author)
    }

    /// Gets an author by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Author))` - Author found
    /// * `Ok(None)` - Author not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Author>> {
        let author = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, birth_date, date_of_death, created_at
            FROM authors
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(author)
    }

    /// Lists all authors in store-default (insertion) order.
    ///
    /// ## Usage
    /// Populates the author selection in the add-book flow.
    pub async fn list(&self) -> DbResult<Vec<Author>> {
        let authors = sqlx::query_as::<_, Author>(
            r#"
            SELECT id, name, birth_date, date_of_death, created_at
            FROM authors
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(authors)
    }

    /// Checks whether an author row exists.
    ///
    /// ## Usage
    /// The catalog service calls this before inserting a book, so a bad
    /// author reference fails with a distinct error instead of a raw
    /// foreign-key failure from the insert itself.
    pub async fn exists(&self, id: &str) -> DbResult<bool> {
        let found: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM authors WHERE id = ?1 LIMIT 1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(found.is_some())
    }

    /// Counts authors (for diagnostics and the seed guard).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM authors")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn orwell() -> NewAuthor {
        NewAuthor {
            name: "George Orwell".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1903, 6, 25),
            date_of_death: NaiveDate::from_ymd_opt(1950, 1, 21),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_author() {
        let db = test_db().await;
        let repo = db.authors();

        let inserted = repo.insert(&orwell()).await.unwrap();
        assert!(!inserted.id.is_empty());

        let fetched = repo.get_by_id(&inserted.id).await.unwrap().unwrap();
        assert_eq!(fetched, inserted);
        assert_eq!(fetched.name, "George Orwell");
        assert_eq!(fetched.birth_date, NaiveDate::from_ymd_opt(1903, 6, 25));
    }

    #[tokio::test]
    async fn test_get_missing_author_is_none() {
        let db = test_db().await;
        let found = db.authors().get_by_id("no-such-id").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let db = test_db().await;
        let repo = db.authors();

        let king = NewAuthor {
            name: "Stephen King".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1947, 9, 21),
            date_of_death: None,
        };
        repo.insert(&king).await.unwrap();
        repo.insert(&orwell()).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "Stephen King");
        assert_eq!(all[1].name, "George Orwell");
        // Living author keeps an absent date_of_death
        assert_eq!(all[0].date_of_death, None);
    }

    #[tokio::test]
    async fn test_exists_and_count() {
        let db = test_db().await;
        let repo = db.authors();

        assert_eq!(repo.count().await.unwrap(), 0);
        assert!(!repo.exists("anything").await.unwrap());

        let author = repo.insert(&orwell()).await.unwrap();
        assert!(repo.exists(&author.id).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
