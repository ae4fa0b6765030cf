//! # Domain Types
//!
//! Core domain types used throughout Liber.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │     Author      │   │      Book       │   │   BookSummary   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (UUID)      │   │  id (UUID)      │   │  Book columns   │       │
//! │  │  name           │   │  isbn?          │   │  + author_name  │       │
//! │  │  birth_date?    │   │  title          │   │  (joined read   │       │
//! │  │  date_of_death? │   │  author_id (FK) │   │   model)        │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    NewAuthor    │   │     NewBook     │   │    BookSort     │       │
//! │  │  typed input +  │   │  typed input +  │   │  Unsorted       │       │
//! │  │  validate()     │   │  validate()     │   │  Title │ Author │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! Every entity's `id` is a UUID v4 string assigned by the store on insert.
//! Ids are immutable and never reused. The author/book relationship lives in
//! `author_id` alone; there is no back-reference field on either struct.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::validation::{
    normalize_isbn, validate_author_name, validate_book_title, validate_isbn, ValidationResult,
};

// =============================================================================
// Author
// =============================================================================

/// An author in the catalog.
///
/// Authors exist only while at least one book references them; the store
/// removes an author together with the deletion of their last book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Author {
    /// Unique identifier (UUID v4), store-assigned, immutable.
    pub id: String,

    /// Display name. Not unique: two authors may share a name.
    pub name: String,

    /// Date of birth, if known.
    pub birth_date: Option<NaiveDate>,

    /// Date of death; absent means living or unknown.
    pub date_of_death: Option<NaiveDate>,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Book
// =============================================================================

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Book {
    /// Unique identifier (UUID v4), store-assigned, immutable.
    pub id: String,

    /// ISBN used as the external cover-art lookup key.
    /// NOT unique within the catalog; blank input is normalized to `None`.
    pub isbn: Option<String>,

    /// Title shown in listings.
    pub title: String,

    /// Year of first publication, if known.
    pub publication_year: Option<i64>,

    /// The one author this book belongs to. Always references an existing
    /// author row at creation time.
    pub author_id: String,

    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Book Summary (read model)
// =============================================================================

/// A book row joined with its author's name.
///
/// ## Why a separate type?
/// Listings sort by and display the author name, so the store returns it in
/// the same query. This keeps the relationship a JOIN instead of a live
/// object graph between `Author` and `Book`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct BookSummary {
    pub id: String,
    pub isbn: Option<String>,
    pub title: String,
    pub publication_year: Option<i64>,
    pub author_id: String,
    /// Name of the referenced author (joined, not stored on the book row).
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Typed Inputs
// =============================================================================

/// Input for creating an author.
///
/// ## Usage
/// ```rust
/// use liber_core::NewAuthor;
///
/// let input = NewAuthor {
///     name: "Jane Austen".to_string(),
///     birth_date: None,
///     date_of_death: None,
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAuthor {
    /// Required, non-empty, at most [`crate::MAX_AUTHOR_NAME_LEN`] chars.
    pub name: String,
    /// Accepted as-is; no ordering check against `date_of_death`.
    pub birth_date: Option<NaiveDate>,
    /// Absent means living or unknown.
    pub date_of_death: Option<NaiveDate>,
}

impl NewAuthor {
    /// Validates the input without constructing anything.
    ///
    /// Fails fast, before any store write.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_author_name(&self.name)?;
        Ok(())
    }
}

/// Input for creating a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    /// Optional; blank/whitespace is treated as absent. At most
    /// [`crate::MAX_ISBN_LEN`] chars. Duplicates are tolerated.
    pub isbn: Option<String>,
    /// Required, non-empty, at most [`crate::MAX_BOOK_TITLE_LEN`] chars.
    pub title: String,
    /// Accepted as-is.
    pub publication_year: Option<i64>,
    /// Must reference an existing author; the service checks existence
    /// before the write and the schema enforces it again via foreign key.
    pub author_id: String,
}

impl NewBook {
    /// Validates the input without constructing anything.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_book_title(&self.title)?;
        if let Some(isbn) = self.isbn.as_deref() {
            validate_isbn(isbn)?;
        }
        Ok(())
    }

    /// The ISBN with blank values collapsed to `None`.
    pub fn normalized_isbn(&self) -> Option<String> {
        normalize_isbn(self.isbn.as_deref())
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Sort order for the catalog listing.
///
/// A non-empty search query always overrides the sort: search results come
/// back in store-default order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookSort {
    /// Store-default (insertion) order.
    Unsorted,
    /// Ascending by book title.
    Title,
    /// Ascending by the referenced author's name.
    Author,
}

impl BookSort {
    /// Maps a raw query-string value ("title", "author") to a sort order.
    ///
    /// Anything else, including absence, means store-default order. This is
    /// deliberately forgiving: an unknown sort key is not an error.
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("title") => BookSort::Title,
            Some("author") => BookSort::Author,
            _ => BookSort::Unsorted,
        }
    }
}

impl Default for BookSort {
    fn default() -> Self {
        BookSort::Unsorted
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_sort_from_query() {
        assert_eq!(BookSort::from_query(Some("title")), BookSort::Title);
        assert_eq!(BookSort::from_query(Some("author")), BookSort::Author);
        assert_eq!(BookSort::from_query(Some(" title ")), BookSort::Title);
        assert_eq!(BookSort::from_query(Some("isbn")), BookSort::Unsorted);
        assert_eq!(BookSort::from_query(None), BookSort::Unsorted);
    }

    #[test]
    fn test_book_sort_default() {
        assert_eq!(BookSort::default(), BookSort::Unsorted);
    }

    #[test]
    fn test_new_author_validate() {
        let ok = NewAuthor {
            name: "George Orwell".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1903, 6, 25),
            date_of_death: NaiveDate::from_ymd_opt(1950, 1, 21),
        };
        assert!(ok.validate().is_ok());

        let empty = NewAuthor {
            name: "   ".to_string(),
            birth_date: None,
            date_of_death: None,
        };
        assert!(empty.validate().is_err());
    }

    #[test]
    fn test_new_book_validate_and_isbn_normalization() {
        let book = NewBook {
            isbn: Some("  ".to_string()),
            title: "1984".to_string(),
            publication_year: Some(1949),
            author_id: "some-author".to_string(),
        };
        assert!(book.validate().is_ok());
        assert_eq!(book.normalized_isbn(), None);

        let book = NewBook {
            isbn: Some(" 9780451524935 ".to_string()),
            title: "1984".to_string(),
            publication_year: Some(1949),
            author_id: "some-author".to_string(),
        };
        assert_eq!(book.normalized_isbn().as_deref(), Some("9780451524935"));

        let book = NewBook {
            isbn: Some("9".repeat(21)),
            title: "1984".to_string(),
            publication_year: None,
            author_id: "some-author".to_string(),
        };
        assert!(book.validate().is_err());
    }
}
