//! # Catalog Error Type
//!
//! Unified error type for catalog operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Liber                                  │
//! │                                                                         │
//! │  ValidationError ──► Validation     (bad input, no write happened)     │
//! │  author pre-check ─► AuthorNotFound (bad reference, no write happened) │
//! │  missing row ──────► BookNotFound   (maps to "not found" upstream)     │
//! │  DbError ──────────► Storage        (generic persistence failure,      │
//! │                                      rollback already guaranteed)      │
//! │                                                                         │
//! │  Cover lookup failures never appear here: liber-covers absorbs them    │
//! │  and the listing simply carries no cover URL.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use liber_core::ValidationError;
use liber_db::DbError;

/// Errors surfaced by the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// add_book named an author that does not exist.
    ///
    /// Raised by the explicit pre-check, before any write: the store is
    /// unchanged when the caller sees this.
    #[error("Author not found: {0}")]
    AuthorNotFound(String),

    /// delete_book (or a lookup) named a book that does not exist.
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// Input failed validation; no write happened.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store failed. Transactional rollback guarantees no partial
    /// mutation is left behind.
    #[error("Storage failure: {0}")]
    Storage(#[from] DbError),
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::AuthorNotFound("a-1".to_string());
        assert_eq!(err.to_string(), "Author not found: a-1");

        let err = CatalogError::BookNotFound("b-1".to_string());
        assert_eq!(err.to_string(), "Book not found: b-1");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: CatalogError = ValidationError::Required {
            field: "title".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "title is required");
    }
}
