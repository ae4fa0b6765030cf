//! # Validation Module
//!
//! Input validation utilities for the Liber catalog.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation boundary (out of scope)                         │
//! │  ├── Basic format checks, immediate user feedback                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog service (Rust)                                       │
//! │  └── THIS MODULE: required fields, length limits                       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  └── Foreign key constraints                                           │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use liber_core::validation::{validate_author_name, validate_book_title};
//!
//! // Validate before any database insert
//! validate_author_name("Harper Lee").unwrap();
//! validate_book_title("To Kill a Mockingbird").unwrap();
//! ```

use crate::error::ValidationError;
use crate::{MAX_AUTHOR_NAME_LEN, MAX_BOOK_TITLE_LEN, MAX_ISBN_LEN, MAX_SEARCH_QUERY_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an author name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
/// - No duplicate check: two authors may legitimately share a name
///
/// ## Example
/// ```rust
/// use liber_core::validation::validate_author_name;
///
/// assert!(validate_author_name("Gabriel García Márquez").is_ok());
/// assert!(validate_author_name("").is_err());
/// assert!(validate_author_name("A".repeat(200).as_str()).is_err());
/// ```
pub fn validate_author_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_AUTHOR_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_AUTHOR_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a book title.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
pub fn validate_book_title(title: &str) -> ValidationResult<()> {
    let title = title.trim();

    if title.is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }

    if title.chars().count() > MAX_BOOK_TITLE_LEN {
        return Err(ValidationError::TooLong {
            field: "title".to_string(),
            max: MAX_BOOK_TITLE_LEN,
        });
    }

    Ok(())
}

/// Validates an ISBN.
///
/// ## Rules
/// - May be empty (a book without a cover lookup key is fine)
/// - Must be at most 20 characters
/// - No checksum or charset validation: the value is an opaque external
///   lookup key, and catalog data historically contains duplicates
pub fn validate_isbn(isbn: &str) -> ValidationResult<()> {
    if isbn.trim().chars().count() > MAX_ISBN_LEN {
        return Err(ValidationError::TooLong {
            field: "isbn".to_string(),
            max: MAX_ISBN_LEN,
        });
    }

    Ok(())
}

/// Collapses a blank ISBN to `None` and trims the rest.
///
/// ## Example
/// ```rust
/// use liber_core::validation::normalize_isbn;
///
/// assert_eq!(normalize_isbn(Some("  ")), None);
/// assert_eq!(normalize_isbn(None), None);
/// assert_eq!(
///     normalize_isbn(Some(" 9780553293357 ")).as_deref(),
///     Some("9780553293357")
/// );
/// ```
pub fn normalize_isbn(isbn: Option<&str>) -> Option<String> {
    let trimmed = isbn?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validates a title search query.
///
/// ## Rules
/// - Can be empty (listing falls back to sort/default order)
/// - Maximum 100 characters
///
/// ## Returns
/// The trimmed query string.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    let query = query.trim();

    if query.chars().count() > MAX_SEARCH_QUERY_LEN {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_SEARCH_QUERY_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
