//! # liber-core: Pure Domain Logic for the Liber Catalog
//!
//! This crate is the **heart** of Liber. It contains the catalog's domain
//! types and rules as pure code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Liber Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Presentation (out of scope)                    │   │
//! │  │        listing page ──► add forms ──► delete action            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    liber-catalog (service)                      │   │
//! │  │     list_books, add_author, add_book, delete_book               │   │
//! │  └───────────┬─────────────────────────────────────┬───────────────┘   │
//! │              │                                     │                    │
//! │  ┌───────────▼───────────┐             ┌───────────▼───────────┐       │
//! │  │ ★ liber-core (THIS) ★ │             │     liber-covers      │       │
//! │  │  types • validation   │             │   ISBN → cover URL    │       │
//! │  │  errors • display     │             └───────────────────────┘       │
//! │  │  NO I/O • PURE        │                                             │
//! │  └───────────┬───────────┘                                             │
//! │              │                                                          │
//! │  ┌───────────▼─────────────────────────────────────────────────────┐   │
//! │  │                    liber-db (SQLite layer)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Author, Book, BookSummary, inputs)
//! - [`validation`] - Input validation rules
//! - [`error`] - Domain error types
//! - [`display`] - Presentation-agnostic display formatting
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Explicit Errors**: All errors are typed, never strings or panics
//! 4. **Records, not object graphs**: the author/book relationship is a
//!    query in liber-db, never a live backref between structs

// =============================================================================
// Module Declarations
// =============================================================================

pub mod display;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use liber_core::Author` instead of
// `use liber_core::types::Author`

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of an author name.
///
/// ## Why 100?
/// Matches the column width the catalog schema has always used; long enough
/// for compound names, short enough to keep listings tidy.
pub const MAX_AUTHOR_NAME_LEN: usize = 100;

/// Maximum length of a book title.
pub const MAX_BOOK_TITLE_LEN: usize = 200;

/// Maximum length of an ISBN.
///
/// ## Why 20?
/// ISBN-13 is 13 digits, but catalog data arrives with hyphens and the
/// occasional legacy SBN, so the column allows some slack. The value is an
/// external lookup key only and is NOT unique within the catalog.
pub const MAX_ISBN_LEN: usize = 20;

/// Maximum length of a title search query.
pub const MAX_SEARCH_QUERY_LEN: usize = 100;
