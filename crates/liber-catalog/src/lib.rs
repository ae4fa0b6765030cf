//! # liber-catalog: Catalog Service for Liber
//!
//! The orchestration layer of the Liber catalog: every operation a
//! presentation boundary needs, built on the store (liber-db) and the
//! cover resolver (liber-covers).
//!
//! ## Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       CatalogService                                    │
//! │                                                                         │
//! │  list_books(search?, sort)  ──► filtered/ordered listing, each row     │
//! │                                 annotated with its cover URL           │
//! │  list_authors()             ──► author-selection data for add-book     │
//! │  add_author(NewAuthor)      ──► validate, persist, return              │
//! │  add_book(NewBook)          ──► validate, check author exists,         │
//! │                                 persist, return                        │
//! │  delete_book(id)            ──► transactional delete; removes the      │
//! │                                 author too when it was the last book   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`service`] - The `CatalogService` itself
//! - [`listing`] - The cover-annotated listing DTO
//! - [`error`] - The service-facing error type

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod listing;
pub mod service;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use listing::BookListing;
pub use service::CatalogService;
