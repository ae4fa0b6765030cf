//! # Repository Module
//!
//! Database repository implementations for Liber.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.  │
//! │                                                                         │
//! │  CatalogService                                                        │
//! │       │                                                                 │
//! │       │  db.books().search_by_title("Lord")                            │
//! │       │  ↓                                                              │
//! │       ▼                                                                 │
//! │  BookRepository                                                        │
//! │  ├── list(&self, sort)                                                 │
//! │  ├── search_by_title(&self, query)                                     │
//! │  ├── insert(&self, input)                                              │
//! │  └── delete_cascading(&self, id)                                       │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Clean separation of concerns                                        │
//! │  • SQL is isolated in one place                                        │
//! │  • The author/book relationship stays a query, not an object graph     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`author::AuthorRepository`] - Author rows and existence checks
//! - [`book::BookRepository`] - Book rows, listing queries, cascade delete

pub mod author;
pub mod book;
