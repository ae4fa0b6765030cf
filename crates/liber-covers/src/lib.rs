//! # liber-covers: Cover-Art Resolution for Liber
//!
//! Maps an ISBN to a displayable cover-image URL via an external provider,
//! caching every outcome so the provider is contacted at most once per ISBN
//! for the process lifetime.
//!
//! ## Resolution Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    resolve(isbn)                                        │
//! │                                                                         │
//! │  ISBN blank/absent? ──────────────────► None (no cache, no network)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Cache hit? (key present, either outcome)                              │
//! │       │                                                                 │
//! │       ├── yes ────────────────────────► cached value, no network       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Probe <base>/<isbn>-M.jpg (bounded timeout)                           │
//! │       │                                                                 │
//! │       ├── 200-class ──► cache + return the templated URL               │
//! │       │                                                                 │
//! │       └── any other status, timeout, DNS, connection error             │
//! │                    └──► cache "no cover", return None                  │
//! │                                                                         │
//! │  The caller NEVER sees an error: cover art is enrichment, not a        │
//! │  required field.                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`cache`] - The `CoverCache` trait and in-memory implementation
//! - [`fetch`] - The `CoverFetcher` trait and reqwest implementation
//! - [`resolver`] - `CoverResolver` tying the two together

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cache;
pub mod fetch;
pub mod resolver;

// =============================================================================
// Re-exports
// =============================================================================

pub use cache::{CoverCache, MemoryCoverCache};
pub use fetch::{CoverFetcher, HttpCoverFetcher};
pub use resolver::{CoverConfig, CoverResolver};
