//! # Listing DTO
//!
//! The cover-annotated row a presentation boundary renders.

use serde::{Deserialize, Serialize};

use liber_core::BookSummary;

/// One row of the catalog listing.
///
/// ## Why a DTO?
/// - Decouples the stored read model from the boundary contract
/// - Carries the cover URL, which is display-only and never persisted
/// - serde renames to camelCase for JS consumption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookListing {
    pub id: String,
    pub isbn: Option<String>,
    pub title: String,
    pub publication_year: Option<i64>,
    pub author_id: String,
    pub author_name: String,
    /// Resolved cover URL; `None` when the book has no ISBN, the provider
    /// has no cover, or the provider was unreachable.
    pub cover_url: Option<String>,
}

impl BookListing {
    /// Builds a listing row from a stored summary plus its resolved cover.
    pub fn from_summary(summary: BookSummary, cover_url: Option<String>) -> Self {
        BookListing {
            id: summary.id,
            isbn: summary.isbn,
            title: summary.title,
            publication_year: summary.publication_year,
            author_id: summary.author_id,
            author_name: summary.author_name,
            cover_url,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_listing_serializes_camel_case() {
        let summary = BookSummary {
            id: "b1".to_string(),
            isbn: Some("9780451524935".to_string()),
            title: "1984".to_string(),
            publication_year: Some(1949),
            author_id: "a1".to_string(),
            author_name: "George Orwell".to_string(),
            created_at: Utc.timestamp_opt(0, 0).unwrap(),
        };
        let listing = BookListing::from_summary(
            summary,
            Some("https://covers.test/b/isbn/9780451524935-M.jpg".to_string()),
        );

        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(json["authorName"], "George Orwell");
        assert_eq!(json["publicationYear"], 1949);
        assert_eq!(
            json["coverUrl"],
            "https://covers.test/b/isbn/9780451524935-M.jpg"
        );
    }
}
