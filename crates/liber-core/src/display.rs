//! # Display Formatting
//!
//! Presentation-agnostic display lines for catalog entities.
//!
//! Formatting lives here, outside the data records, so the persistence model
//! stays decoupled from how any particular surface renders it. The records
//! themselves only derive `Debug` for diagnostics.

use crate::types::{Author, BookSummary};

/// One-line display form of an author: name plus lifespan years when known.
///
/// ## Example
/// ```rust
/// use chrono::{NaiveDate, TimeZone, Utc};
/// use liber_core::display::author_display_line;
/// use liber_core::Author;
///
/// let austen = Author {
///     id: "a1".to_string(),
///     name: "Jane Austen".to_string(),
///     birth_date: NaiveDate::from_ymd_opt(1775, 12, 16),
///     date_of_death: NaiveDate::from_ymd_opt(1817, 7, 18),
///     created_at: Utc.timestamp_opt(0, 0).unwrap(),
/// };
/// assert_eq!(author_display_line(&austen), "Jane Austen (1775-1817)");
/// ```
pub fn author_display_line(author: &Author) -> String {
    use chrono::Datelike;

    match (author.birth_date, author.date_of_death) {
        (Some(born), Some(died)) => {
            format!("{} ({}-{})", author.name, born.year(), died.year())
        }
        // Living or death date unknown
        (Some(born), None) => format!("{} (b. {})", author.name, born.year()),
        _ => author.name.clone(),
    }
}

/// One-line display form of a listed book: title, author, year when known.
pub fn book_display_line(book: &BookSummary) -> String {
    match book.publication_year {
        Some(year) => format!("{} by {} ({})", book.title, book.author_name, year),
        None => format!("{} by {}", book.title, book.author_name),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn author(
        name: &str,
        birth: Option<NaiveDate>,
        death: Option<NaiveDate>,
    ) -> Author {
        Author {
            id: "a1".to_string(),
            name: name.to_string(),
            birth_date: birth,
            date_of_death: death,
            created_at: Utc.timestamp_opt(0, 0).unwrap(),
        }
    }

    #[test]
    fn test_author_display_line_lifespan() {
        let a = author(
            "George Orwell",
            NaiveDate::from_ymd_opt(1903, 6, 25),
            NaiveDate::from_ymd_opt(1950, 1, 21),
        );
        assert_eq!(author_display_line(&a), "George Orwell (1903-1950)");
    }

    #[test]
    fn test_author_display_line_living() {
        let a = author("Margaret Atwood", NaiveDate::from_ymd_opt(1939, 11, 18), None);
        assert_eq!(author_display_line(&a), "Margaret Atwood (b. 1939)");
    }

    #[test]
    fn test_author_display_line_no_dates() {
        let a = author("Unknown Scribe", None, None);
        assert_eq!(author_display_line(&a), "Unknown Scribe");
    }

    #[test]
    fn test_book_display_line() {
        let summary = BookSummary {
            id: "b1".to_string(),
            isbn: Some("9780553293357".to_string()),
            title: "Foundation".to_string(),
            publication_year: Some(1951),
            author_id: "a1".to_string(),
            author_name: "Isaac Asimov".to_string(),
            created_at: Utc.timestamp_opt(0, 0).unwrap(),
        };
        assert_eq!(
            book_display_line(&summary),
            "Foundation by Isaac Asimov (1951)"
        );

        let no_year = BookSummary {
            publication_year: None,
            ..summary
        };
        assert_eq!(book_display_line(&no_year), "Foundation by Isaac Asimov");
    }
}
