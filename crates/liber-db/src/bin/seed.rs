//! # Seed Data Generator
//!
//! Populates an empty database with the classic catalog corpus for
//! development.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p liber-db --bin seed
//!
//! # Specify database path
//! cargo run -p liber-db --bin seed -- --db ./data/library.db
//! ```
//!
//! ## Seeded Corpus
//! Ten authors (Tolkien through Atwood) and one well-known book each. The
//! corpus intentionally contains one duplicated ISBN: the catalog treats
//! ISBN as a non-unique external lookup key, and the seed data exercises
//! that.

use chrono::NaiveDate;
use std::env;
use tracing_subscriber::EnvFilter;

use liber_core::{BookSort, NewAuthor, NewBook};
use liber_db::{Database, DbConfig};

/// Author name, birth date, date of death (None = living).
const AUTHORS: &[(&str, (i32, u32, u32), Option<(i32, u32, u32)>)] = &[
    ("J.R.R. Tolkien", (1892, 1, 3), Some((1973, 9, 2))),
    ("George Orwell", (1903, 6, 25), Some((1950, 1, 21))),
    ("Jane Austen", (1775, 12, 16), Some((1817, 7, 18))),
    ("Stephen King", (1947, 9, 21), None),
    ("Agatha Christie", (1890, 9, 15), Some((1976, 1, 12))),
    ("Ernest Hemingway", (1899, 7, 21), Some((1961, 7, 2))),
    ("Harper Lee", (1926, 4, 28), Some((2016, 2, 19))),
    ("Gabriel García Márquez", (1927, 3, 6), Some((2014, 4, 17))),
    ("Isaac Asimov", (1920, 1, 2), Some((1992, 4, 6))),
    ("Margaret Atwood", (1939, 11, 18), None),
];

/// ISBN, title, publication year, index into AUTHORS.
const BOOKS: &[(&str, &str, i64, usize)] = &[
    ("9780618260300", "The Lord of the Rings", 1954, 0),
    ("9780451524935", "1984", 1949, 1),
    ("9780141439518", "Pride and Prejudice", 1813, 2),
    ("9781501142976", "It", 1986, 3),
    ("9780062073484", "Murder on the Orient Express", 1934, 4),
    ("9780684801223", "The Old Man and the Sea", 1952, 5),
    ("9780061120084", "To Kill a Mockingbird", 1960, 6),
    // Same ISBN as the row above: kept on purpose, duplicates are tolerated.
    ("9780061120084", "One Hundred Years of Solitude", 1967, 7),
    ("9780553293357", "Foundation", 1951, 8),
    ("9780385490813", "The Handmaid's Tale", 1985, 9),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./liber_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Liber Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./liber_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Liber Seed Data Generator");
    println!("============================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    let (total, applied) = liber_db::migrations::migration_status(db.pool()).await?;
    println!("✓ Migrations applied ({}/{})", applied, total);

    // Check existing rows
    let existing = db.books().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} books", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    // Insert authors, remembering their store-assigned ids
    println!();
    println!("Seeding authors...");

    let mut author_ids = Vec::with_capacity(AUTHORS.len());
    for (name, (by, bm, bd), death) in AUTHORS {
        let input = NewAuthor {
            name: name.to_string(),
            birth_date: NaiveDate::from_ymd_opt(*by, *bm, *bd),
            date_of_death: (*death).and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        };
        let author = db.authors().insert(&input).await?;
        author_ids.push(author.id);
    }
    println!("✓ Seeded {} authors", author_ids.len());

    // Insert books referencing the seeded authors
    println!("Seeding books...");

    for (isbn, title, year, author_index) in BOOKS {
        let input = NewBook {
            isbn: Some(isbn.to_string()),
            title: title.to_string(),
            publication_year: Some(*year),
            author_id: author_ids[*author_index].clone(),
        };
        db.books().insert(&input).await?;
    }
    println!("✓ Seeded {} books", BOOKS.len());

    // Verify the listing queries against the fresh corpus
    println!();
    println!("Verifying listing queries...");

    let hits = db.books().search_by_title("Lord").await?;
    println!("  Search 'Lord': {} result(s)", hits.len());

    let by_title = db.books().list(BookSort::Title).await?;
    if let Some(first) = by_title.first() {
        println!("  First by title: {}", first.title);
    }

    let by_author = db.books().list(BookSort::Author).await?;
    if let Some(first) = by_author.first() {
        println!("  First by author: {}", first.author_name);
    }

    println!();
    println!("✓ Seed complete!");

    db.close().await;
    Ok(())
}
