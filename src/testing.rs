//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Book, Catalog};
use chrono::{TimeZone, Utc};
use std::collections::HashMap;

/// Create a test book with the given identity and genre memberships.
///
/// This is the canonical implementation used across all tests. The
/// publication year is derived from the id so subtitles stay distinct.
pub fn make_book(id: &str, title: &str, author_id: &str, genre_ids: &[&str]) -> Book {
    let year = 1900 + (id.bytes().map(u32::from).sum::<u32>() % 100) as i32;
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author_id: author_id.to_string(),
        genre_ids: genre_ids.iter().map(|g| (*g).to_string()).collect(),
        published: Utc
            .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
            .single()
            .expect("fixture date is valid"),
        description: format!("Description for {}", title),
        image_url: format!("https://covers.example/{}.jpg", id),
        summary: format!("Summary for {}", title),
    }
}

/// Create a catalog over the given books with a page size of 4.
///
/// Author and genre registries are derived from the books so the catalog
/// always passes dataset validation: author `x` is named `Author x`,
/// genre `y` is named `Genre y`.
pub fn make_catalog(books: Vec<Book>) -> Catalog {
    make_catalog_with_page_size(books, 4)
}

/// Like [`make_catalog`] with an explicit page size.
pub fn make_catalog_with_page_size(books: Vec<Book>, page_size: usize) -> Catalog {
    let mut authors = HashMap::new();
    let mut genres = HashMap::new();
    for book in &books {
        authors
            .entry(book.author_id.clone())
            .or_insert_with(|| format!("Author {}", book.author_id));
        for genre_id in &book.genre_ids {
            genres
                .entry(genre_id.clone())
                .or_insert_with(|| format!("Genre {}", genre_id));
        }
    }
    Catalog {
        page_size,
        authors,
        genres,
        books,
    }
}
