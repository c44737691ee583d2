// Copyright 2025-present Folio contributors
// SPDX-License-Identifier: Apache-2.0

//! Dataset loading and validation.
//!
//! The on-disk dataset is a single JSON document shaped like the original
//! data file: `{ "booksPerPage": 12, "authors": {...}, "genres": {...},
//! "books": [...] }` (the legacy `BOOKS_PER_PAGE` key is accepted too).
//!
//! Loading is the only place referential integrity is checked. Once a
//! [`Catalog`] exists, the query engine may assume ids are unique and
//! every author/genre reference resolves.

use crate::types::{Book, Catalog};
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::Path;

/// Raw dataset as parsed from JSON, prior to validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(alias = "BOOKS_PER_PAGE")]
    pub books_per_page: usize,
    pub authors: HashMap<String, String>,
    pub genres: HashMap<String, String>,
    pub books: Vec<Book>,
}

/// Why a dataset could not be loaded or did not validate.
#[derive(Debug)]
pub enum DatasetError {
    /// The dataset file could not be read.
    Io(std::io::Error),
    /// The dataset file is not valid JSON of the expected shape.
    Parse(serde_json::Error),
    /// `booksPerPage` is zero; every page window would be empty.
    ZeroPageSize,
    /// Two books share an id, so detail lookup would be ambiguous.
    DuplicateBookId { id: String },
    /// A book references an author missing from the registry.
    UnknownAuthor { book_id: String, author_id: String },
    /// A book references a genre missing from the registry.
    UnknownGenre { book_id: String, genre_id: String },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetError::Io(e) => write!(f, "failed to read dataset: {}", e),
            DatasetError::Parse(e) => write!(f, "invalid book data: {}", e),
            DatasetError::ZeroPageSize => write!(f, "booksPerPage must be at least 1"),
            DatasetError::DuplicateBookId { id } => {
                write!(f, "duplicate book id '{}'", id)
            }
            DatasetError::UnknownAuthor { book_id, author_id } => {
                write!(f, "book '{}' references unknown author '{}'", book_id, author_id)
            }
            DatasetError::UnknownGenre { book_id, genre_id } => {
                write!(f, "book '{}' references unknown genre '{}'", book_id, genre_id)
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetError::Io(e) => Some(e),
            DatasetError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(e: std::io::Error) -> Self {
        DatasetError::Io(e)
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(e: serde_json::Error) -> Self {
        DatasetError::Parse(e)
    }
}

impl Dataset {
    /// Validate referential integrity and freeze into a [`Catalog`].
    pub fn into_catalog(self) -> Result<Catalog, DatasetError> {
        if self.books_per_page == 0 {
            return Err(DatasetError::ZeroPageSize);
        }

        let mut seen_ids: HashSet<&str> = HashSet::with_capacity(self.books.len());
        for book in &self.books {
            if !seen_ids.insert(&book.id) {
                return Err(DatasetError::DuplicateBookId {
                    id: book.id.clone(),
                });
            }
            if !self.authors.contains_key(&book.author_id) {
                return Err(DatasetError::UnknownAuthor {
                    book_id: book.id.clone(),
                    author_id: book.author_id.clone(),
                });
            }
            for genre_id in &book.genre_ids {
                if !self.genres.contains_key(genre_id) {
                    return Err(DatasetError::UnknownGenre {
                        book_id: book.id.clone(),
                        genre_id: genre_id.clone(),
                    });
                }
            }
        }

        Ok(Catalog {
            page_size: self.books_per_page,
            authors: self.authors,
            genres: self.genres,
            books: self.books,
        })
    }
}

/// Parse a dataset from a JSON string and validate it.
pub fn parse(json: &str) -> Result<Catalog, DatasetError> {
    let dataset: Dataset = serde_json::from_str(json)?;
    dataset.into_catalog()
}

/// Read, parse, and validate a dataset file.
pub fn load(path: &Path) -> Result<Catalog, DatasetError> {
    let json = fs::read_to_string(path)?;
    parse(&json)
}
