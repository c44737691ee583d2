// Copyright 2025-present Folio contributors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a book catalog.
//!
//! These types define how books, the author/genre registries, and query
//! filters fit together. The query functions in [`crate::query`] assume the
//! invariants below, so if something seems overly constrained, a property
//! test probably depends on it.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Catalog**: never mutated after construction. `books` keeps dataset
//!   insertion order, which is the default display order and the pagination
//!   order. Filtering only ever subsets it.
//!
//! - **Book**: `id` is unique within a catalog, `author_id` is a key of
//!   `Catalog::authors`, every entry of `genre_ids` is a key of
//!   `Catalog::genres`. [`crate::dataset`] enforces all three at load time.
//!
//! - **QueryFilter**: the default value matches every book. A `None`
//!   author or genre means "any", mirroring the `"any"` sentinel the
//!   original dataset filters used.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single book record, immutable after load.
///
/// Field names on the wire follow the original dataset (`author`,
/// `genres`, `published`, `image`), while the Rust names say what the
/// fields actually are: foreign keys into the catalog registries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    /// Key into [`Catalog::authors`].
    #[serde(rename = "author")]
    pub author_id: String,
    /// Keys into [`Catalog::genres`], in dataset order. A book may carry
    /// several genres; genre filtering is membership, not equality.
    #[serde(rename = "genres")]
    pub genre_ids: Vec<String>,
    /// Publication instant. The dataset stores RFC 3339 timestamps.
    pub published: DateTime<Utc>,
    pub description: String,
    #[serde(rename = "image")]
    pub image_url: String,
    #[serde(default)]
    pub summary: String,
}

impl Book {
    /// Publication year, as shown in preview subtitles.
    #[inline]
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }
}

/// The full static catalog: ordered books plus the author and genre
/// registries that resolve display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Books shown per page window. Fixed for the session.
    pub page_size: usize,
    pub authors: HashMap<String, String>,
    pub genres: HashMap<String, String>,
    pub books: Vec<Book>,
}

impl Catalog {
    /// Display name for an author id, falling back to the raw id when the
    /// registry has no entry. Lookups against a validated catalog never
    /// take the fallback.
    pub fn author_name<'a>(&'a self, author_id: &'a str) -> &'a str {
        self.authors.get(author_id).map_or(author_id, String::as_str)
    }

    /// Display name for a genre id, same fallback rule as `author_name`.
    pub fn genre_name<'a>(&'a self, genre_id: &'a str) -> &'a str {
        self.genres.get(genre_id).map_or(genre_id, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

/// A predicate over author, genre, and title substring.
///
/// `None` selections mean "any". The default filter matches the whole
/// catalog unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFilter {
    /// Case-insensitive title substring; empty means no constraint.
    pub title: String,
    pub author_id: Option<String>,
    pub genre_id: Option<String>,
}

impl QueryFilter {
    /// The match-everything filter.
    pub fn any() -> Self {
        Self::default()
    }

    /// Whether this filter constrains anything at all.
    pub fn is_unconstrained(&self) -> bool {
        self.title.trim().is_empty() && self.author_id.is_none() && self.genre_id.is_none()
    }
}
