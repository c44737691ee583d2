// Copyright 2025-present Folio contributors
// SPDX-License-Identifier: Apache-2.0

//! The catalog query engine: filtering, paging, and detail lookup.
//!
//! Every function here is pure. The caller (the CLI presentation layer)
//! owns the current filter and pagination offset and passes them in on
//! each call; nothing in this module holds state between invocations.
//!
//! Filtering recomputes from the full catalog on every call. The catalog
//! is small and static, so there is no incremental diffing and no index —
//! a linear scan is both simpler and fast enough.
//!
//! # Properties
//!
//! - `filter_books` returns an order-preserving subsequence of the
//!   catalog; it removes non-matching entries and never reorders.
//! - The match-all filter returns the catalog unchanged in order and
//!   length.
//! - Concatenating consecutive `page` windows recovers the match list
//!   exactly, with no duplicates or omissions.
//! - `remaining_count(m, o, p) == 0` iff `o + p >= m.len()`.
//!
//! All four are checked in `tests/property/`.

use crate::types::{Book, Catalog, QueryFilter};
use crate::utils::normalize;

/// Return the books matching `filter`, in catalog order.
///
/// A book matches iff all three constraints hold:
/// - the normalized title contains the normalized filter title (an empty
///   filter title matches everything),
/// - the author selection is `None` or equals the book's author id,
/// - the genre selection is `None` or is a member of the book's genre
///   list.
///
/// An empty result is a normal value, not an error; the presentation
/// layer decides how to surface "no results".
pub fn filter_books<'a>(catalog: &'a Catalog, filter: &QueryFilter) -> Vec<&'a Book> {
    let title_needle = normalize(&filter.title);
    catalog
        .books
        .iter()
        .filter(|book| {
            let title_match =
                title_needle.is_empty() || normalize(&book.title).contains(&title_needle);
            let author_match = filter
                .author_id
                .as_ref()
                .is_none_or(|author_id| &book.author_id == author_id);
            let genre_match = filter
                .genre_id
                .as_ref()
                .is_none_or(|genre_id| book.genre_ids.contains(genre_id));
            title_match && author_match && genre_match
        })
        .collect()
}

/// Return the page window `[offset, offset + page_size)` over `matches`.
///
/// Out-of-range offsets clamp to an empty window instead of panicking;
/// the arithmetic saturates so even `usize::MAX` offsets are safe.
pub fn page<'a, 'b>(matches: &'b [&'a Book], offset: usize, page_size: usize) -> &'b [&'a Book] {
    let start = offset.min(matches.len());
    let end = offset.saturating_add(page_size).min(matches.len());
    &matches[start..end]
}

/// How many matches remain past the window `[offset, offset + page_size)`.
///
/// This is the number the presentation layer prints in the
/// "Show more (N)" control; zero means the control is disabled.
pub fn remaining_count(matches: &[&Book], offset: usize, page_size: usize) -> usize {
    matches.len().saturating_sub(offset.saturating_add(page_size))
}

/// Look up a book by its unique id.
///
/// A miss is a normal outcome — it signals "no detail to display", not a
/// fault.
pub fn find_by_id<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a Book> {
    catalog.books.iter().find(|book| book.id == id)
}
