// Copyright 2025-present Folio contributors
// SPDX-License-Identifier: Apache-2.0

//! Pagination state for incremental "show more" browsing.
//!
//! The engine functions in [`crate::query`] are pure; this is the one
//! piece of state the presentation layer carries between events. The
//! machine is tiny: the offset starts at 0, advances by one page per
//! "show more", and resets to 0 whenever the active filter changes. It is
//! terminal once `remaining_count` hits zero, though nothing enforces
//! that here — advancing past the end just yields empty windows.

/// Current window position over a filtered match list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    offset: usize,
    page_size: usize,
}

impl Pager {
    /// Start at the first window.
    pub fn new(page_size: usize) -> Self {
        Pager {
            offset: 0,
            page_size,
        }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Back to the first window. Call on every filter change.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Advance one window ("show more"). Saturating, so a runaway caller
    /// cannot overflow; the resulting window is simply empty.
    pub fn advance(&mut self) {
        self.offset = self.offset.saturating_add(self.page_size);
    }

    /// Whether the window at the current offset is the last non-empty one
    /// for a match list of `matches_len` entries.
    pub fn is_exhausted(&self, matches_len: usize) -> bool {
        self.offset.saturating_add(self.page_size) >= matches_len
    }
}
