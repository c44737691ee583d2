// Copyright 2025-present Folio contributors
// SPDX-License-Identifier: Apache-2.0

//! Text rendering for preview cards, detail views, and list controls.
//!
//! The original UI spread this glue across many near-identical variants;
//! here it is one module. Everything returns plain `String`s — the engine
//! in [`crate::query`] stays free of rendering concerns, and the binary
//! just prints what this module hands back.
//!
//! Theming follows the original day/night toggle: `Day` is the default
//! terminal palette, `Night` leans on brighter accents. Colors are only
//! emitted when stdout is a TTY and `NO_COLOR` is unset.

use crate::types::{Book, Catalog};
use std::env;

const RESET: &str = "\x1b[0m";

/// Day/night color schemes, the terminal rendition of the original CSS
/// variable pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Day,
    Night,
}

impl Theme {
    /// Pick a theme from the environment: `FOLIO_THEME=day|night`,
    /// defaulting to day (the original consulted `prefers-color-scheme`).
    pub fn detect() -> Theme {
        match env::var("FOLIO_THEME").ok().as_deref() {
            Some("night") => Theme::Night,
            _ => Theme::Day,
        }
    }

    /// Parse a user-supplied theme name, as entered in the browse session.
    pub fn parse(name: &str) -> Option<Theme> {
        match name {
            "day" => Some(Theme::Day),
            "night" => Some(Theme::Night),
            _ => None,
        }
    }

    fn title_style(self) -> &'static str {
        match self {
            Theme::Day => "\x1b[1m",        // bold
            Theme::Night => "\x1b[1;93m",   // bold bright yellow
        }
    }

    fn subtitle_style(self) -> &'static str {
        match self {
            Theme::Day => "\x1b[2m",        // dim
            Theme::Night => "\x1b[96m",     // bright cyan
        }
    }
}

/// Stateless renderer: a theme plus whether to emit ANSI styling at all.
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub theme: Theme,
    pub colored: bool,
}

impl View {
    /// Renderer for the current terminal: colors only on a TTY with
    /// `NO_COLOR` unset.
    pub fn auto(theme: Theme) -> View {
        let colored = atty::is(atty::Stream::Stdout) && env::var_os("NO_COLOR").is_none();
        View { theme, colored }
    }

    /// Renderer that never styles, for piped output and tests.
    pub fn plain() -> View {
        View {
            theme: Theme::Day,
            colored: false,
        }
    }

    fn styled(&self, style: &'static str, text: &str) -> String {
        if self.colored {
            format!("{}{}{}", style, text, RESET)
        } else {
            text.to_string()
        }
    }

    /// The `Author (Year)` line shown under every preview title.
    pub fn subtitle(&self, book: &Book, catalog: &Catalog) -> String {
        format!(
            "{} ({})",
            catalog.author_name(&book.author_id),
            book.published_year()
        )
    }

    /// One preview card as a single line:
    /// `id  title — Author (Year) [Genre, Genre]`.
    pub fn preview_line(&self, book: &Book, catalog: &Catalog) -> String {
        let genres: Vec<&str> = book
            .genre_ids
            .iter()
            .map(|g| catalog.genre_name(g))
            .collect();
        format!(
            "{}  {} — {} [{}]",
            book.id,
            self.styled(self.theme.title_style(), &book.title),
            self.styled(self.theme.subtitle_style(), &self.subtitle(book, catalog)),
            genres.join(", ")
        )
    }

    /// The full detail view for a selected preview.
    pub fn detail(&self, book: &Book, catalog: &Catalog) -> String {
        let mut out = String::new();
        out.push_str(&self.styled(self.theme.title_style(), &book.title));
        out.push('\n');
        out.push_str(&self.styled(self.theme.subtitle_style(), &self.subtitle(book, catalog)));
        out.push('\n');
        let genres: Vec<&str> = book
            .genre_ids
            .iter()
            .map(|g| catalog.genre_name(g))
            .collect();
        out.push_str(&format!("Genres: {}\n", genres.join(", ")));
        out.push_str(&format!("Cover: {}\n", book.image_url));
        out.push('\n');
        out.push_str(&book.description);
        if !book.summary.is_empty() {
            out.push_str("\n\n");
            out.push_str(&book.summary);
        }
        out
    }

    /// The "show more" control label. A zero count renders as disabled.
    pub fn show_more_label(&self, remaining: usize) -> String {
        if remaining == 0 {
            "Show more (0) — end of results".to_string()
        } else {
            format!("Show more ({})", remaining)
        }
    }

    /// Shown instead of previews when the filter matches nothing.
    pub fn no_results(&self) -> String {
        "No results found. Your filters might be too narrow.".to_string()
    }
}
