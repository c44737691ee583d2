// Copyright 2025-present Folio contributors
// SPDX-License-Identifier: Apache-2.0

//! Filterable, paginated browsing for static book catalogs.
//!
//! The catalog is loaded once, validated, and never mutated; every query
//! operation is a pure function over it. Presentation state (the active
//! filter and the pagination offset) lives with the caller and is passed
//! in on each call.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ dataset.rs  │────▶│   types.rs   │────▶│  query.rs   │
//! │ (load,      │     │ (Book,       │     │ (filter,    │
//! │  validate)  │     │  Catalog,    │     │  page,      │
//! └─────────────┘     │  QueryFilter)│     │  find_by_id)│
//!                     └──────────────┘     └─────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌──────────────┐     ┌─────────────┐
//!                     │   view.rs    │     │  paging.rs  │
//!                     │ (previews,   │     │ (Pager      │
//!                     │  theming)    │     │  state)     │
//!                     └──────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use folio::{dataset, filter_books, page, remaining_count, QueryFilter};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), folio::DatasetError> {
//! let catalog = dataset::load(Path::new("catalog.json"))?;
//!
//! let filter = QueryFilter {
//!     genre_id: Some("fantasy".to_string()),
//!     ..QueryFilter::default()
//! };
//! let matches = filter_books(&catalog, &filter);
//! let first_page = page(&matches, 0, catalog.page_size);
//! let remaining = remaining_count(&matches, 0, catalog.page_size);
//! # let _ = (first_page, remaining);
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod dataset;
mod paging;
mod query;
pub mod testing;
mod types;
mod utils;
mod view;

// Re-exports for public API
pub use dataset::{Dataset, DatasetError};
pub use paging::Pager;
pub use query::{filter_books, find_by_id, page, remaining_count};
pub use types::{Book, Catalog, QueryFilter};
pub use utils::normalize;
pub use view::{Theme, View};
