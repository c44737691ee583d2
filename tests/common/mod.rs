//! Shared test utilities and fixtures.

#![allow(dead_code)]

use folio::Catalog;

// Re-export canonical test utilities from folio::testing
pub use folio::testing::{make_book, make_catalog, make_catalog_with_page_size};

/// The canonical fixture shelf: seven books, three authors, three genres,
/// three books per page. Insertion order is load-bearing — pagination
/// tests assume it.
pub fn shelf() -> Catalog {
    make_catalog_with_page_size(
        vec![
            make_book("earthsea", "A Wizard of Earthsea", "leguin", &["fantasy"]),
            make_book("dune", "Dune", "herbert", &["scifi"]),
            make_book("hobbit", "The Hobbit", "tolkien", &["fantasy", "classic"]),
            make_book("atuan", "The Tombs of Atuan", "leguin", &["fantasy"]),
            make_book("messiah", "Dune Messiah", "herbert", &["scifi"]),
            make_book("dispossessed", "The Dispossessed", "leguin", &["scifi", "classic"]),
            make_book("silmarillion", "The Silmarillion", "tolkien", &["fantasy"]),
        ],
        3,
    )
}

/// Ids of the given books, for order assertions.
pub fn ids<'a>(books: &[&'a folio::Book]) -> Vec<&'a str> {
    books.iter().map(|b| b.id.as_str()).collect()
}
