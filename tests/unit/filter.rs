//! Filtering semantics: author equality, genre membership, title substring.

use crate::common::{ids, shelf};
use folio::{filter_books, find_by_id, QueryFilter};

#[test]
fn match_all_returns_full_catalog_in_order() {
    let catalog = shelf();
    let matches = filter_books(&catalog, &QueryFilter::any());
    assert_eq!(matches.len(), catalog.len());
    for (m, b) in matches.iter().zip(&catalog.books) {
        assert_eq!(m.id, b.id);
    }
}

#[test]
fn genre_filter_uses_membership_not_equality() {
    let catalog = shelf();
    let filter = QueryFilter {
        genre_id: Some("classic".to_string()),
        ..QueryFilter::default()
    };
    // "classic" is never a book's only genre in the fixture; membership
    // still has to find both carriers.
    assert_eq!(ids(&filter_books(&catalog, &filter)), vec!["hobbit", "dispossessed"]);
}

#[test]
fn author_filter_is_exact_match() {
    let catalog = shelf();
    let filter = QueryFilter {
        author_id: Some("leguin".to_string()),
        ..QueryFilter::default()
    };
    assert_eq!(
        ids(&filter_books(&catalog, &filter)),
        vec!["earthsea", "atuan", "dispossessed"]
    );
}

#[test]
fn title_filter_is_case_insensitive() {
    let catalog = shelf();
    let filter = QueryFilter {
        title: "the".to_string(),
        ..QueryFilter::default()
    };
    let matched = ids(&filter_books(&catalog, &filter));
    assert!(matched.contains(&"hobbit"));
    assert!(!matched.contains(&"dune"));
}

#[test]
fn title_filter_trims_surrounding_whitespace() {
    let catalog = shelf();
    let padded = QueryFilter {
        title: "  dune  ".to_string(),
        ..QueryFilter::default()
    };
    let bare = QueryFilter {
        title: "dune".to_string(),
        ..QueryFilter::default()
    };
    assert_eq!(
        ids(&filter_books(&catalog, &padded)),
        ids(&filter_books(&catalog, &bare))
    );
}

#[test]
fn constraints_combine_conjunctively() {
    let catalog = shelf();
    let filter = QueryFilter {
        title: "dune".to_string(),
        author_id: Some("herbert".to_string()),
        genre_id: Some("scifi".to_string()),
    };
    assert_eq!(ids(&filter_books(&catalog, &filter)), vec!["dune", "messiah"]);

    let contradiction = QueryFilter {
        title: "dune".to_string(),
        author_id: Some("tolkien".to_string()),
        genre_id: None,
    };
    assert!(filter_books(&catalog, &contradiction).is_empty());
}

#[test]
fn empty_result_is_a_value_not_an_error() {
    let catalog = shelf();
    let filter = QueryFilter {
        genre_id: Some("western".to_string()),
        ..QueryFilter::default()
    };
    assert!(filter_books(&catalog, &filter).is_empty());
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn title_filter_ignores_diacritics() {
    use crate::common::{make_book, make_catalog};
    let catalog = make_catalog(vec![make_book("soledad", "Cien Años de Soledad", "gabo", &["classic"])]);
    let filter = QueryFilter {
        title: "anos".to_string(),
        ..QueryFilter::default()
    };
    assert_eq!(filter_books(&catalog, &filter).len(), 1);
}

#[test]
fn find_by_id_returns_unique_book_or_none() {
    let catalog = shelf();
    let book = find_by_id(&catalog, "messiah").expect("fixture book");
    assert_eq!(book.title, "Dune Messiah");
    assert!(find_by_id(&catalog, "absent").is_none());
    assert!(find_by_id(&catalog, "").is_none());
}
