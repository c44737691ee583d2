//! Page windows, remaining counts, and the show-more state machine.

use crate::common::{ids, shelf};
use folio::{filter_books, page, remaining_count, Pager, QueryFilter};

#[test]
fn spec_example_fantasy_page_and_remaining() {
    // catalog = [A(fantasy), B(scifi), C(fantasy)], genre=fantasy → [A, C];
    // page(result, 0, 1) → [A]; remaining → 1
    use crate::common::{make_book, make_catalog};
    let catalog = make_catalog(vec![
        make_book("a", "A", "auth", &["fantasy"]),
        make_book("b", "B", "auth", &["scifi"]),
        make_book("c", "C", "auth", &["fantasy"]),
    ]);
    let filter = QueryFilter {
        genre_id: Some("fantasy".to_string()),
        ..QueryFilter::default()
    };
    let matches = filter_books(&catalog, &filter);
    assert_eq!(ids(&matches), vec!["a", "c"]);
    assert_eq!(ids(page(&matches, 0, 1)), vec!["a"]);
    assert_eq!(remaining_count(&matches, 0, 1), 1);
}

#[test]
fn consecutive_windows_cover_the_match_list() {
    let catalog = shelf();
    let matches = filter_books(&catalog, &QueryFilter::any());

    let first = page(&matches, 0, 3);
    let second = page(&matches, 3, 3);
    let third = page(&matches, 6, 3);
    assert_eq!(first.len(), 3);
    assert_eq!(second.len(), 3);
    assert_eq!(third.len(), 1);
    assert_eq!(ids(third), vec!["silmarillion"]);

    let rebuilt: Vec<&str> = [first, second, third].concat().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(rebuilt, ids(&matches));
}

#[test]
fn out_of_range_offsets_clamp_to_empty() {
    let catalog = shelf();
    let matches = filter_books(&catalog, &QueryFilter::any());
    assert!(page(&matches, 7, 3).is_empty());
    assert!(page(&matches, 100, 3).is_empty());
    assert!(page(&matches, usize::MAX, usize::MAX).is_empty());
}

#[test]
fn remaining_count_is_zero_exactly_past_the_end() {
    let catalog = shelf();
    let matches = filter_books(&catalog, &QueryFilter::any());
    // 7 matches, pages of 3
    assert_eq!(remaining_count(&matches, 0, 3), 4);
    assert_eq!(remaining_count(&matches, 3, 3), 1);
    assert_eq!(remaining_count(&matches, 6, 3), 0);
    assert_eq!(remaining_count(&matches, 9, 3), 0);
}

#[test]
fn filter_change_resets_the_pager() {
    let catalog = shelf();
    let mut filter = QueryFilter::any();
    let mut pager = Pager::new(catalog.page_size);

    // Browse two pages deep, then narrow the filter.
    pager.advance();
    assert_eq!(pager.offset(), 3);

    filter.genre_id = Some("scifi".to_string());
    pager.reset();

    let matches = filter_books(&catalog, &filter);
    assert_eq!(
        ids(page(&matches, pager.offset(), pager.page_size())),
        vec!["dune", "messiah", "dispossessed"]
    );
    assert!(pager.is_exhausted(matches.len()));
}

#[test]
fn show_more_terminates_when_nothing_remains() {
    let catalog = shelf();
    let matches = filter_books(&catalog, &QueryFilter::any());
    let mut pager = Pager::new(catalog.page_size);

    let mut shown = 0;
    while !pager.is_exhausted(matches.len()) {
        shown += page(&matches, pager.offset(), pager.page_size()).len();
        pager.advance();
    }
    shown += page(&matches, pager.offset(), pager.page_size()).len();
    assert_eq!(shown, matches.len());
    assert_eq!(remaining_count(&matches, pager.offset(), pager.page_size()), 0);
}
