mod common;

use bizfinder::pager::accumulate;
use bizfinder::query::PAGE_SIZE;
use common::records;

#[test]
fn test_fresh_search_discards_previous() {
    let previous = records("old", 30);
    let page = accumulate(previous, records("new", 4), 1);
    assert_eq!(page.records.len(), 4);
    assert!(page.records.iter().all(|r| r.id.starts_with("new-")));
    assert_eq!(page.page_index, 1);
    assert!(page.exhausted);
}

#[test]
fn test_load_more_appends_in_order() {
    let first = accumulate(Vec::new(), records("p1", PAGE_SIZE), 1);
    assert!(!first.exhausted);

    let second = accumulate(first.records, records("p2", PAGE_SIZE), 2);
    assert_eq!(second.records.len(), 24);
    assert_eq!(second.records[0].id, "p1-0");
    assert_eq!(second.records[12].id, "p2-0");
    assert_eq!(second.page_index, 2);
    assert!(!second.exhausted);
}

#[test]
fn test_short_page_exhausts() {
    let first = accumulate(Vec::new(), records("p1", PAGE_SIZE), 1);
    let second = accumulate(first.records, records("p2", 5), 2);
    assert_eq!(second.records.len(), 17);
    assert!(second.exhausted);
}

#[test]
fn test_empty_page_exhausts() {
    let page = accumulate(records("p1", PAGE_SIZE), Vec::new(), 2);
    assert_eq!(page.records.len(), PAGE_SIZE);
    assert!(page.exhausted);
}
