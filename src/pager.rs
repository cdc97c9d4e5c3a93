// File: ./src/pager.rs
// Merges fetched pages into the caller's growing result list.
use crate::model::UnifiedRecord;
use crate::query::PAGE_SIZE;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage {
    pub records: Vec<UnifiedRecord>,
    pub page_index: u32,
    pub exhausted: bool,
}

/// Appends `new_page` to `previous` for a load-more (`page_index > 1`); a page
/// index of 1 is a fresh search and drops `previous` entirely.
///
/// A short page (fewer than [`PAGE_SIZE`] records) marks the end of the data.
/// Callers must not request more after that; this is not checked here.
pub fn accumulate(
    previous: Vec<UnifiedRecord>,
    new_page: Vec<UnifiedRecord>,
    page_index: u32,
) -> ResultPage {
    let exhausted = new_page.len() < PAGE_SIZE;
    let records = if page_index <= 1 {
        new_page
    } else {
        let mut records = previous;
        records.extend(new_page);
        records
    };
    ResultPage {
        records,
        page_index: page_index.max(1),
        exhausted,
    }
}
