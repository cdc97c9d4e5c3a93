// File: ./src/session.rs
//! Caller-side search state: accumulated results, page counter and a
//! generation counter used to drop responses from superseded searches.
//!
//! A request is stamped with the generation current when it was issued. When
//! its response arrives after a newer `begin_search`, the generations differ
//! and the response is discarded instead of being merged.
use crate::error::FinderError;
use crate::finder::{DataSource, Fetched};
use crate::model::{SearchFilters, UnifiedRecord};
use crate::pager::{ResultPage, accumulate};

/// A page request issued by a [`SearchSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub generation: u64,
    pub page_index: u32,
    pub filters: SearchFilters,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The response belonged to the current search and was merged.
    Merged,
    /// A newer search started meanwhile; the response was dropped.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    generation: u64,
    filters: Option<SearchFilters>,
    page: ResultPage,
    source: Option<DataSource>,
    last_error: Option<FinderError>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[UnifiedRecord] {
        &self.page.records
    }

    pub fn page_index(&self) -> u32 {
        self.page.page_index
    }

    pub fn is_exhausted(&self) -> bool {
        self.page.exhausted
    }

    pub fn source(&self) -> Option<DataSource> {
        self.source
    }

    pub fn last_error(&self) -> Option<&FinderError> {
        self.last_error.as_ref()
    }

    pub fn filters(&self) -> Option<&SearchFilters> {
        self.filters.as_ref()
    }

    /// Starts a fresh search. Any request still in flight becomes stale.
    pub fn begin_search(&mut self, filters: SearchFilters) -> PageRequest {
        self.generation += 1;
        self.filters = Some(filters.clone());
        self.page = ResultPage::default();
        self.source = None;
        self.last_error = None;
        PageRequest {
            generation: self.generation,
            page_index: 1,
            filters,
        }
    }

    /// Next page of the current search, or `None` when there is nothing more to load.
    pub fn begin_load_more(&self) -> Option<PageRequest> {
        let filters = self.filters.clone()?;
        if self.page.exhausted || self.page.page_index == 0 {
            return None;
        }
        Some(PageRequest {
            generation: self.generation,
            page_index: self.page.page_index + 1,
            filters,
        })
    }

    /// Applies the outcome of `request`. Errors are returned to the caller and
    /// leave the accumulated records untouched.
    pub fn complete(
        &mut self,
        request: &PageRequest,
        result: Result<Fetched, FinderError>,
    ) -> Result<Applied, FinderError> {
        if request.generation != self.generation {
            log::debug!(
                "Dropping stale page {} (generation {} < {})",
                request.page_index,
                request.generation,
                self.generation
            );
            return Ok(Applied::Stale);
        }

        let fetched = match result {
            Ok(f) => f,
            Err(e) => {
                self.last_error = Some(e.clone());
                return Err(e);
            }
        };

        let previous = std::mem::take(&mut self.page.records);
        let mut page = accumulate(previous, fetched.records, request.page_index);
        // The sample set is a single page.
        if fetched.source == DataSource::Sample {
            page.exhausted = true;
        }
        self.page = page;
        self.source = Some(fetched.source);
        self.last_error = None;
        Ok(Applied::Merged)
    }
}
