//! Per-screen search, filter and page selection.

use serde::Serialize;

use crate::DEFAULT_PAGE_SIZE;
use crate::domain::filter::{Criterion, FilterCriteria};

/// Current search/filter/page selection for one screen.
///
/// Created with defaults when a screen loads, mutated on every interaction
/// and dropped with the screen. `page` and `page_size` are always at least 1.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct QueryState {
    pub search: String,
    pub filters: FilterCriteria,
    page: usize,
    page_size: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

impl QueryState {
    /// Builds an empty query for the given page. Zero values are raised to 1.
    #[must_use]
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            search: String::new(),
            filters: FilterCriteria::new(),
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    #[must_use]
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    #[must_use]
    pub fn filter(mut self, field: impl Into<String>, criterion: Criterion) -> Self {
        self.filters.set(field, criterion);
        self
    }

    #[must_use]
    pub fn filters(mut self, filters: FilterCriteria) -> Self {
        self.filters = filters;
        self
    }

    #[must_use]
    pub fn paginate(mut self, page: usize, page_size: usize) -> Self {
        self.set_page(page);
        self.set_page_size(page_size);
        self
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// Search term with surrounding whitespace removed, if any text remains.
    pub fn search_query(&self) -> Option<&str> {
        Some(self.search.trim()).filter(|term| !term.is_empty())
    }
}
