use serde::{Deserialize, Serialize};

/// Shape of the page-control window rendered under a table.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PagerWindow {
    pub left_edge: usize,
    pub left_current: usize,
    pub right_current: usize,
    pub right_edge: usize,
}

impl Default for PagerWindow {
    fn default() -> Self {
        Self {
            left_edge: 2,
            left_current: 2,
            right_current: 4,
            right_edge: 2,
        }
    }
}

/// Page numbers to render, with `None` marking an elided gap.
fn get_pages(total_pages: usize, current_page: usize, window: &PagerWindow) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = window.left_edge.saturating_add(1).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(window.left_current));
    let mid_end = current_page
        .saturating_add(window.right_current)
        .saturating_add(1)
        .min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(window.right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// `max(1, ceil(total_items / page_size))`; a zero page size counts as 1.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size.max(1)).max(1)
}

/// One page of a filtered collection plus the metadata a pager needs.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct QueryResult<T> {
    pub items: Vec<T>,
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
}

impl<T> QueryResult<T> {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page links around the current page, shaped by `window`.
    pub fn page_links(&self, window: &PagerWindow) -> Vec<Option<usize>> {
        get_pages(self.total_pages, self.page, window)
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> QueryResult<U> {
        QueryResult {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            total_pages: self.total_pages,
            page: self.page,
        }
    }
}
