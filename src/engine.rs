//! Client-side list management: free-text search, discrete filters and
//! pagination over an in-memory record snapshot.
//!
//! Every function here is pure. Inputs are borrowed and never mutated; the
//! returned collections hold clones of the selected records. Nothing in this
//! module fails: absent fields read as the empty string or as "no match", and
//! out-of-range pages are clamped.

use crate::domain::filter::FilterCriteria;
use crate::domain::query::QueryState;
use crate::domain::record::Record;
use crate::pagination::{QueryResult, total_pages};

/// Keeps the records satisfying every criterion in `filters`.
pub fn apply_filters(records: &[Record], filters: &FilterCriteria) -> Vec<Record> {
    if filters.is_empty() {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| filters.matches(record))
        .cloned()
        .collect()
}

/// Keeps the records where any of `fields` contains `term`, ignoring case.
///
/// A blank term returns the input unchanged. The term itself is not trimmed.
pub fn apply_search<S: AsRef<str>>(records: &[Record], term: &str, fields: &[S]) -> Vec<Record> {
    if term.trim().is_empty() {
        return records.to_vec();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            fields
                .iter()
                .any(|field| record.text(field.as_ref()).to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Slices out page `page` of `records`, clamping the page into
/// `[1, total_pages]`.
pub fn paginate<T: Clone>(records: &[T], page: usize, page_size: usize) -> QueryResult<T> {
    let page_size = page_size.max(1);
    let total_items = records.len();
    let total_pages = total_pages(total_items, page_size);
    let clamped = page.clamp(1, total_pages);
    if clamped != page {
        log::debug!("Clamped page {page} to {clamped} of {total_pages}");
    }

    let start = (clamped - 1) * page_size;
    let end = (start + page_size).min(total_items);
    let items = records.get(start..end).map(<[T]>::to_vec).unwrap_or_default();

    QueryResult {
        items,
        total_items,
        total_pages,
        page: clamped,
    }
}

/// Runs search, then filters, then pagination, in that fixed order.
pub fn query<S: AsRef<str>>(
    records: &[Record],
    state: &QueryState,
    searchable_fields: &[S],
) -> QueryResult<Record> {
    let searched = apply_search(records, &state.search, searchable_fields);
    let filtered = apply_filters(&searched, &state.filters);
    log::debug!(
        "List query narrowed {} records to {} (search {}, {} filters)",
        records.len(),
        filtered.len(),
        searched.len(),
        state.filters.len()
    );
    paginate(&filtered, state.page(), state.page_size())
}

/// Query engine bound to one screen's declared searchable fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQueryEngine {
    searchable_fields: Vec<String>,
}

impl ListQueryEngine {
    pub fn new<I, S>(searchable_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            searchable_fields: searchable_fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn searchable_fields(&self) -> &[String] {
        &self.searchable_fields
    }

    pub fn search(&self, records: &[Record], term: &str) -> Vec<Record> {
        apply_search(records, term, &self.searchable_fields)
    }

    pub fn query(&self, records: &[Record], state: &QueryState) -> QueryResult<Record> {
        query(records, state, &self.searchable_fields)
    }
}
