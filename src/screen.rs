//! Caller-owned list state for a single screen.

use crate::domain::filter::Criterion;
use crate::domain::query::QueryState;
use crate::domain::record::Record;
use crate::engine::ListQueryEngine;
use crate::pagination::QueryResult;
use crate::repository::RecordSource;
use crate::repository::errors::RepositoryResult;

/// Holds one screen's record snapshot together with its [`QueryState`].
///
/// Every interaction mutates the state and the table is re-rendered from
/// [`ListScreen::result`]. Search and filter changes return to the first page.
#[derive(Clone, Debug, Default)]
pub struct ListScreen {
    engine: ListQueryEngine,
    records: Vec<Record>,
    state: QueryState,
}

impl ListScreen {
    pub fn new(engine: ListQueryEngine, state: QueryState) -> Self {
        Self {
            engine,
            records: Vec::new(),
            state,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Swaps in a freshly fetched snapshot and requeries.
    pub fn replace_records(&mut self, records: Vec<Record>) -> QueryResult<Record> {
        self.records = records;
        self.result()
    }

    /// Fetches `collection` from `source`, then requeries.
    ///
    /// On failure the previous snapshot is kept.
    pub fn reload<R>(
        &mut self,
        source: &R,
        collection: &str,
    ) -> RepositoryResult<QueryResult<Record>>
    where
        R: RecordSource + ?Sized,
    {
        let records = source.fetch_records(collection)?;
        Ok(self.replace_records(records))
    }

    pub fn set_search(&mut self, term: impl Into<String>) -> QueryResult<Record> {
        self.state.search = term.into();
        self.state.set_page(1);
        self.result()
    }

    pub fn set_filter(
        &mut self,
        field: impl Into<String>,
        criterion: Criterion,
    ) -> QueryResult<Record> {
        self.state.filters.set(field, criterion);
        self.state.set_page(1);
        self.result()
    }

    pub fn remove_filter(&mut self, field: &str) -> QueryResult<Record> {
        self.state.filters.remove(field);
        self.state.set_page(1);
        self.result()
    }

    pub fn clear_filters(&mut self) -> QueryResult<Record> {
        self.state.filters.clear();
        self.state.set_page(1);
        self.result()
    }

    pub fn go_to_page(&mut self, page: usize) -> QueryResult<Record> {
        self.state.set_page(page);
        self.result()
    }

    pub fn next_page(&mut self) -> QueryResult<Record> {
        self.go_to_page(self.state.page() + 1)
    }

    pub fn previous_page(&mut self) -> QueryResult<Record> {
        self.go_to_page(self.state.page().saturating_sub(1))
    }

    pub fn set_page_size(&mut self, page_size: usize) -> QueryResult<Record> {
        self.state.set_page_size(page_size);
        self.state.set_page(1);
        self.result()
    }

    /// Runs the query and writes the clamped page back into the state.
    pub fn result(&mut self) -> QueryResult<Record> {
        let result = self.engine.query(&self.records, &self.state);
        self.state.set_page(result.page);
        result
    }
}
