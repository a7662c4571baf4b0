//! Data-fetch collaborator returning record collections for a screen.

use std::collections::HashMap;

use crate::domain::record::Record;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Supplies fresh record snapshots, e.g. from a REST endpoint.
pub trait RecordSource {
    fn fetch_records(&self, collection: &str) -> RepositoryResult<Vec<Record>>;
}

/// Accepts imported record collections, replacing any previous snapshot.
pub trait RecordStore {
    fn store_records(&mut self, collection: &str, records: Vec<Record>) -> RepositoryResult<usize>;
}

/// Named record collections held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRecordSource {
    collections: HashMap<String, Vec<Record>>,
}

impl InMemoryRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, collection: impl Into<String>, records: Vec<Record>) {
        self.collections.insert(collection.into(), records);
    }

    /// Parses a JSON array of objects and stores it under `collection`.
    pub fn insert_json(
        &mut self,
        collection: impl Into<String>,
        json: &str,
    ) -> RepositoryResult<usize> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        let count = records.len();
        self.insert(collection, records);
        Ok(count)
    }
}

impl RecordSource for InMemoryRecordSource {
    fn fetch_records(&self, collection: &str) -> RepositoryResult<Vec<Record>> {
        self.collections
            .get(collection)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(collection.to_string()))
    }
}

impl RecordStore for InMemoryRecordSource {
    fn store_records(&mut self, collection: &str, records: Vec<Record>) -> RepositoryResult<usize> {
        let count = records.len();
        self.insert(collection, records);
        Ok(count)
    }
}
