use serde::Serialize;

use crate::domain::record::Record;
use crate::pagination::QueryResult;

/// Data required to render a list screen's table and pager.
#[derive(Debug, Serialize)]
pub struct ListPageData {
    /// Current page of records with totals.
    pub result: QueryResult<Record>,
    /// Page links for the pager; `None` renders as an ellipsis.
    pub pages: Vec<Option<usize>>,
    /// Search query echoed back to the search box when present.
    pub search_query: Option<String>,
}
