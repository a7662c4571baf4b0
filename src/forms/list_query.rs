//! Query-string form carrying a screen's search, filter and page selection.
//!
//! Recognized keys:
//!
//! - `search`, `page`, `per_page`
//! - `eq.<field>=value` exact match
//! - `in.<field>=value` set membership; repeat the key to accept more values,
//!   a bare `in.<field>=` declares an empty (unrestricted) set
//! - `like.<field>=value` case-insensitive substring
//!
//! Unknown keys are ignored.

use validator::Validate;

use crate::domain::filter::{Criterion, FilterCriteria};
use crate::domain::query::QueryState;
use crate::domain::types::{FieldName, FieldValue};
use crate::forms::FormError;
use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

const EXACT_PREFIX: &str = "eq.";
const ONE_OF_PREFIX: &str = "in.";
const CONTAINS_PREFIX: &str = "like.";

#[derive(Debug, Default, Validate)]
pub struct ListQueryForm {
    #[validate(length(max = 200))]
    pub search: Option<String>,
    pub page: Option<usize>,
    #[validate(range(min = 1, max = 500))]
    pub per_page: Option<usize>,
    pub filters: FilterCriteria,
}

/// Blank values read as absent.
fn parse_number(key: &str, value: &str) -> Result<Option<usize>, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| FormError::InvalidQuery(format!("`{key}` must be a non-negative integer")))
}

fn field_name(raw: &str) -> Result<String, FormError> {
    FieldName::new(raw)
        .map(FieldName::into_inner)
        .map_err(|_| FormError::InvalidFieldName)
}

impl ListQueryForm {
    /// Decodes an `application/x-www-form-urlencoded` query string.
    pub fn from_query_string(query: &str) -> Result<Self, FormError> {
        let pairs: Vec<(String, String)> = serde_html_form::from_str(query)
            .map_err(|err| FormError::InvalidQuery(err.to_string()))?;

        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "search" => form.search = Some(value),
                "page" => form.page = parse_number(&key, &value)?,
                "per_page" => form.per_page = parse_number(&key, &value)?,
                _ => form.push_filter(&key, value)?,
            }
        }

        Ok(form)
    }

    fn push_filter(&mut self, key: &str, value: String) -> Result<(), FormError> {
        if let Some(field) = key.strip_prefix(EXACT_PREFIX) {
            self.filters
                .set(field_name(field)?, Criterion::Exact(FieldValue::Text(value)));
        } else if let Some(field) = key.strip_prefix(CONTAINS_PREFIX) {
            self.filters.set(field_name(field)?, Criterion::Contains(value));
        } else if let Some(field) = key.strip_prefix(ONE_OF_PREFIX) {
            let field = field_name(field)?;
            let mut accepted = match self.filters.remove(&field) {
                Some(Criterion::OneOf(accepted)) => accepted,
                _ => Vec::new(),
            };
            if !value.is_empty() {
                accepted.push(FieldValue::Text(value));
            }
            self.filters.set(field, Criterion::OneOf(accepted));
        } else {
            log::debug!("Ignoring unknown list query key `{key}`");
        }
        Ok(())
    }

    /// Validates the form and builds the query state.
    ///
    /// `page=0` is raised to the first page; a missing `per_page` falls back
    /// to `default_page_size`, and any page size is capped at `max_page_size`.
    pub fn into_state(
        self,
        default_page_size: usize,
        max_page_size: usize,
    ) -> Result<QueryState, FormError> {
        self.validate()?;

        let page = self.page.unwrap_or(1);
        let page_size = self
            .per_page
            .unwrap_or(default_page_size)
            .min(max_page_size.max(1));

        Ok(QueryState::new(page, page_size)
            .search(self.search.unwrap_or_default())
            .filters(self.filters))
    }
}

impl TryFrom<ListQueryForm> for QueryState {
    type Error = FormError;

    fn try_from(form: ListQueryForm) -> Result<Self, Self::Error> {
        form.into_state(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)
    }
}
