//! Field-level filter conditions applied after free-text search.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::record::Record;
use crate::domain::types::FieldValue;

/// A single field-level filter condition.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum Criterion {
    /// Case-sensitive equality with the field value.
    Exact(FieldValue),
    /// Field value must be one of the accepted values. An empty set places no
    /// restriction on the field.
    OneOf(Vec<FieldValue>),
    /// Case-insensitive containment on the field's string representation.
    Contains(String),
}

impl Criterion {
    /// Empty criteria match everything.
    pub fn is_unrestricted(&self) -> bool {
        match self {
            Criterion::Exact(value) => value.is_empty_text(),
            Criterion::OneOf(accepted) => accepted.is_empty(),
            Criterion::Contains(pattern) => pattern.is_empty(),
        }
    }

    /// Tests a possibly absent field value against this criterion.
    pub fn matches(&self, value: Option<&FieldValue>) -> bool {
        if self.is_unrestricted() {
            return true;
        }
        let Some(value) = value else {
            return false;
        };
        match self {
            Criterion::Exact(expected) => value.matches_exact(expected),
            Criterion::OneOf(accepted) => accepted.iter().any(|a| value.matches_exact(a)),
            Criterion::Contains(pattern) => value
                .to_string()
                .to_lowercase()
                .contains(&pattern.to_lowercase()),
        }
    }
}

/// Mapping from field name to criterion; all criteria must hold (logical AND).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct FilterCriteria {
    criteria: BTreeMap<String, Criterion>,
}

impl FilterCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn exact(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(field, Criterion::Exact(value.into()));
        self
    }

    #[must_use]
    pub fn one_of<V, I>(mut self, field: impl Into<String>, values: I) -> Self
    where
        V: Into<FieldValue>,
        I: IntoIterator<Item = V>,
    {
        let accepted = values.into_iter().map(Into::into).collect();
        self.set(field, Criterion::OneOf(accepted));
        self
    }

    #[must_use]
    pub fn contains(mut self, field: impl Into<String>, pattern: impl Into<String>) -> Self {
        self.set(field, Criterion::Contains(pattern.into()));
        self
    }

    /// Replaces any criterion already held for `field`.
    pub fn set(&mut self, field: impl Into<String>, criterion: Criterion) {
        self.criteria.insert(field.into(), criterion);
    }

    pub fn remove(&mut self, field: &str) -> Option<Criterion> {
        self.criteria.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&Criterion> {
        self.criteria.get(field)
    }

    pub fn clear(&mut self) {
        self.criteria.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Criterion)> {
        self.criteria.iter().map(|(field, c)| (field.as_str(), c))
    }

    /// Returns `true` if `record` satisfies every criterion.
    pub fn matches(&self, record: &Record) -> bool {
        self.criteria
            .iter()
            .all(|(field, criterion)| criterion.matches(record.get(field)))
    }
}
