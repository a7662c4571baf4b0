//! Strongly-typed value objects used by records and query state.
//!
//! Records arriving from the data-fetch collaborator are loosely shaped, so
//! every field value is reduced to one of a handful of scalars. The string
//! representation produced by [`FieldValue`]'s `Display` impl is what search
//! and substring criteria compare against.
use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
}

/// A single scalar value held by a record field.
///
/// Deserialization is untagged: JSON booleans and numbers map directly and
/// every JSON string stays [`FieldValue::Text`] verbatim, so search and exact
/// criteria see exactly what the backend sent.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Number(f64),
    #[serde(skip_deserializing)]
    Date(NaiveDate),
    #[serde(skip_deserializing)]
    DateTime(NaiveDateTime),
    Text(String),
}

impl FieldValue {
    /// Types a raw CSV cell.
    ///
    /// A cell becomes a boolean, number, date or datetime only when that value
    /// displays as the cell text again; `007`, `+977...`, `1e3` or `2024-3-5`
    /// stay text.
    pub fn parse(raw: &str) -> Self {
        let typed = match raw {
            "true" => Some(FieldValue::Bool(true)),
            "false" => Some(FieldValue::Bool(false)),
            _ => raw
                .parse::<f64>()
                .ok()
                .filter(|number| number.is_finite())
                .map(FieldValue::Number)
                .or_else(|| {
                    NaiveDate::parse_from_str(raw, DATE_FORMAT)
                        .ok()
                        .map(FieldValue::Date)
                })
                .or_else(|| raw.parse::<NaiveDateTime>().ok().map(FieldValue::DateTime)),
        };
        typed
            .filter(|value| value.to_string() == raw)
            .unwrap_or_else(|| FieldValue::Text(raw.to_string()))
    }

    /// Case-sensitive equality used by exact and set-membership criteria.
    ///
    /// Values of the same kind compare directly. Mixed kinds compare their
    /// string representations, so a form-supplied `"5"` equals `Number(5.0)`.
    pub fn matches_exact(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a == b,
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a == b,
            (FieldValue::Number(a), FieldValue::Number(b)) => a == b,
            (FieldValue::Date(a), FieldValue::Date(b)) => a == b,
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => a == b,
            (a, b) => a.to_string() == b.to_string(),
        }
    }

    /// Returns `true` for the empty text value.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, FieldValue::Text(text) if text.is_empty())
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Bool(value) => write!(f, "{value}"),
            FieldValue::Number(value) => write!(f, "{value}"),
            FieldValue::Date(value) => write!(f, "{}", value.format(DATE_FORMAT)),
            FieldValue::DateTime(value) => write!(f, "{}", value.format(DATE_TIME_FORMAT)),
            FieldValue::Text(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(value: NaiveDateTime) -> Self {
        FieldValue::DateTime(value)
    }
}

/// Trimmed, non-empty name of a record field.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldName(String);

impl FieldName {
    /// Trims whitespace and rejects empty inputs.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        Ok(Self(trimmed))
    }

    /// Borrow the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper returning the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for FieldName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for FieldName {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for FieldName {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<FieldName> for String {
    fn from(value: FieldName) -> Self {
        value.0
    }
}
