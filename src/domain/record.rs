//! Loosely shaped business records (employees, branches, transfers, ...).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::domain::types::FieldValue;

/// Errors raised while turning raw payloads into [`Record`]s.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("record payload must be a JSON object")]
    NotAnObject,
}

/// One business entity as an ordered mapping from field name to scalar value.
///
/// Records are treated as immutable snapshots by the query engine. Identity is
/// up to the caller: screens that edit or delete rows keep their own id field.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(try_from = "JsonValue")]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter used by fixtures and importers.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(field.into(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// String representation of `field`, or an empty string when absent.
    pub fn text(&self, field: &str) -> String {
        self.get(field).map(ToString::to_string).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl TryFrom<JsonValue> for Record {
    type Error = RecordError;

    /// Keeps scalar members only; `null`, arrays and nested objects are
    /// dropped so the field reads as absent.
    fn try_from(value: JsonValue) -> Result<Self, Self::Error> {
        let JsonValue::Object(map) = value else {
            return Err(RecordError::NotAnObject);
        };

        let fields = map
            .into_iter()
            .filter_map(|(name, value)| {
                let scalar = match value {
                    JsonValue::Bool(_) | JsonValue::Number(_) | JsonValue::String(_) => {
                        serde_json::from_value::<FieldValue>(value).ok()
                    }
                    JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
                };
                if scalar.is_none() {
                    log::debug!("Dropping non-scalar field `{name}` from record");
                }
                scalar.map(|scalar| (name, scalar))
            })
            .collect();

        Ok(Self { fields })
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn json_object_keeps_scalars_only() {
        let record = Record::try_from(json!({
            "name": "John Smith",
            "salary": 52000,
            "active": true,
            "manager": null,
            "skills": ["payroll"],
            "branch": {"code": "HQ"}
        }))
        .unwrap();

        assert_eq!(record.len(), 3);
        assert_eq!(record.get("name"), Some(&FieldValue::from("John Smith")));
        assert_eq!(record.get("salary"), Some(&FieldValue::Number(52000.0)));
        assert!(record.get("manager").is_none());
        assert!(record.get("branch").is_none());
    }

    #[test]
    fn non_object_payload_is_rejected() {
        assert_eq!(
            Record::try_from(json!(["a", "b"])),
            Err(RecordError::NotAnObject)
        );
    }

    #[test]
    fn text_of_missing_field_is_empty() {
        let record = Record::new().with("name", "Jane Doe");
        assert_eq!(record.text("name"), "Jane Doe");
        assert_eq!(record.text("email"), "");
    }

    #[test]
    fn deserializes_array_of_records() {
        let records: Vec<Record> =
            serde_json::from_str(r#"[{"id": 1, "status": "Approved"}, {"id": 2}]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].text("status"), "Approved");
        assert_eq!(records[1].text("id"), "2");
    }

    #[test]
    fn serializes_as_flat_object() {
        let record = Record::new().with("id", 7_i64).with("name", "Branch A");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"id": 7.0, "name": "Branch A"}));
    }
}
