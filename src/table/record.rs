//! # Records
//!
//! One row of the tabular dataset: a flat JSON object.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A mapping from field names to values.
///
/// Records are never mutated by the pipeline; pages hold clones of the
/// stored rows.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Build a record from a JSON value, if it is an object
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Raw value of a field
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Field value as text.
    ///
    /// Strings are returned verbatim, numbers and booleans are
    /// stringified. Null, absent, and composite values yield `None`.
    pub fn text(&self, field: &str) -> Option<Cow<'_, str>> {
        match self.0.get(field)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            _ => None,
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_access() {
        let record = Record::from_value(json!({
            "builder": "Twin Peaks",
            "sqft": 4232,
            "active": true,
            "notes": null
        }))
        .unwrap();

        assert_eq!(record.text("builder").as_deref(), Some("Twin Peaks"));
        assert_eq!(record.text("sqft").as_deref(), Some("4232"));
        assert_eq!(record.text("active").as_deref(), Some("true"));
        assert_eq!(record.text("notes"), None);
        assert_eq!(record.text("missing"), None);
    }

    #[test]
    fn test_non_object_rejected() {
        assert!(Record::from_value(json!([1, 2])).is_none());
        assert!(Record::from_value(json!("row")).is_none());
    }

    #[test]
    fn test_serializes_flat() {
        let record = Record::from_value(json!({"id": 1, "region": "West"})).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, json!({"id": 1, "region": "West"}));
    }
}
