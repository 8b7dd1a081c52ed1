//! Import from generic JSON.
//!
//! Used to build fixtures and to accept JSON documents from callers. Numbers
//! that fit an `i64` become Integer, every other number becomes Double.
//! Objects keep their member order.

use crate::value::{Document, Value};
use serde_json::Value as JsonValue;

impl Value {
    #[must_use]
    pub fn from_json(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(*b),
            JsonValue::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Self::Integer(i),
                (None, Some(f)) => Self::Double(f),
                (None, None) => Self::Null,
            },
            JsonValue::String(s) => Self::Text(s.clone()),
            JsonValue::Array(items) => Self::Array(items.iter().map(Self::from_json).collect()),
            JsonValue::Object(members) => {
                // object keys are already unique
                let mut doc = Document::with_capacity(members.len());
                for (name, member) in members {
                    doc.push_unchecked(name.clone(), Self::from_json(member));
                }

                Self::Document(doc)
            }
        }
    }

    /// Parse JSON text into a value. `serde_json` caps nesting while parsing,
    /// so the conversion above never recurses unboundedly.
    pub fn from_json_str(input: &str) -> Result<Self, serde_json::Error> {
        let json: JsonValue = serde_json::from_str(input)?;

        Ok(Self::from_json(&json))
    }
}
