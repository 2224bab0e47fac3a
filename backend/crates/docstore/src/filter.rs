//! Query filters
//!
//! A filter is a conjunction of top-level field equalities, the only kind of
//! query the gateway issues (`{}` or `{ username: "…" }`).

use serde_json::{Map, Value};

/// Equality filter over top-level document fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    conditions: Map<String, Value>,
}

impl Filter {
    /// Filter matching every document in a collection
    pub fn all() -> Self {
        Self::default()
    }

    /// Add a `field == value` condition
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.insert(field.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Whether a document body satisfies every condition
    pub fn matches(&self, body: &Map<String, Value>) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| body.get(field) == Some(expected))
    }

    /// The filter as a JSON object, suitable for JSONB containment (`@>`)
    pub fn to_json(&self) -> Value {
        Value::Object(self.conditions.clone())
    }
}
