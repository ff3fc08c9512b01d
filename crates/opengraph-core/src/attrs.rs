use crate::errors::OpenGraphError;
use serde_json::{Map, Value};

/// String-keyed attribute mapping supplied by the page-rendering layer.
///
/// The same shape carries both per-page attributes and the process-wide
/// defaults snapshot; [`Attrs::merged`] applies the shallow override rule
/// between the two.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attrs(Map<String, Value>);

impl Attrs {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wraps a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, OpenGraphError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(OpenGraphError::NotAnObject),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.0.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Per-key shallow merge: `attrs` win over `defaults`, nested values are
    /// taken wholesale from whichever side supplied them.
    pub fn merged(attrs: &Attrs, defaults: &Attrs) -> Attrs {
        let mut merged = defaults.0.clone();
        for (key, value) in &attrs.0 {
            merged.insert(key.clone(), value.clone());
        }
        Attrs(merged)
    }
}

impl From<Map<String, Value>> for Attrs {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
