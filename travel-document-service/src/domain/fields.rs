use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Form fields as submitted by a client, keyed by their wire names
/// (`firstName`, `bagNumber`, `pnrEt`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap(BTreeMap<String, String>);

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// True when the key was submitted, even with a blank value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn contains_any(&self, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.contains_key(key))
    }

    /// Trimmed value of `key`, or `None` when absent or blank.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    /// First non-blank value among `keys`, falling back to `default`.
    pub fn lookup(&self, keys: &[&str], default: &str) -> String {
        keys.iter()
            .find_map(|key| self.value(key))
            .unwrap_or(default)
            .to_string()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flatten a JSON object into string fields.
    ///
    /// Strings are kept as-is, numbers and booleans are stringified; `null`,
    /// arrays and nested objects are dropped as if never sent.
    pub fn from_json(object: Map<String, Value>) -> Self {
        object
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                Value::Number(n) => Some((key, n.to_string())),
                Value::Bool(b) => Some((key, b.to_string())),
                Value::Null | Value::Array(_) | Value::Object(_) => None,
            })
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
