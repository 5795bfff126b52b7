//! Argument mappings passed to tasks and hooks

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::btree_map::{self, BTreeMap};
use std::collections::HashMap;

/// Ordered mapping of argument names to values
///
/// Handed to `invoke`, rewritten by before-hooks and finally exposed to the
/// task through its [`TaskContext`](crate::TaskContext).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Arguments {
    values: BTreeMap<String, Value>,
}

impl Arguments {
    /// An empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// String value of `key`, if it holds a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    /// Insert a value, returning the previous one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.values.iter()
    }

    /// Copy every entry of `other` into this mapping, overwriting existing keys
    pub fn merge(&mut self, other: &Arguments) {
        for (key, value) in other {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Copy the entries of `other` whose keys are not present yet
    pub fn merge_missing(&mut self, other: &Arguments) {
        for (key, value) in other {
            self.values
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
    }

    /// Render `key` as plain text, see [`render_value`]
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.values.get(key).map(render_value)
    }

    /// All values rendered as plain text (for interpolation and environment export)
    pub fn to_vars(&self) -> HashMap<String, String> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), render_value(v)))
            .collect()
    }
}

/// Render a value as plain text
///
/// Scalars render bare and null renders empty. Sequences and mappings render
/// as block YAML without the trailing newline, so they may span lines.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Tagged(tagged) => render_value(&tagged.value),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

impl<K, V> FromIterator<(K, V)> for Arguments
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Arguments {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Arguments {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl IntoIterator for Arguments {
    type Item = (String, Value);
    type IntoIter = btree_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
