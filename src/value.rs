//! Canonical values produced by merging a parse tree.
//!
//! A [`Tree`] is an ordinary nested structure of strings, lists and mappings.
//! Mappings keep insertion order so that serialized output is stable, but
//! equality ignores order.

use indexmap::IndexMap;
use serde::Serialize;

/// A mapping from keys to values
pub type Mapping = IndexMap<String, Value>;

/// The result of loading a document: the top-level mapping
pub type Tree = Mapping;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Scalar(String),
    /// Produced when a key or block repeats
    List(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    /// Build a mapping value from key/value pairs
    pub fn mapping<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Value::Mapping(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_scalar(&self) -> bool {
        matches!(self, Value::Scalar(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up `key` if this value is a mapping
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// The value's elements when it is a list, otherwise the value itself
    pub(crate) fn into_items(self) -> Vec<Value> {
        match self {
            Value::List(items) => items,
            other => vec![other],
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Scalar(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}
