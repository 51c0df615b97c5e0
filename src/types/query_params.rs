//! The query-string mapping sent to the timeline endpoint.

use std::collections::BTreeMap;
use std::fmt;

/// A scalar value carried in the query string.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Float(f64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(s) => write!(f, "{}", s),
            QueryValue::Integer(i) => write!(f, "{}", i),
            QueryValue::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Integer(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Integer(i64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

/// Query parameters keyed by name.
///
/// Keys are only ever inserted together with a value, so an unset option
/// never shows up as an empty or null parameter on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    values: BTreeMap<&'static str, QueryValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &'static str, value: impl Into<QueryValue>) {
        self.values.insert(key, value.into());
    }

    /// Inserts `key` only when `value` is set.
    pub fn insert_opt<V: Into<QueryValue>>(&mut self, key: &'static str, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.values.get(key)
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

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.values.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &QueryValue)> {
        self.values.iter().map(|(k, v)| (*k, v))
    }

    /// Renders the parameters as `(key, value)` string pairs for the HTTP client.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        self.iter().map(|(k, v)| (k, v.to_string())).collect()
    }
}
