//! Query parameter map
//!
//! An insertion-ordered map of parameter names to coerced values. Order
//! matters: generated link query strings follow it.

use crate::types::ParamValue;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use url::form_urlencoded;

/// Well-known parameter names
pub mod keys {
    /// Sort field
    pub const SORTING: &str = "sorting";
    /// Sort direction
    pub const ORDER: &str = "order";
    /// Page size
    pub const LIMIT: &str = "limit";
    /// 1-based page number
    pub const PAGE: &str = "page";
    /// Opaque cursor (last seen record)
    pub const LAST: &str = "last";
    /// Cursor applied only to the next link
    pub const NEXT_LAST: &str = "nextLast";
    /// Cursor applied only to the prev link
    pub const PREV_LAST: &str = "prevLast";

    /// Keys the parser handles explicitly
    pub const KNOWN: [&str; 5] = [SORTING, ORDER, LIMIT, PAGE, LAST];

    /// Keys that never appear in self/home links
    pub const TRANSIENT: [&str; 2] = [NEXT_LAST, PREV_LAST];
}

/// Ordered query parameters for a single request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParameters {
    entries: Vec<(String, ParamValue)>,
    /// Key -> position in `entries`
    index: HashMap<String, usize>,
}

impl QueryParameters {
    /// Create an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.index.get(key).map(|&i| &self.entries[i].1)
    }

    /// Check if a key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert a value.
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
        self
    }

    /// Remove a key, returning its value
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let removed = self.index.remove(key)?;
        for position in self.index.values_mut() {
            if *position > removed {
                *position -= 1;
            }
        }
        Some(self.entries.remove(removed).1)
    }

    /// Iterate entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is the map empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ------------------------------------------------------------------------
    // Typed accessors
    // ------------------------------------------------------------------------

    /// Sort field
    pub fn sorting(&self) -> Option<&str> {
        self.get(keys::SORTING).and_then(ParamValue::as_text)
    }

    /// Sort direction
    pub fn order(&self) -> Option<&str> {
        self.get(keys::ORDER).and_then(ParamValue::as_text)
    }

    /// Page size
    pub fn limit(&self) -> Option<i64> {
        self.get(keys::LIMIT).and_then(whole_number)
    }

    /// Page number
    pub fn page(&self) -> Option<i64> {
        self.get(keys::PAGE).and_then(whole_number)
    }

    /// Cursor of the current page
    pub fn last(&self) -> Option<&str> {
        self.get(keys::LAST).and_then(ParamValue::as_text)
    }

    /// Set the cursor for the next link
    pub fn set_next_last(&mut self, cursor: impl Into<String>) -> &mut Self {
        self.insert(keys::NEXT_LAST, ParamValue::Text(cursor.into()))
    }

    /// Set the cursor for the prev link
    pub fn set_prev_last(&mut self, cursor: impl Into<String>) -> &mut Self {
        self.insert(keys::PREV_LAST, ParamValue::Text(cursor.into()))
    }

    /// Serialize as `application/x-www-form-urlencoded` (spaces become `+`, not `%20`)
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            serializer.append_pair(key, &value.to_string());
        }
        serializer.finish()
    }
}

fn whole_number(value: &ParamValue) -> Option<i64> {
    match value {
        ParamValue::Integer(n) => Some(*n),
        ParamValue::Float(x) if x.fract() == 0.0 => Some(*x as i64),
        _ => None,
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParameters
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl Serialize for QueryParameters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
