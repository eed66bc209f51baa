//! Query parameter parser
//!
//! Turns raw query strings into typed [`QueryParameters`]. Parsing never
//! fails: invalid numbers fall back to the configured defaults.

use super::types::{keys, QueryParameters};
use crate::config::{LinkConfig, UnknownKeyPolicy};
use crate::types::ParamValue;
use std::collections::HashMap;
use url::form_urlencoded;

/// Parses raw query values into [`QueryParameters`]
#[derive(Debug, Clone)]
pub struct ParameterParser {
    default_limit: u64,
    default_page: u64,
    unknown_keys: UnknownKeyPolicy,
}

impl Default for ParameterParser {
    fn default() -> Self {
        Self::new(&LinkConfig::default())
    }
}

impl ParameterParser {
    /// Create a parser from config
    pub fn new(config: &LinkConfig) -> Self {
        Self {
            default_limit: config.default_limit,
            default_page: config.default_page,
            unknown_keys: config.unknown_keys,
        }
    }

    /// Parse key/value pairs as delivered by a query accessor.
    ///
    /// When a key repeats, the last value wins.
    pub fn parse<I, K, V>(&self, query: I) -> QueryParameters
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let (raw, positions) = dedup_last_wins(query);
        let lookup = |key: &str| positions.get(key).map(|&i| raw[i].1.as_str());

        let mut params = QueryParameters::new();

        if let (Some(sorting), Some(order)) = (lookup(keys::SORTING), lookup(keys::ORDER)) {
            params.insert(keys::SORTING, sorting);
            params.insert(keys::ORDER, order);
        }

        if let Some(limit) = lookup(keys::LIMIT) {
            params.insert(keys::LIMIT, positive_or(limit, self.default_limit));
        }

        if let Some(page) = lookup(keys::PAGE) {
            params.insert(keys::PAGE, positive_or(page, self.default_page));
        }

        if let Some(last) = lookup(keys::LAST) {
            params.insert(keys::LAST, last);
        }

        if self.unknown_keys == UnknownKeyPolicy::Permissive {
            for (key, value) in &raw {
                if keys::KNOWN.contains(&key.as_str()) || keys::TRANSIENT.contains(&key.as_str()) {
                    continue;
                }
                params.insert(key.clone(), ParamValue::coerce(value));
            }
        }

        tracing::trace!(?params, "Parsed query parameters");
        params
    }

    /// Parse a raw `application/x-www-form-urlencoded` query string
    pub fn parse_query_string(&self, query: &str) -> QueryParameters {
        let query = query.strip_prefix('?').unwrap_or(query);
        self.parse(form_urlencoded::parse(query.as_bytes()))
    }
}

/// Parse key/value pairs with the default config
pub fn parse_parameters<I, K, V>(query: I) -> QueryParameters
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    ParameterParser::default().parse(query)
}

/// Collapse repeated keys (last value wins), keeping first-seen order
fn dedup_last_wins<I, K, V>(query: I) -> (Vec<(String, String)>, HashMap<String, usize>)
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut raw: Vec<(String, String)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for (key, value) in query {
        let (key, value) = (key.as_ref(), value.as_ref());
        match positions.get(key) {
            Some(&i) => raw[i].1 = value.to_string(),
            None => {
                positions.insert(key.to_string(), raw.len());
                raw.push((key.to_string(), value.to_string()));
            }
        }
    }
    (raw, positions)
}

/// Coerce to a positive whole number, or use the fallback
fn positive_or(raw: &str, fallback: u64) -> ParamValue {
    let trimmed = raw.trim();
    let parsed = match trimmed.parse::<i64>() {
        Ok(n) => Some(n).filter(|n| *n >= 1),
        Err(_) => trimmed
            .parse::<f64>()
            .ok()
            .filter(|x| *x >= 1.0 && x.fract() == 0.0 && *x < i64::MAX as f64)
            .map(|x| x as i64),
    };

    match parsed {
        Some(n) => ParamValue::Integer(n),
        None => {
            tracing::debug!(raw, fallback, "Invalid numeric parameter, using default");
            ParamValue::from(fallback)
        }
    }
}
