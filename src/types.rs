//! Common types used throughout hateoas-links
//!
//! Parameter values and the hypermedia link model shared by the parser,
//! the link builder and the axum integration.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Parameter Values
// ============================================================================

/// A single query parameter value after coercion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// Whole number (page, limit, numeric filters)
    Integer(i64),
    /// Finite decimal number
    Float(f64),
    /// Anything else, kept verbatim
    Text(String),
}

impl ParamValue {
    /// Try to coerce a raw query value to a number.
    ///
    /// Surrounding whitespace is ignored. Only values that print back to the
    /// same text are accepted, so integers beyond `i64` and decimals that
    /// `f64` cannot hold exactly return `None` instead of losing digits.
    pub fn parse_number(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(n) = trimmed.parse::<i64>() {
            return Some(Self::Integer(n));
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() && f.to_string() == trimmed => Some(Self::Float(f)),
            _ => None,
        }
    }

    /// Coerce a raw value, falling back to verbatim text
    pub fn coerce(raw: &str) -> Self {
        Self::parse_number(raw).unwrap_or_else(|| Self::Text(raw.to_string()))
    }

    /// Text value, if this is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<u64> for ParamValue {
    fn from(n: u64) -> Self {
        Self::Integer(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

// ============================================================================
// Links
// ============================================================================

/// Relation type of a navigation link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkRel {
    Home,
    #[serde(rename = "self")]
    SelfRel,
    Next,
    Prev,
}

impl LinkRel {
    /// Wire name of the relation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::SelfRel => "self",
            Self::Next => "next",
            Self::Prev => "prev",
        }
    }
}

impl fmt::Display for LinkRel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hypermedia link: `{ "rel": "...", "href": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    rel: LinkRel,
    href: String,
}

impl Link {
    /// Create a new link
    pub fn new(rel: LinkRel, href: impl Into<String>) -> Self {
        Self {
            rel,
            href: href.into(),
        }
    }

    /// Relation type
    pub fn rel(&self) -> LinkRel {
        self.rel
    }

    /// Fully-qualified URL
    pub fn href(&self) -> &str {
        &self.href
    }
}

/// Find the first link with the given relation
pub fn find_link(links: &[Link], rel: LinkRel) -> Option<&Link> {
    links.iter().find(|link| link.rel == rel)
}
