//! Parameter parsing module
//!
//! Normalizes incoming query values for paginated list endpoints.
//!
//! # Overview
//!
//! - `sorting` and `order` are copied only when both are present
//! - `limit` and `page` are coerced to positive integers (defaults 5 and 1)
//! - `last` is an opaque cursor, copied verbatim
//! - other keys follow the configured [`UnknownKeyPolicy`](crate::config::UnknownKeyPolicy)

mod parser;
mod types;

pub use parser::{parse_parameters, ParameterParser};
pub use types::{keys, QueryParameters};
