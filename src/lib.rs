//! # hateoas-links
//!
//! Request-parameter parsing and HATEOAS link generation for paginated
//! list endpoints.
//!
//! ## Features
//!
//! - **Parameter parsing**: `sorting`, `order`, `limit`, `page` and `last`
//!   normalized into typed, ordered [`QueryParameters`]
//! - **Link generation**: `home`, `self`, `next` and `prev` links built from
//!   the current route, host and scheme
//! - **Cursor hand-over**: `nextLast` / `prevLast` become `last` on the
//!   neighbouring links only
//! - **axum integration**: extractors and a [`Page`](web::Page) envelope
//!
//! ## Quick Start
//!
//! ```rust
//! use hateoas_links::{build_links, parse_parameters, LinkRel, RequestContext};
//!
//! let mut params = parse_parameters([("limit", "100"), ("page", "10")]);
//! params.set_next_last("def");
//!
//! let ctx = RequestContext::new("/api/v1/users", "localhost:5555", true);
//! let links = build_links(&ctx, &params, true);
//!
//! assert_eq!(links[0].rel(), LinkRel::Home);
//! assert_eq!(links[0].href(), "https://localhost:5555/api/v1/users");
//! assert_eq!(
//!     links[2].href(),
//!     "https://localhost:5555/api/v1/users?limit=100&page=11&last=def"
//! );
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types (parameter values, links)
pub mod types;

/// Parsing and link generation settings
pub mod config;

/// Query parameter parsing
pub mod params;

/// HATEOAS link generation
pub mod links;

/// axum extractors and response envelope
pub mod web;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_config, load_config_from_str, LinkConfig, PageCounter, UnknownKeyPolicy};
pub use error::{Error, Result};
pub use links::{build_links, LinkBuilder, RequestContext};
pub use params::{parse_parameters, ParameterParser, QueryParameters};
pub use types::{find_link, Link, LinkRel, ParamValue};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
