//! Link generation module
//!
//! Builds HATEOAS navigation links (`home`, `self`, `next`, `prev`) for
//! paginated list endpoints.
//!
//! # Overview
//!
//! The caller parses request parameters, fetches one page of data, and then
//! asks the [`LinkBuilder`] for links, passing whether more results exist.
//! Cursor values for the neighbouring pages are handed over through the
//! transient `nextLast` / `prevLast` parameters.

mod builder;
mod context;

pub use builder::{build_links, LinkBuilder};
pub use context::RequestContext;
