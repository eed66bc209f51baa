//! axum integration
//!
//! - [`RequestContext`](crate::links::RequestContext) extractor (route path, host, scheme)
//! - [`PageQuery`] extractor (parsed query parameters)
//! - [`Page`] response envelope carrying `links`
//!
//! Both extractors read an optional [`LinkConfig`](crate::config::LinkConfig)
//! from request extensions, so `Router::layer(Extension(config))` applies it.

mod extract;
mod response;

pub use extract::PageQuery;
pub use response::Page;
