//! Paginated response envelope

use crate::config::LinkConfig;
use crate::links::{LinkBuilder, RequestContext};
use crate::params::QueryParameters;
use crate::types::Link;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// One page of results plus its navigation links
///
/// Serializes as `{ "data": ..., "links": [{ "rel": ..., "href": ... }] }`.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    /// Page contents
    pub data: T,
    /// Navigation links
    pub links: Vec<Link>,
}

impl<T> Page<T> {
    /// Build a page with links from the default config
    pub fn new(data: T, ctx: &RequestContext, params: &QueryParameters, has_next: bool) -> Self {
        Self::with_config(data, &LinkConfig::default(), ctx, params, has_next)
    }

    /// Build a page with links from the given config
    pub fn with_config(
        data: T,
        config: &LinkConfig,
        ctx: &RequestContext,
        params: &QueryParameters,
        has_next: bool,
    ) -> Self {
        let links = LinkBuilder::new(config).build(ctx, params, has_next);
        Self { data, links }
    }
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
