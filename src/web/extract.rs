//! axum extractors for request context and query parameters

use crate::config::LinkConfig;
use crate::error::{Error, Result};
use crate::links::RequestContext;
use crate::params::{ParameterParser, QueryParameters};
use async_trait::async_trait;
use axum::extract::{FromRequestParts, MatchedPath};
use axum::http::header::{HeaderMap, FORWARDED, HOST};
use axum::http::request::Parts;
use std::convert::Infallible;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";

fn config_from(parts: &Parts) -> LinkConfig {
    parts
        .extensions
        .get::<LinkConfig>()
        .cloned()
        .unwrap_or_default()
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        let config = config_from(parts);

        let path = parts
            .extensions
            .get::<MatchedPath>()
            .map_or_else(|| parts.uri.path(), MatchedPath::as_str)
            .to_string();

        let host = match parts.headers.get(HOST) {
            Some(value) => value
                .to_str()
                .map_err(|_| Error::invalid_header(HOST.as_str()))?
                .to_string(),
            None => parts
                .uri
                .authority()
                .map(ToString::to_string)
                .ok_or(Error::MissingHost)?,
        };

        let secure = parts.uri.scheme_str() == Some("https")
            || (config.trust_forwarded_proto && forwarded_https(&parts.headers));

        tracing::trace!(%path, %host, secure, "Extracted request context");
        Ok(RequestContext::new(path, host, secure))
    }
}

/// Does a proxy header report the original request as https?
fn forwarded_https(headers: &HeaderMap) -> bool {
    let x_forwarded = headers
        .get(X_FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .is_some_and(|proto| proto.trim().eq_ignore_ascii_case("https"));
    if x_forwarded {
        return true;
    }

    // Forwarded: for=192.0.2.60;proto=https;by=203.0.113.43
    headers
        .get(FORWARDED)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .is_some_and(|element| {
            element.split(';').any(|pair| {
                pair.split_once('=').is_some_and(|(key, value)| {
                    key.trim().eq_ignore_ascii_case("proto")
                        && value.trim().trim_matches('"').eq_ignore_ascii_case("https")
                })
            })
        })
}

/// Query parameters parsed from the request URI.
///
/// Never rejects; invalid values fall back to the configured defaults.
#[derive(Debug, Clone)]
pub struct PageQuery(pub QueryParameters);

#[async_trait]
impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let parser = ParameterParser::new(&config_from(parts));
        let query = parts.uri.query().unwrap_or_default();
        Ok(Self(parser.parse_query_string(query)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Request};

    fn parts(uri: &str, headers: &[(&str, &str)]) -> Parts {
        let mut builder = Request::builder().uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn test_context_from_host_header() {
        let mut parts = parts("/api/v1/users/?page=2", &[("host", "localhost:5555")]);
        let ctx = RequestContext::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(ctx.path(), "/api/v1/users/");
        assert_eq!(ctx.host(), "localhost:5555");
        assert!(!ctx.is_secure());
    }

    #[tokio::test]
    async fn test_context_from_absolute_uri() {
        let mut parts = parts("https://example.com/items", &[]);
        let ctx = RequestContext::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(ctx.host(), "example.com");
        assert!(ctx.is_secure());
    }

    #[tokio::test]
    async fn test_context_missing_host() {
        let mut parts = parts("/items", &[]);
        let err = RequestContext::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MissingHost));
    }

    #[tokio::test]
    async fn test_context_invalid_host() {
        let mut parts = parts("/items", &[]);
        parts
            .headers
            .insert(HOST, HeaderValue::from_bytes(b"caf\xe9").unwrap());
        let err = RequestContext::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidHeader { .. }));
    }

    #[tokio::test]
    async fn test_forwarded_proto_trusted() {
        let mut parts = parts(
            "/items",
            &[("host", "api.example.com"), ("x-forwarded-proto", "https")],
        );
        let ctx = RequestContext::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(ctx.is_secure());
    }

    #[tokio::test]
    async fn test_forwarded_proto_ignored_when_untrusted() {
        let mut parts = parts(
            "/items",
            &[("host", "api.example.com"), ("x-forwarded-proto", "https")],
        );
        parts.extensions.insert(LinkConfig {
            trust_forwarded_proto: false,
            ..LinkConfig::default()
        });
        let ctx = RequestContext::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(!ctx.is_secure());
    }

    #[test]
    fn test_forwarded_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            FORWARDED,
            HeaderValue::from_static("for=192.0.2.60;Proto=\"HTTPS\";by=203.0.113.43"),
        );
        assert!(forwarded_https(&headers));

        headers.insert(FORWARDED, HeaderValue::from_static("for=192.0.2.60;proto=http"));
        assert!(!forwarded_https(&headers));

        headers.insert(X_FORWARDED_PROTO, HeaderValue::from_static("https, http"));
        assert!(forwarded_https(&headers));
    }

    #[tokio::test]
    async fn test_page_query() {
        let mut parts = parts("/items?limit=abc&page=4&status=open", &[]);
        let PageQuery(params) = PageQuery::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(params.limit(), Some(5));
        assert_eq!(params.page(), Some(4));
        assert!(params.contains_key("status"));
    }

    #[tokio::test]
    async fn test_page_query_without_query() {
        let mut parts = parts("/items", &[]);
        let PageQuery(params) = PageQuery::from_request_parts(&mut parts, &()).await.unwrap();
        assert!(params.is_empty());
    }
}
