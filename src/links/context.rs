//! Request context for link generation

use crate::error::{Error, Result};
use url::Url;

/// The parts of an incoming request that links are built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    path: String,
    host: String,
    secure: bool,
}

impl RequestContext {
    /// Create a context from route path, host and transport security
    pub fn new(path: impl Into<String>, host: impl Into<String>, secure: bool) -> Self {
        Self {
            path: path.into(),
            host: host.into(),
            secure,
        }
    }

    /// Derive a context from an absolute URL (`https` means secure)
    pub fn from_url(url: &Url) -> Result<Self> {
        let host = url.host_str().ok_or(Error::MissingHost)?;
        let host = match url.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        Ok(Self::new(url.path(), host, url.scheme() == "https"))
    }

    /// Route path of the current endpoint
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Host (with optional port)
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Was the request made over TLS?
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// `https` or `http`
    pub fn scheme(&self) -> &'static str {
        if self.secure {
            "https"
        } else {
            "http"
        }
    }

    /// `scheme://host/path` with one trailing slash removed
    pub fn base_url(&self) -> String {
        let path = self.path.strip_suffix('/').unwrap_or(&self.path);
        let path = path.replace('?', "%3F").replace('#', "%23");
        let separator = if path.is_empty() || path.starts_with('/') {
            ""
        } else {
            "/"
        };
        format!("{}://{}{separator}{path}", self.scheme(), self.host)
    }
}
