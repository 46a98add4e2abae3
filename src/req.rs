//! HTTP request wrapper
//!
//! [`Req`] provides ergonomic access to request data including
//! method, path, headers, and body.

use bytes::Bytes;
use http_body_util::BodyExt;
use hyper::{
    Method, Request,
    body::{Body, Incoming},
    header,
};

use crate::{Error, Result};

/// HTTP request
pub struct Req {
    inner: Request<Incoming>,
}

impl Req {
    /// Create from hyper request
    pub fn from_hyper(inner: Request<Incoming>) -> Self {
        Self { inner }
    }

    /// Get the HTTP method
    pub fn method(&self) -> &Method {
        self.inner.method()
    }

    /// Get the request path
    pub fn path(&self) -> &str {
        self.inner.uri().path()
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name).and_then(|v| v.to_str().ok())
    }

    /// Get the content type
    pub fn content_type(&self) -> Option<&str> {
        self.header(header::CONTENT_TYPE.as_str())
    }

    /// Get the declared `Content-Length`, if present and parseable.
    pub fn content_length(&self) -> Option<usize> {
        self.header(header::CONTENT_LENGTH.as_str())
            .and_then(|v| v.trim().parse().ok())
    }

    /// Read the body, bounded by the declared length (consumes the body).
    ///
    /// At most `declared_len` bytes are returned; hyper already frames
    /// http1 bodies by `Content-Length`, the truncation is only for
    /// streams that over-deliver.
    pub(crate) async fn read_body(&mut self, declared_len: usize) -> Result<Bytes> {
        let body = self.inner.body_mut();

        let upper = body.size_hint().upper().unwrap_or(u64::MAX);
        if upper > declared_len as u64 {
            return Err(Error::Custom(format!(
                "Request body larger than declared Content-Length ({} bytes)",
                declared_len
            )));
        }

        let collected = body
            .collect()
            .await
            .map_err(|e| Error::Custom(format!("Failed to read body: {}", e)))?;

        let mut bytes = collected.to_bytes();
        if bytes.len() > declared_len {
            bytes = bytes.slice(..declared_len);
        }
        Ok(bytes)
    }
}
