//! HTTP response.

use bytes::Bytes;
use futures_util::TryStreamExt;
use http_body_util::{BodyExt, Full, StreamBody};
use hyper::body::Frame;
use hyper::{Response, StatusCode, header};
use std::path::Path;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use crate::Error;

/// Boxed body type for responses.
pub type BoxBody = http_body_util::combinators::BoxBody<Bytes, Error>;

static CONTENT_TYPE_TEXT: header::HeaderValue =
    header::HeaderValue::from_static("text/plain; charset=utf-8");
static CONTENT_TYPE_HTML: header::HeaderValue =
    header::HeaderValue::from_static("text/html; charset=utf-8");

/// HTTP response.
pub struct Res {
    inner: Response<BoxBody>,
}

impl Res {
    /// Create empty 200 response.
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: Response::new(Full::new(Bytes::new()).map_err(|e| match e {}).boxed()),
        }
    }

    /// Unwrap to hyper response.
    #[inline]
    pub fn into_hyper(self) -> Response<BoxBody> {
        self.inner
    }

    /// Stream file from disk. Returns 404 if not found.
    ///
    /// The file length is declared up front so clients see a
    /// `Content-Length` instead of a chunked body.
    pub async fn file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let file = match File::open(path).await {
            Ok(f) => f,
            Err(_) => {
                return Self::builder().status(404).text("File not found");
            }
        };

        let len = match file.metadata().await {
            Ok(meta) => meta.len(),
            Err(_) => {
                return Self::builder().status(404).text("File not found");
            }
        };

        let reader_stream = ReaderStream::new(file);
        let stream_body = StreamBody::new(reader_stream.map_ok(Frame::data).map_err(Error::from));
        let boxed_body = stream_body.boxed();

        let mut res = Response::new(boxed_body);
        if let Ok(value) = header::HeaderValue::from_str(&len.to_string()) {
            res.headers_mut().insert(header::CONTENT_LENGTH, value);
        }

        Self { inner: res }
    }

    /// HTML response.
    pub fn html(body: impl Into<String>) -> Self {
        let body_str = body.into();
        let mut res = Response::new(
            Full::new(Bytes::from(body_str))
                .map_err(|e| match e {})
                .boxed(),
        );
        res.headers_mut()
            .insert(header::CONTENT_TYPE, CONTENT_TYPE_HTML.clone());
        Self { inner: res }
    }

    /// Status-only response.
    pub fn status(code: u16) -> Self {
        let mut res = Response::new(Full::new(Bytes::new()).map_err(|e| match e {}).boxed());
        *res.status_mut() = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self { inner: res }
    }

    /// Create builder.
    pub fn builder() -> ResBuilder {
        ResBuilder::new()
    }

    /// Get status code.
    pub fn status_code(&self) -> StatusCode {
        self.inner.status()
    }

    /// Add header.
    #[inline]
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            header::HeaderName::from_bytes(name.as_ref().as_bytes()),
            header::HeaderValue::from_str(value.as_ref()),
        ) {
            self.inner.headers_mut().insert(name, value);
        }
        self
    }

    /// Add the permissive CORS headers the contact page relies on.
    pub fn cors(self) -> Self {
        self.header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
    }

    /// Get headers.
    #[inline]
    pub fn headers(&self) -> &header::HeaderMap {
        self.inner.headers()
    }
}

impl Default for Res {
    fn default() -> Self {
        Self::new()
    }
}

/// Response builder with pre-allocated headers.
pub struct ResBuilder {
    status: StatusCode,
    headers: header::HeaderMap,
}

impl ResBuilder {
    /// Create builder.
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: header::HeaderMap::with_capacity(4),
        }
    }

    /// Set status code.
    pub fn status(mut self, code: u16) -> Self {
        self.status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        self
    }

    /// Add header.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        if let (Ok(name), Ok(value)) = (
            header::HeaderName::from_bytes(name.as_ref().as_bytes()),
            header::HeaderValue::from_str(value.as_ref()),
        ) {
            self.headers.insert(name, value);
        }
        self
    }

    /// Build text response.
    pub fn text(mut self, body: impl Into<String>) -> Res {
        let body_str = body.into();
        let mut res = Response::new(
            Full::new(Bytes::from(body_str))
                .map_err(|e| match e {})
                .boxed(),
        );
        *res.status_mut() = self.status;

        if !self.headers.contains_key(header::CONTENT_TYPE) {
            self.headers
                .insert(header::CONTENT_TYPE, CONTENT_TYPE_TEXT.clone());
        }

        *res.headers_mut() = self.headers;
        Res { inner: res }
    }
}

impl Default for ResBuilder {
    fn default() -> Self {
        Self::new()
    }
}
