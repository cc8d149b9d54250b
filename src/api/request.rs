//! Request guards
//!
//! Parsing shared by the handlers: path ids, the content-type gate and
//! full-record bodies.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use axum::http::{header, HeaderMap};

use crate::book::{Book, BookId};
use crate::error::{BookError, Result};

/// The `{id}` path segment as received
///
/// Extraction never rejects. A segment the router could not decode (bad
/// percent-encoding, invalid UTF-8) is kept as an error and surfaces as
/// `InvalidId` when the handler parses it, in the same order and with the
/// same body as any other malformed id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawId(std::result::Result<String, String>);

impl RawId {
    /// Parse the segment into a book id
    pub fn parse(&self) -> Result<BookId> {
        match &self.0 {
            Ok(raw) => parse_id(raw),
            Err(reason) => Err(BookError::InvalidId(reason.clone())),
        }
    }
}

impl From<&str> for RawId {
    fn from(raw: &str) -> Self {
        Self(Ok(raw.to_string()))
    }
}

impl<S> FromRequestParts<S> for RawId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> std::result::Result<Self, Self::Rejection> {
        let segment = Path::<String>::from_request_parts(parts, state)
            .await
            .map(|Path(raw)| raw)
            .map_err(|rejection| rejection.body_text());

        Ok(Self(segment))
    }
}

/// Parse a `{id}` path segment
pub fn parse_id(raw: &str) -> Result<BookId> {
    raw.parse::<BookId>()
        .map_err(|_| BookError::InvalidId(raw.to_string()))
}

/// Require a `Content-Type` that declares a JSON payload
pub fn require_json(headers: &HeaderMap) -> Result<()> {
    let declared = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if is_json_content_type(declared) {
        Ok(())
    } else {
        Err(BookError::UnsupportedMediaType)
    }
}

/// True when the media type mentions json (`application/json`, `text/json`, `application/merge-patch+json`, ...)
pub fn is_json_content_type(value: &str) -> bool {
    value.to_ascii_lowercase().contains("json")
}

/// Decode a complete book from a request body
pub fn decode_book(body: &[u8]) -> Result<Book> {
    serde_json::from_slice(body).map_err(|e| BookError::MalformedBody(e.to_string()))
}
