//! Response rendering
//!
//! Every body is JSON. Errors are `{"message": "..."}` with the status code
//! chosen by `status_for`.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::BookError;

/// Error body sent to clients
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

/// HTTP status for each error kind
pub fn status_for(error: &BookError) -> StatusCode {
    match error {
        BookError::InvalidId(_)
        | BookError::MalformedBody(_)
        | BookError::IdMismatch { .. }
        | BookError::UnexpectedField(_)
        | BookError::InvalidFieldValue { .. } => StatusCode::BAD_REQUEST,
        BookError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        BookError::NotFound(_) => StatusCode::NOT_FOUND,
        BookError::Conflict(_) => StatusCode::CONFLICT,
        BookError::SearchUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        BookError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// How JSON bodies are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonFormat {
    pub pretty: bool,
}

impl JsonFormat {
    const INDENT: &'static [u8] = b"    ";

    /// Serialize `value` into a response with the given status
    pub fn render<T: Serialize>(self, status: StatusCode, value: &T) -> Response {
        match self.encode(value) {
            Ok(bytes) => {
                let mut response = (status, bytes).into_response();
                response.headers_mut().insert(
                    header::CONTENT_TYPE,
                    HeaderValue::from_static("application/json; charset=utf-8"),
                );
                response
            }
            Err(e) => {
                tracing::error!("Failed to encode response body: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }

    /// Translate an error into its status and `{message}` body
    pub fn error(self, error: BookError) -> Response {
        let status = status_for(&error);

        if error.is_client_error() {
            tracing::debug!("Request rejected ({}): {:?}", status, error);
        } else if status.is_server_error() {
            tracing::warn!("Request failed ({}): {}", status, error);
        }

        self.render(
            status,
            &ErrorBody {
                message: error.to_string(),
            },
        )
    }

    fn encode<T: Serialize>(self, value: &T) -> serde_json::Result<Vec<u8>> {
        if !self.pretty {
            return serde_json::to_vec(value);
        }

        let mut out = Vec::with_capacity(256);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(Self::INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        value.serialize(&mut serializer)?;
        Ok(out)
    }
}
