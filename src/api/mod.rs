//! API Module
//!
//! The HTTP surface over the book store.
//!
//! ## Routes
//! ```text
//! GET    /books           list               200
//! POST   /books           create             201 | 400 | 409
//! GET    /books/search    search             503 always
//! GET    /books/{id}      get                200 | 400 | 404
//! PUT    /books/{id}      replace            200 | 400 | 404 | 415
//! PATCH  /books/{id}      partial update     200 | 400 | 404 | 415
//! DELETE /books/{id}      delete             204 | 400 | 404
//! ```
//!
//! Error bodies are `{"message": "..."}`.

mod handlers;
mod request;
mod response;

pub use handlers::{create_op, delete_op, get_op, patch_op, replace_op};
pub use request::{decode_book, is_json_content_type, parse_id, require_json, RawId};
pub use response::{status_for, ErrorBody, JsonFormat};

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::error::Result;
use crate::store::BookStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<BookStore>,
    pub format: JsonFormat,
    pub max_body_bytes: usize,
}

impl AppState {
    pub fn new(store: Arc<BookStore>, config: &Config) -> Self {
        Self {
            store,
            format: JsonFormat {
                pretty: config.pretty_json,
            },
            max_body_bytes: config.max_body_bytes,
        }
    }

    /// Render a successful value with `status`, or the error
    fn respond<T: Serialize>(&self, status: StatusCode, result: Result<T>) -> Response {
        match result {
            Ok(value) => self.format.render(status, &value),
            Err(e) => self.format.error(e),
        }
    }
}

/// Build the router for all book routes
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.max_body_bytes;

    Router::new()
        .route("/books", get(handlers::list_books).post(handlers::create_book))
        .route("/books/search", get(handlers::search_books))
        .route(
            "/books/{id}",
            get(handlers::get_book)
                .put(handlers::replace_book)
                .patch(handlers::patch_book)
                .delete(handlers::delete_book),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
