//! Route handlers
//!
//! Each route has a synchronous operation that turns request parts into a
//! `Result`, and a thin async handler that renders it. The operations hold
//! no lock across an await point.

use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use bytes::Bytes;

use crate::book::{Book, BookPatch};
use crate::error::Result;
use crate::store::{BookStore, SearchCriteria};
use super::request::{decode_book, require_json, RawId};
use super::AppState;

// =============================================================================
// Operations
// =============================================================================

/// GET /books/{id}
pub fn get_op(store: &BookStore, raw_id: &RawId) -> Result<Book> {
    let id = raw_id.parse()?;
    store.get(id)
}

/// POST /books
pub fn create_op(store: &BookStore, body: &[u8]) -> Result<Book> {
    let book = decode_book(body)?;
    store.create(book)
}

/// PUT /books/{id}
///
/// Checks run in order: media type, body, path id, id agreement, lookup.
pub fn replace_op(store: &BookStore, raw_id: &RawId, headers: &HeaderMap, body: &[u8]) -> Result<Book> {
    require_json(headers)?;
    let book = decode_book(body)?;
    let path_id = raw_id.parse()?;
    store.replace(path_id, book)
}

/// PATCH /books/{id}
///
/// The whole patch is validated before the store is touched.
pub fn patch_op(store: &BookStore, raw_id: &RawId, headers: &HeaderMap, body: &[u8]) -> Result<Book> {
    let id = raw_id.parse()?;
    require_json(headers)?;
    let patch = BookPatch::from_json(body)?;
    store.patch(id, &patch)
}

/// DELETE /books/{id}
pub fn delete_op(store: &BookStore, raw_id: &RawId) -> Result<()> {
    let id = raw_id.parse()?;
    store.delete(id)
}

// =============================================================================
// Axum Handlers
// =============================================================================

pub async fn list_books(State(state): State<AppState>) -> Response {
    state.format.render(StatusCode::OK, &state.store.list())
}

pub async fn get_book(State(state): State<AppState>, raw_id: RawId) -> Response {
    state.respond(StatusCode::OK, get_op(&state.store, &raw_id))
}

pub async fn create_book(State(state): State<AppState>, body: Bytes) -> Response {
    state.respond(StatusCode::CREATED, create_op(&state.store, &body))
}

pub async fn replace_book(
    State(state): State<AppState>,
    raw_id: RawId,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.respond(StatusCode::OK, replace_op(&state.store, &raw_id, &headers, &body))
}

pub async fn patch_book(
    State(state): State<AppState>,
    raw_id: RawId,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.respond(StatusCode::OK, patch_op(&state.store, &raw_id, &headers, &body))
}

pub async fn delete_book(State(state): State<AppState>, raw_id: RawId) -> Response {
    match delete_op(&state.store, &raw_id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => state.format.error(e),
    }
}

pub async fn search_books(
    State(state): State<AppState>,
    Query(criteria): Query<SearchCriteria>,
) -> Response {
    state.respond(StatusCode::OK, state.store.search(&criteria))
}
