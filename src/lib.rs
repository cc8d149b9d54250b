//! # Bookstore
//!
//! A small REST service over an in-memory book catalogue:
//! - Ordered catalogue with caller-assigned unique ids
//! - Full replace (PUT) and validate-then-commit partial update (PATCH)
//! - One status code per failure kind, `{"message"}` error bodies
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │                  (axum + tokio)                              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   Route Handlers                             │
//! │     (id parsing, content-type gate, body decoding)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │   BookStore   │
//!               │   (RwLock)    │
//!               └───────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod book;
pub mod store;
pub mod api;
pub mod server;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{BookError, Result};
pub use config::Config;
pub use book::{Book, BookField, BookId, BookPatch};
pub use store::BookStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the service
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
