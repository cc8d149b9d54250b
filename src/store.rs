//! Store Module
//!
//! The book catalogue and every operation the HTTP surface exposes.
//!
//! ## Responsibilities
//! - Keep books in insertion order
//! - Enforce id uniqueness on create
//! - Full replace vs. field-wise patch semantics
//! - Leave the catalogue untouched when an operation fails

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::book::{seed_books, Book, BookId, BookPatch};
use crate::config::Config;
use crate::error::{BookError, Result};

/// Search parameters; accepted but not consulted
pub type SearchCriteria = HashMap<String, String>;

/// The in-memory book catalogue
///
/// ## Concurrency Model
///
/// - **Writes** (create/replace/patch/delete): take the write lock for the
///   whole check-then-mutate sequence, so a duplicate check and the append it
///   guards cannot interleave with another writer
/// - **Reads** (list/get): share the read lock and never block each other
///
/// No operation suspends while holding the lock.
pub struct BookStore {
    books: RwLock<Vec<Book>>,
}

impl BookStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Create a store holding `books` in the given order
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books: RwLock::new(books),
        }
    }

    /// Create a store from config (seeded unless disabled)
    pub fn open(config: &Config) -> Self {
        if config.seed {
            let books = seed_books();
            tracing::info!("Seeded store with {} books", books.len());
            Self::with_books(books)
        } else {
            Self::new()
        }
    }

    /// All books, in store order
    pub fn list(&self) -> Vec<Book> {
        self.books.read().clone()
    }

    /// The first book with a matching id
    pub fn get(&self, id: BookId) -> Result<Book> {
        self.books
            .read()
            .iter()
            .find(|book| book.id == id)
            .cloned()
            .ok_or(BookError::NotFound(id))
    }

    /// Append a new book
    ///
    /// Fails with `Conflict` if the id is taken.
    pub fn create(&self, book: Book) -> Result<Book> {
        let mut books = self.books.write();

        if books.iter().any(|existing| existing.id == book.id) {
            tracing::warn!("Rejected create: id {} already exists", book.id);
            return Err(BookError::Conflict(book.id));
        }

        books.push(book.clone());
        tracing::debug!("Created book {}", book.id);
        Ok(book)
    }

    /// Overwrite a stored book with `book`
    ///
    /// `path_id` must equal `book.id`. Every field is replaced, so fields
    /// absent from the request end up at their zero value.
    pub fn replace(&self, path_id: BookId, book: Book) -> Result<Book> {
        if path_id != book.id {
            tracing::warn!("Rejected replace: path id {} != body id {}", path_id, book.id);
            return Err(BookError::IdMismatch {
                path: path_id,
                body: book.id,
            });
        }

        let mut books = self.books.write();
        let slot = books
            .iter_mut()
            .find(|existing| existing.id == book.id)
            .ok_or(BookError::NotFound(book.id))?;

        *slot = book.clone();
        tracing::debug!("Replaced book {}", book.id);
        Ok(book)
    }

    /// Apply a validated patch to the book with `id`
    pub fn patch(&self, id: BookId, patch: &BookPatch) -> Result<Book> {
        let mut books = self.books.write();
        let slot = books
            .iter_mut()
            .find(|existing| existing.id == id)
            .ok_or(BookError::NotFound(id))?;

        patch.apply(slot);
        tracing::debug!("Patched book {} ({} fields)", id, patch.updates().len());
        Ok(slot.clone())
    }

    /// Remove the book with `id`, keeping the order of the rest
    pub fn delete(&self, id: BookId) -> Result<()> {
        let mut books = self.books.write();
        let index = books
            .iter()
            .position(|book| book.id == id)
            .ok_or(BookError::NotFound(id))?;

        books.remove(index);
        tracing::debug!("Deleted book {}", id);
        Ok(())
    }

    /// Search is not offered; always fails with `SearchUnavailable`
    pub fn search(&self, _criteria: &SearchCriteria) -> Result<Vec<Book>> {
        Err(BookError::SearchUnavailable)
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Number of stored books
    pub fn len(&self) -> usize {
        self.books.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.read().is_empty()
    }
}

impl Default for BookStore {
    fn default() -> Self {
        Self::new()
    }
}
