//! Book Module
//!
//! The book record and its wire representation.
//!
//! ## Wire Format
//! ```text
//! {
//!   "id": 1,                       always present
//!   "title": "...",                always present
//!   "isbn": "...",                 always present
//!   "langauge": "...",             omitted when empty
//!   "book_publishers": "...",      omitted when empty
//!   "book_genre": "...",           omitted when empty
//!   "book_author": "...",          omitted when empty
//!   "prices": 203.12,              omitted when 0
//!   "status": true                 omitted when false
//! }
//! ```
//!
//! The misspelled `langauge` key is part of the public format and must not be
//! corrected. On input every field is optional and falls back to its zero
//! value; unknown keys are ignored.

mod patch;
mod seed;

pub use patch::{parse_bool, BookPatch, FieldUpdate};
pub use seed::seed_books;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier assigned by the caller
pub type BookId = i64;

/// A bibliographic record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Book {
    pub id: BookId,

    pub title: String,

    pub isbn: String,

    #[serde(rename = "langauge", skip_serializing_if = "String::is_empty")]
    pub language: String,

    #[serde(rename = "book_publishers", skip_serializing_if = "String::is_empty")]
    pub publisher: String,

    #[serde(rename = "book_genre", skip_serializing_if = "String::is_empty")]
    pub genre: String,

    #[serde(rename = "book_author", skip_serializing_if = "String::is_empty")]
    pub author: String,

    #[serde(rename = "prices", skip_serializing_if = "is_zero")]
    pub price: f64,

    #[serde(skip_serializing_if = "is_false")]
    pub status: bool,
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Book {
    /// Create a book with only the required fields set
    pub fn new(id: BookId, title: impl Into<String>, isbn: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            isbn: isbn.into(),
            ..Self::default()
        }
    }
}

/// Fields that a partial update may name, keyed by their wire names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookField {
    Title,
    Isbn,
    Language,
    Publisher,
    Genre,
    Author,
    Price,
    Status,
}

impl BookField {
    /// Every patchable field, in wire order
    pub const ALL: [BookField; 8] = [
        BookField::Title,
        BookField::Isbn,
        BookField::Language,
        BookField::Publisher,
        BookField::Genre,
        BookField::Author,
        BookField::Price,
        BookField::Status,
    ];

    /// The JSON key for this field
    pub fn wire_name(self) -> &'static str {
        match self {
            BookField::Title => "title",
            BookField::Isbn => "isbn",
            BookField::Language => "langauge",
            BookField::Publisher => "book_publishers",
            BookField::Genre => "book_genre",
            BookField::Author => "book_author",
            BookField::Price => "prices",
            BookField::Status => "status",
        }
    }
}

impl FromStr for BookField {
    type Err = ();

    fn from_str(name: &str) -> std::result::Result<Self, Self::Err> {
        BookField::ALL
            .into_iter()
            .find(|field| field.wire_name() == name)
            .ok_or(())
    }
}

impl fmt::Display for BookField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}
