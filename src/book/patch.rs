//! Partial updates
//!
//! A patch arrives as a flat JSON object of string keys to string values.
//! Every key is checked against the recognized field set and every value is
//! converted before anything touches a stored record, so applying a
//! `BookPatch` can never fail halfway through.

use std::collections::HashMap;

use crate::error::{BookError, Result};
use super::{Book, BookField};

/// A single converted field assignment
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate {
    /// One of the free-text fields
    Text(BookField, String),

    /// New value for `prices`
    Price(f64),

    /// New value for `status`
    Status(bool),
}

/// A fully validated set of field assignments
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    updates: Vec<FieldUpdate>,
}

impl BookPatch {
    /// Decode a raw request body into a patch
    ///
    /// The body must be a JSON object whose values are all strings.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let fields: HashMap<String, String> = serde_json::from_slice(body)
            .map_err(|e| BookError::MalformedBody(e.to_string()))?;

        Self::from_fields(fields.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Build a patch from name/value pairs
    ///
    /// Fails on the first unknown name or unconvertible value.
    pub fn from_fields<'a, I>(fields: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let updates = fields
            .into_iter()
            .map(|(name, value)| convert(name, value))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { updates })
    }

    /// Overwrite the named fields of `book`, leaving the rest untouched
    pub fn apply(&self, book: &mut Book) {
        for update in &self.updates {
            match update {
                FieldUpdate::Text(field, value) => {
                    let slot = match field {
                        BookField::Title => &mut book.title,
                        BookField::Isbn => &mut book.isbn,
                        BookField::Language => &mut book.language,
                        BookField::Publisher => &mut book.publisher,
                        BookField::Genre => &mut book.genre,
                        BookField::Author => &mut book.author,
                        // convert() never builds Text for these
                        BookField::Price | BookField::Status => continue,
                    };
                    slot.clone_from(value);
                }
                FieldUpdate::Price(price) => book.price = *price,
                FieldUpdate::Status(status) => book.status = *status,
            }
        }
    }

    /// The converted assignments
    pub fn updates(&self) -> &[FieldUpdate] {
        &self.updates
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }
}

fn convert(name: &str, value: &str) -> Result<FieldUpdate> {
    let field: BookField = name
        .parse()
        .map_err(|_| BookError::UnexpectedField(name.to_string()))?;

    match field {
        BookField::Price => value
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .map(FieldUpdate::Price)
            .ok_or_else(|| invalid(field, value)),
        BookField::Status => parse_bool(value)
            .map(FieldUpdate::Status)
            .ok_or_else(|| invalid(field, value)),
        text => Ok(FieldUpdate::Text(text, value.to_string())),
    }
}

fn invalid(field: BookField, value: &str) -> BookError {
    BookError::InvalidFieldValue {
        field: field.wire_name(),
        value: value.to_string(),
    }
}

/// Parse a boolean from `1/0`, `t/f` or `true/false` in lower, upper or title case
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
