//! Book Tests
//!
//! Tests for the wire representation and patch decoding.

use bookstore::book::FieldUpdate;
use bookstore::{Book, BookError, BookField, BookPatch};
use serde_json::json;

// =============================================================================
// Serialization Tests
// =============================================================================

#[test]
fn test_serialize_uses_wire_names() {
    let book = Book {
        id: 1,
        title: "T".to_string(),
        isbn: "I".to_string(),
        language: "English".to_string(),
        publisher: "P".to_string(),
        genre: "G".to_string(),
        author: "A".to_string(),
        price: 1.5,
        status: true,
    };

    let value = serde_json::to_value(&book).unwrap();

    assert_eq!(
        value,
        json!({
            "id": 1,
            "title": "T",
            "isbn": "I",
            "langauge": "English",
            "book_publishers": "P",
            "book_genre": "G",
            "book_author": "A",
            "prices": 1.5,
            "status": true
        })
    );
}

#[test]
fn test_serialize_omits_zero_values() {
    let value = serde_json::to_value(Book::new(3, "", "")).unwrap();
    assert_eq!(value, json!({ "id": 3, "title": "", "isbn": "" }));
}

#[test]
fn test_serialize_field_order() {
    let text = serde_json::to_string(&Book::new(1, "a", "b")).unwrap();
    assert_eq!(text, r#"{"id":1,"title":"a","isbn":"b"}"#);
}

#[test]
fn test_deserialize_ignores_unknown_and_defaults_missing() {
    let book: Book = serde_json::from_value(json!({
        "id": 2,
        "langauge": "Hindi",
        "prices": 7,
        "shelf": "B4"
    }))
    .unwrap();

    assert_eq!(book.id, 2);
    assert_eq!(book.title, "");
    assert_eq!(book.language, "Hindi");
    assert_eq!(book.price, 7.0);
    assert!(!book.status);
}

#[test]
fn test_deserialize_does_not_accept_correct_spelling() {
    let book: Book = serde_json::from_value(json!({ "id": 2, "language": "Hindi" })).unwrap();
    assert_eq!(book.language, "");
}

// =============================================================================
// Field Name Tests
// =============================================================================

#[test]
fn test_field_names_round_trip() {
    for field in BookField::ALL {
        assert_eq!(field.wire_name().parse::<BookField>(), Ok(field));
        assert_eq!(field.to_string(), field.wire_name());
    }
}

#[test]
fn test_unknown_field_names() {
    for name in ["id", "language", "price", "Title", ""] {
        assert!(name.parse::<BookField>().is_err(), "{name:?}");
    }
}

// =============================================================================
// Patch Decoding Tests
// =============================================================================

#[test]
fn test_patch_from_json_single_field() {
    let patch = BookPatch::from_json(br#"{"book_author": "Someone"}"#).unwrap();
    assert_eq!(
        patch.updates(),
        &[FieldUpdate::Text(BookField::Author, "Someone".to_string())]
    );
}

#[test]
fn test_patch_from_json_rejects_non_string_values() {
    for body in [r#"{"prices": 12.5}"#, r#"{"status": true}"#, r#"{"title": null}"#] {
        let result = BookPatch::from_json(body.as_bytes());
        assert!(matches!(result, Err(BookError::MalformedBody(_))), "{body}");
    }
}

#[test]
fn test_patch_from_json_rejects_nested_or_non_object() {
    for body in [r#"{"title": {"x": "y"}}"#, "[]", "\"title\"", "", "{"] {
        let result = BookPatch::from_json(body.as_bytes());
        assert!(matches!(result, Err(BookError::MalformedBody(_))), "{body:?}");
    }
}

#[test]
fn test_patch_apply_sets_each_text_field() {
    let mut book = Book::new(1, "t", "i");
    let patch = BookPatch::from_json(
        br#"{"langauge":"L","book_publishers":"P","book_genre":"G","book_author":"A"}"#,
    )
    .unwrap();

    patch.apply(&mut book);

    assert_eq!(book.language, "L");
    assert_eq!(book.publisher, "P");
    assert_eq!(book.genre, "G");
    assert_eq!(book.author, "A");
    assert_eq!(book.title, "t");
}

#[test]
fn test_patch_status_accepts_short_spellings() {
    let mut book = Book::new(1, "t", "i");

    BookPatch::from_json(br#"{"status":"T"}"#).unwrap().apply(&mut book);
    assert!(book.status);

    BookPatch::from_json(br#"{"status":"0"}"#).unwrap().apply(&mut book);
    assert!(!book.status);
}

#[test]
fn test_patch_error_messages() {
    let err = BookPatch::from_json(br#"{"prices":"abc"}"#).unwrap_err();
    assert_eq!(err.to_string(), "prices was of invalid type");

    let err = BookPatch::from_json(br#"{"colour":"red"}"#).unwrap_err();
    assert_eq!(err.to_string(), "unexpected field");
}
