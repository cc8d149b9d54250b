//! Built-in catalogue loaded at startup

use super::Book;

/// The fixed catalogue the service starts with
pub fn seed_books() -> Vec<Book> {
    vec![
        seeded(1, "My First Book of ABC", "9789380069401", "English", "Om Books", "Educational", "Om Books Editorial Team", 203.12),
        seeded(2, "Fundamentals of Wavelets", "8989380069401", "English", "Texh Books", "technical", "Jaideva Goswami", 803.22),
        seeded(3, "Integration of the Indian States", "2789380069901", "English", "Orient", "History", "V P Menon", 299.99),
        seeded(4, "The Trial", "3789380269403", "English", "Random House", "Fiction", "Frank Kafka", 403.24),
        seeded(5, "Slaughterhouse Five", "9989380069409", "English", "Random House", "Fiction", "Kurt Vonnegut", 345.99),
        seeded(6, "Godaan", "7989380079409", "Hindi", "Rupa", "Fiction", "Premchand", 45.99),
        seeded(7, "Aavarana", "9781536682830", "Kannada", "Sahitya Bhandara", "Fiction", "S L Bhyrappa", 295.99),
    ]
}

#[allow(clippy::too_many_arguments)]
fn seeded(
    id: i64,
    title: &str,
    isbn: &str,
    language: &str,
    publisher: &str,
    genre: &str,
    author: &str,
    price: f64,
) -> Book {
    Book {
        id,
        title: title.to_string(),
        isbn: isbn.to_string(),
        language: language.to_string(),
        publisher: publisher.to_string(),
        genre: genre.to_string(),
        author: author.to_string(),
        price,
        status: true,
    }
}
