//! Domain entity representing a book.

use chrono::{DateTime, Utc};

/// A book in the catalog.
///
/// The `isbn` is supplied by the caller and never changes once stored.
/// `publisher_id` must reference an existing [`super::Publisher`] when the
/// book is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher_id: String,
    pub publish_date: DateTime<Utc>,
}

impl Book {
    /// Creates a new Book instance.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let book = Book::new(
    ///     "978-0-13-468599-1".to_string(),
    ///     "The Rust Programming Language".to_string(),
    ///     "Steve Klabnik".to_string(),
    ///     publisher.id.clone(),
    ///     Utc::now(),
    /// );
    /// ```
    pub fn new(
        isbn: String,
        title: String,
        author: String,
        publisher_id: String,
        publish_date: DateTime<Utc>,
    ) -> Self {
        Self {
            isbn,
            title,
            author,
            publisher_id,
            publish_date,
        }
    }
}
