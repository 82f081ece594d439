//! Book use cases.

use crate::domain::entities::Book;
use crate::domain::repositories::{
    BookError, BookFilter, BookRepository, PublisherError, PublisherRepository,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Input for [`CreateBook`].
#[derive(Debug, Clone)]
pub struct CreateBookInput {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher_id: String,
    pub publish_date: DateTime<Utc>,
}

/// Failure of [`CreateBook`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateBookError {
    /// The publisher lookup failed; [`PublisherError::NotFound`] means the
    /// referenced publisher does not exist.
    #[error(transparent)]
    Publisher(#[from] PublisherError),

    #[error(transparent)]
    Book(#[from] BookError),
}

impl CreateBookError {
    /// Whether the book referenced a publisher that does not exist.
    pub fn is_publisher_not_found(&self) -> bool {
        matches!(self, Self::Publisher(PublisherError::NotFound(_)))
    }
}

/// Creates a book after checking that its publisher exists.
pub struct CreateBook {
    books: Arc<dyn BookRepository>,
    publishers: Arc<dyn PublisherRepository>,
}

impl CreateBook {
    pub fn new(books: Arc<dyn BookRepository>, publishers: Arc<dyn PublisherRepository>) -> Self {
        Self { books, publishers }
    }

    /// Stores a new book and returns it.
    ///
    /// The publisher lookup always completes before anything is written, so a
    /// missing publisher never leaves an orphan row behind.
    ///
    /// # Errors
    ///
    /// Returns [`CreateBookError::Publisher`] if the publisher lookup fails.
    /// Returns [`CreateBookError::Book`] if the insert fails.
    pub async fn execute(&self, input: CreateBookInput) -> Result<Book, CreateBookError> {
        self.publishers.get(&input.publisher_id).await?;

        let book = Book::new(
            input.isbn,
            input.title,
            input.author,
            input.publisher_id,
            input.publish_date,
        );

        self.books.create(&book).await?;

        Ok(book)
    }
}

/// Deletes a book by ISBN. Unknown ISBNs are not an error.
pub struct DeleteBook {
    books: Arc<dyn BookRepository>,
}

impl DeleteBook {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    pub async fn execute(&self, isbn: &str) -> Result<(), BookError> {
        self.books.delete(isbn).await
    }
}

/// Looks up a single book.
pub struct GetBookById {
    books: Arc<dyn BookRepository>,
}

impl GetBookById {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    pub async fn execute(&self, isbn: &str) -> Result<Book, BookError> {
        self.books.get(isbn).await
    }
}

/// Lists every book.
pub struct GetBooks {
    books: Arc<dyn BookRepository>,
}

impl GetBooks {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    pub async fn execute(&self) -> Result<Vec<Book>, BookError> {
        self.books.get_many(BookFilter::default()).await
    }
}
