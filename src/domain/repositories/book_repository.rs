//! Repository trait for book storage.

use crate::domain::entities::Book;
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a [`BookRepository`].
///
/// Storage failures carry the driver's message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookError {
    #[error("book {0} not found")]
    NotFound(String),

    #[error("failed to create book: {0}")]
    Create(String),

    #[error("failed to update book: {0}")]
    Update(String),

    #[error("failed to delete book: {0}")]
    Delete(String),

    #[error("failed to query books: {0}")]
    Query(String),
}

/// Filter for [`BookRepository::get_many`].
///
/// The default filter matches every book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub publisher_id: Option<String>,
}

impl BookFilter {
    /// Narrows the query to the books of a single publisher.
    pub fn by_publisher(publisher_id: impl Into<String>) -> Self {
        Self {
            publisher_id: Some(publisher_id.into()),
        }
    }
}

/// Repository interface for books.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteBookRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_book.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Finds a book by ISBN.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::NotFound`] if no book has this ISBN.
    /// Returns [`BookError::Query`] on database errors.
    async fn get(&self, isbn: &str) -> Result<Book, BookError>;

    /// Lists books matching `filter`, in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Query`] on database errors.
    async fn get_many(&self, filter: BookFilter) -> Result<Vec<Book>, BookError>;

    /// Inserts a new book.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Create`] if the insert fails, e.g. on a duplicate
    /// ISBN or an unknown publisher.
    async fn create(&self, book: &Book) -> Result<(), BookError>;

    /// Overwrites every attribute of the book stored under `book.isbn`.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Update`] on database errors.
    async fn update(&self, book: &Book) -> Result<(), BookError>;

    /// Deletes a book. Deleting an unknown ISBN succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`BookError::Delete`] on database errors.
    async fn delete(&self, isbn: &str) -> Result<(), BookError>;
}
