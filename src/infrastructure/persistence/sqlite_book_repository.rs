//! SQLite implementation of the book repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::Book;
use crate::domain::repositories::{BookError, BookFilter, BookRepository};
use crate::utils::db_error::{is_unique_violation, storage_message};
use crate::utils::iso_date;

/// Row shape of the `books` table.
#[derive(Debug, FromRow)]
struct BookRow {
    isbn: String,
    title: String,
    author: String,
    publisher_id: String,
    publish_date: String,
}

impl TryFrom<BookRow> for Book {
    type Error = BookError;

    fn try_from(row: BookRow) -> Result<Self, Self::Error> {
        let publish_date = iso_date::parse(&row.publish_date).map_err(|e| {
            BookError::Query(format!(
                "invalid publish_date {:?} for book {}: {}",
                row.publish_date, row.isbn, e
            ))
        })?;

        Ok(Book::new(
            row.isbn,
            row.title,
            row.author,
            row.publisher_id,
            publish_date,
        ))
    }
}

/// SQLite repository for books.
///
/// Dates are stored as ISO-8601 text. Every sqlx error is converted into a
/// [`BookError`] at this boundary.
pub struct SqliteBookRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteBookRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookRepository for SqliteBookRepository {
    async fn get(&self, isbn: &str) -> Result<Book, BookError> {
        let row = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT isbn, title, author, publisher_id, publish_date
            FROM books
            WHERE isbn = ?
            "#,
        )
        .bind(isbn)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, isbn, "Failed to fetch book");
            BookError::Query(storage_message(&e))
        })?;

        row.ok_or_else(|| BookError::NotFound(isbn.to_string()))?
            .try_into()
    }

    async fn get_many(&self, filter: BookFilter) -> Result<Vec<Book>, BookError> {
        let rows = sqlx::query_as::<_, BookRow>(
            r#"
            SELECT isbn, title, author, publisher_id, publish_date
            FROM books
            WHERE (?1 IS NULL OR publisher_id = ?1)
            "#,
        )
        .bind(filter.publisher_id)
        .fetch_all(self.pool.as_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to list books");
            BookError::Query(storage_message(&e))
        })?;

        rows.into_iter().map(Book::try_from).collect()
    }

    async fn create(&self, book: &Book) -> Result<(), BookError> {
        sqlx::query(
            r#"
            INSERT INTO books (isbn, title, author, publisher_id, publish_date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&book.isbn)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher_id)
        .bind(iso_date::format(&book.publish_date))
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!(isbn = %book.isbn, "Book already exists");
            } else {
                tracing::error!(error = %e, isbn = %book.isbn, "Failed to create book");
            }
            BookError::Create(storage_message(&e))
        })?;

        Ok(())
    }

    async fn update(&self, book: &Book) -> Result<(), BookError> {
        sqlx::query(
            r#"
            UPDATE books SET
                title        = ?,
                author       = ?,
                publisher_id = ?,
                publish_date = ?
            WHERE isbn = ?
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.publisher_id)
        .bind(iso_date::format(&book.publish_date))
        .bind(&book.isbn)
        .execute(self.pool.as_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, isbn = %book.isbn, "Failed to update book");
            BookError::Update(storage_message(&e))
        })?;

        Ok(())
    }

    async fn delete(&self, isbn: &str) -> Result<(), BookError> {
        let result = sqlx::query("DELETE FROM books WHERE isbn = ?")
            .bind(isbn)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, isbn, "Failed to delete book");
                BookError::Delete(storage_message(&e))
            })?;

        tracing::debug!(isbn, rows = result.rows_affected(), "Book delete executed");

        Ok(())
    }
}
