//! Handlers for the book endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::api::dto::book::{BookItem, CreateBookRequest};
use crate::application::use_cases::{CreateBook, DeleteBook, GetBookById, GetBooks};
use crate::domain::repositories::BookError;
use crate::error::{AppError, describe_validation_errors};
use crate::state::AppState;

/// Lists all books.
///
/// # Endpoint
///
/// `GET /books`
pub async fn book_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookItem>>, AppError> {
    let books = GetBooks::new(state.books.clone())
        .execute()
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;

    Ok(Json(books.into_iter().map(BookItem::from).collect()))
}

/// Returns a single book.
///
/// # Endpoint
///
/// `GET /books/{id}`
///
/// # Errors
///
/// Returns 404 with an empty body if no book has this ISBN.
pub async fn get_book_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<BookItem>, AppError> {
    match GetBookById::new(state.books.clone()).execute(&id).await {
        Ok(book) => Ok(Json(book.into())),
        Err(BookError::NotFound(_)) => Err(AppError::NotFound),
        Err(e) => Err(AppError::internal(e.to_string())),
    }
}

/// Creates a book.
///
/// # Endpoint
///
/// `POST /books`
///
/// # Request Body
///
/// ```json
/// {
///   "isbn": "9a9eabed-0170-4be3-a289-40aa609a6d53",
///   "title": "Ron Doe",
///   "author": "Marya Blue",
///   "publisherId": "284073e2-3494-4653-8f8e-38dfe2ce664d",
///   "publishDate": "2024-03-25T00:00:00.000Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 402 if the body is malformed or fails validation.
/// Returns 402 `Publisher not found!` if `publisherId` is unknown.
/// Returns 500 `Error creating book` on storage failures (e.g. duplicate ISBN).
pub async fn create_book_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<BookItem>), AppError> {
    let Json(payload) = payload.map_err(|rejection| AppError::invalid_book(rejection.body_text()))?;

    let input = payload
        .into_input()
        .map_err(|e| AppError::invalid_book(describe_validation_errors(&e)))?;

    let book = CreateBook::new(state.books.clone(), state.publishers.clone())
        .execute(input)
        .await
        .map_err(|e| {
            if e.is_publisher_not_found() {
                AppError::invalid_book("Publisher not found!")
            } else {
                tracing::warn!(error = %e, "Book creation failed");
                AppError::internal("Error creating book")
            }
        })?;

    tracing::info!(isbn = %book.isbn, publisher_id = %book.publisher_id, "Book created");

    Ok((StatusCode::CREATED, Json(book.into())))
}

/// Deletes a book.
///
/// # Endpoint
///
/// `DELETE /books/{id}`
///
/// Deleting an ISBN that does not exist also answers 204.
///
/// # Errors
///
/// Returns 500 `Error deleting book` on storage failures.
pub async fn delete_book_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    DeleteBook::new(state.books.clone())
        .execute(&id)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, isbn = %id, "Book deletion failed");
            AppError::internal("Error deleting book")
        })?;

    Ok(StatusCode::NO_CONTENT)
}
