//! API route configuration.

use crate::api::handlers::{
    book_list_handler, create_book_handler, create_publisher_handler, delete_book_handler,
    get_book_handler, get_publisher_handler, publisher_books_handler, publisher_list_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Book routes, mounted under `/books`.
///
/// # Endpoints
///
/// - `GET    /`      - List books
/// - `POST   /`      - Create a book
/// - `GET    /{id}`  - Fetch a book by ISBN
/// - `DELETE /{id}`  - Delete a book by ISBN
pub fn book_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(book_list_handler).post(create_book_handler))
        .route("/{id}", get(get_book_handler).delete(delete_book_handler))
}

/// Publisher routes, mounted under `/publishers`.
///
/// # Endpoints
///
/// - `GET  /`            - List publishers
/// - `POST /`            - Create a publisher
/// - `GET  /{id}`        - Fetch a publisher
/// - `GET  /{id}/books`  - List the publisher's books
pub fn publisher_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(publisher_list_handler).post(create_publisher_handler))
        .route("/{id}", get(get_publisher_handler))
        .route("/{id}/books", get(publisher_books_handler))
}
