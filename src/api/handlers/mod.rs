//! HTTP request handlers for API endpoints.
//!
//! Each module plays the controller role for one entity: it validates the
//! raw input, runs one use case and maps the outcome to a status code.

pub mod books;
pub mod health;
pub mod publishers;

pub use books::{book_list_handler, create_book_handler, delete_book_handler, get_book_handler};
pub use health::health_handler;
pub use publishers::{
    create_publisher_handler, get_publisher_handler, publisher_books_handler,
    publisher_list_handler,
};
