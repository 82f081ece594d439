//! SQLite repository implementations.
//!
//! Concrete implementations of the domain repository traits using SQLx.
//!
//! # Repositories
//!
//! - [`SqliteBookRepository`] - Book storage and retrieval
//! - [`SqlitePublisherRepository`] - Publisher storage and retrieval
//!
//! Connection setup and migrations live in [`database`].

pub mod database;
pub mod sqlite_book_repository;
pub mod sqlite_publisher_repository;

pub use database::{connect, migrate};
pub use sqlite_book_repository::SqliteBookRepository;
pub use sqlite_publisher_repository::SqlitePublisherRepository;
