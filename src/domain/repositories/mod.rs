//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern. Use
//! cases depend only on the traits; concrete implementations live in
//! `crate::infrastructure::persistence`.
//!
//! # Available Repositories
//!
//! - [`BookRepository`] - Book CRUD operations
//! - [`PublisherRepository`] - Publisher creation and lookup
//!
//! # Testing
//!
//! Mock implementations are generated via `mockall` for unit tests. See
//! integration tests in `tests/repository_*.rs` for the SQLite adapters.

pub mod book_repository;
pub mod publisher_repository;

pub use book_repository::{BookError, BookFilter, BookRepository};
pub use publisher_repository::{PublisherError, PublisherRepository};

#[cfg(test)]
pub use book_repository::MockBookRepository;
#[cfg(test)]
pub use publisher_repository::MockPublisherRepository;
