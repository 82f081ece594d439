//! # Book Catalog
//!
//! A small CRUD service for books and their publishers built with Axum and SQLite.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Entities and repository traits
//! - **Application Layer** ([`application`]) - One use case per operation
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repositories and migrations
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! A request flows route → handler (validation) → use case → repository →
//! SQLite, and each layer translates failures into the vocabulary of the
//! layer above.
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional, defaults to sqlite://.data/database.db
//! export DATABASE_URL="sqlite://.data/database.db"
//!
//! # Migrations are applied on startup
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::entities::{Book, Publisher};
    pub use crate::domain::repositories::{
        BookError, BookFilter, BookRepository, PublisherError, PublisherRepository,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
