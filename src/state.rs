//! Shared application state injected into every handler.

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::repositories::{BookRepository, PublisherRepository};
use crate::infrastructure::persistence::{SqliteBookRepository, SqlitePublisherRepository};
use crate::utils::id_generator::{IdGenerator, UuidGenerator};

/// Repositories and capabilities handlers build their use cases from.
///
/// Cloning is cheap: every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    pub books: Arc<dyn BookRepository>,
    pub publishers: Arc<dyn PublisherRepository>,
    pub ids: Arc<dyn IdGenerator>,
    pub pool: Arc<SqlitePool>,
}

impl AppState {
    /// Wires the SQLite repositories and the UUID generator around `pool`.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self::with_id_generator(pool, Arc::new(UuidGenerator))
    }

    /// Same as [`AppState::new`] with a custom id generator.
    pub fn with_id_generator(pool: Arc<SqlitePool>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            books: Arc::new(SqliteBookRepository::new(pool.clone())),
            publishers: Arc::new(SqlitePublisherRepository::new(pool.clone())),
            ids,
            pool,
        }
    }
}
