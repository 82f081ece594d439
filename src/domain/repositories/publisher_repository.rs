//! Repository trait for publisher storage.

use crate::domain::entities::Publisher;
use async_trait::async_trait;
use thiserror::Error;

/// Errors reported by a [`PublisherRepository`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublisherError {
    #[error("publisher {0} not found")]
    NotFound(String),

    /// Carries the driver's message, e.g. a unique violation on `name`.
    #[error("{0}")]
    Creation(String),

    #[error("failed to query publishers: {0}")]
    Query(String),
}

/// Repository interface for publishers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqlitePublisherRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PublisherRepository: Send + Sync {
    /// Finds a publisher by id.
    ///
    /// # Errors
    ///
    /// Returns [`PublisherError::NotFound`] if the publisher does not exist.
    /// Returns [`PublisherError::Query`] on database errors.
    async fn get(&self, id: &str) -> Result<Publisher, PublisherError>;

    /// Lists all publishers in storage order.
    ///
    /// # Errors
    ///
    /// Returns [`PublisherError::Query`] on database errors.
    async fn get_many(&self) -> Result<Vec<Publisher>, PublisherError>;

    /// Inserts a new publisher.
    ///
    /// # Errors
    ///
    /// Returns [`PublisherError::Creation`] if the insert fails, e.g. when the
    /// name is already taken.
    async fn create(&self, publisher: &Publisher) -> Result<(), PublisherError>;
}
