//! SQLite implementation of the publisher repository.

use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};
use std::sync::Arc;

use crate::domain::entities::Publisher;
use crate::domain::repositories::{PublisherError, PublisherRepository};
use crate::utils::db_error::{is_unique_violation, storage_message};

#[derive(Debug, FromRow)]
struct PublisherRow {
    id: String,
    name: String,
}

impl From<PublisherRow> for Publisher {
    fn from(row: PublisherRow) -> Self {
        Publisher::new(row.id, row.name)
    }
}

/// SQLite repository for publishers.
///
/// Name uniqueness is enforced by the `UNIQUE` constraint on `publishers.name`.
pub struct SqlitePublisherRepository {
    pool: Arc<SqlitePool>,
}

impl SqlitePublisherRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PublisherRepository for SqlitePublisherRepository {
    async fn get(&self, id: &str) -> Result<Publisher, PublisherError> {
        let row = sqlx::query_as::<_, PublisherRow>(
            r#"
            SELECT id, name
            FROM publishers
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, id, "Failed to fetch publisher");
            PublisherError::Query(storage_message(&e))
        })?;

        row.map(Publisher::from)
            .ok_or_else(|| PublisherError::NotFound(id.to_string()))
    }

    async fn get_many(&self) -> Result<Vec<Publisher>, PublisherError> {
        let rows = sqlx::query_as::<_, PublisherRow>("SELECT id, name FROM publishers")
            .fetch_all(self.pool.as_ref())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to list publishers");
                PublisherError::Query(storage_message(&e))
            })?;

        Ok(rows.into_iter().map(Publisher::from).collect())
    }

    async fn create(&self, publisher: &Publisher) -> Result<(), PublisherError> {
        sqlx::query("INSERT INTO publishers (id, name) VALUES (?, ?)")
            .bind(&publisher.id)
            .bind(&publisher.name)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    tracing::warn!(name = %publisher.name, "Publisher name already taken");
                } else {
                    tracing::error!(error = %e, name = %publisher.name, "Failed to create publisher");
                }
                PublisherError::Creation(storage_message(&e))
            })?;

        Ok(())
    }
}
