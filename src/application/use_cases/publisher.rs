//! Publisher use cases.

use crate::domain::entities::{Book, Publisher};
use crate::domain::repositories::{
    BookError, BookFilter, BookRepository, PublisherError, PublisherRepository,
};
use crate::utils::id_generator::IdGenerator;
use std::sync::Arc;

/// Input for [`CreatePublisher`].
#[derive(Debug, Clone)]
pub struct CreatePublisherInput {
    pub name: String,
}

/// Creates a publisher under a freshly generated id.
pub struct CreatePublisher {
    publishers: Arc<dyn PublisherRepository>,
    ids: Arc<dyn IdGenerator>,
}

impl CreatePublisher {
    pub fn new(publishers: Arc<dyn PublisherRepository>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { publishers, ids }
    }

    /// # Errors
    ///
    /// Returns [`PublisherError::Creation`] if the insert fails, e.g. when the
    /// name is already in use.
    pub async fn execute(&self, input: CreatePublisherInput) -> Result<Publisher, PublisherError> {
        let publisher = Publisher::new(self.ids.generate(), input.name);

        self.publishers.create(&publisher).await?;

        Ok(publisher)
    }
}

/// Input for [`GetPublisherById`].
#[derive(Debug, Clone)]
pub struct GetPublisherByIdInput {
    pub id: String,
}

/// Looks up a single publisher.
pub struct GetPublisherById {
    publishers: Arc<dyn PublisherRepository>,
}

impl GetPublisherById {
    pub fn new(publishers: Arc<dyn PublisherRepository>) -> Self {
        Self { publishers }
    }

    pub async fn execute(&self, input: GetPublisherByIdInput) -> Result<Publisher, PublisherError> {
        self.publishers.get(&input.id).await
    }
}

/// Lists every publisher.
pub struct GetPublishers {
    publishers: Arc<dyn PublisherRepository>,
}

impl GetPublishers {
    pub fn new(publishers: Arc<dyn PublisherRepository>) -> Self {
        Self { publishers }
    }

    pub async fn execute(&self) -> Result<Vec<Publisher>, PublisherError> {
        self.publishers.get_many().await
    }
}

/// Lists the books of one publisher.
///
/// The publisher itself is not looked up: an unknown id yields an empty list.
pub struct GetPublisherBooks {
    books: Arc<dyn BookRepository>,
}

impl GetPublisherBooks {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    pub async fn execute(&self, publisher_id: &str) -> Result<Vec<Book>, BookError> {
        self.books
            .get_many(BookFilter::by_publisher(publisher_id))
            .await
    }
}
