//! Single-operation use cases grouped by entity.

pub mod book;
pub mod publisher;

pub use book::{CreateBook, CreateBookError, CreateBookInput, DeleteBook, GetBookById, GetBooks};
pub use publisher::{
    CreatePublisher, CreatePublisherInput, GetPublisherBooks, GetPublisherById,
    GetPublisherByIdInput, GetPublishers,
};
