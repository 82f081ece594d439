//! Core domain entities representing the business data model.
//!
//! Entities are plain immutable value records without persistence or
//! transport concerns. Conversion to storage rows happens in
//! [`crate::infrastructure::persistence`], conversion to JSON in [`crate::api::dto`].
//!
//! # Entity Types
//!
//! - [`Book`] - A book identified by its caller-supplied ISBN
//! - [`Publisher`] - A publisher identified by a generated UUID

pub mod book;
pub mod publisher;

pub use book::Book;
pub use publisher::Publisher;
