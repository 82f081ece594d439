//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs use Serde for deserialization and validator for schema
//! checks; response DTOs render entities in the camelCase wire format.

pub mod book;
pub mod health;
pub mod publisher;
