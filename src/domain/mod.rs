//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Business rules spanning several repositories live in
//! [`crate::application::use_cases`].

pub mod entities;
pub mod repositories;
