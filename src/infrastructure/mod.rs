//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer on top of
//! SQLite.
//!
//! # Modules
//!
//! - [`persistence`] - Connection pool, migrations and repository implementations

pub mod persistence;
