//! Helpers shared across layers.
//!
//! - [`id_generator`] - Identifier generation for new publishers
//! - [`iso_date`] - ISO-8601 timestamp formatting and parsing
//! - [`db_error`] - sqlx error inspection

pub mod db_error;
pub mod id_generator;
pub mod iso_date;
