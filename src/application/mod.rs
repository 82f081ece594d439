//! Application layer implementing the catalog's use cases.
//!
//! Each use case is a small stateless struct holding the repositories it
//! needs and exposing a single `execute` method. Use cases return domain
//! errors and never see HTTP types; handlers translate their outcomes.
//!
//! # Available Use Cases
//!
//! - Books: [`use_cases::CreateBook`], [`use_cases::DeleteBook`],
//!   [`use_cases::GetBookById`], [`use_cases::GetBooks`]
//! - Publishers: [`use_cases::CreatePublisher`], [`use_cases::GetPublisherById`],
//!   [`use_cases::GetPublishers`], [`use_cases::GetPublisherBooks`]

pub mod use_cases;
