//! DTOs for the book endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::application::use_cases::CreateBookInput;
use crate::domain::entities::Book;
use crate::utils::iso_date;

/// Request body for `POST /books`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[validate(length(min = 1, message = "Isbn required!"))]
    pub isbn: String,

    #[validate(length(min = 1, message = "Title required!"))]
    pub title: String,

    #[validate(length(min = 1, message = "Author required!"))]
    pub author: String,

    #[validate(length(min = 1, message = "PublisherId required!"))]
    pub publisher_id: String,

    /// UTC date-time such as `2024-03-25T00:00:00.000Z`. Checked by
    /// [`CreateBookRequest::into_input`].
    pub publish_date: String,
}

impl CreateBookRequest {
    /// Validates every field and converts the request into use case input,
    /// parsing `publishDate` on the way.
    ///
    /// # Errors
    ///
    /// Returns all field errors at once, including `publish_date` when it is
    /// not a UTC ISO-8601 date-time.
    pub fn into_input(self) -> Result<CreateBookInput, ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

        let publish_date = parse_publish_date(&self.publish_date);
        if let Err(e) = &publish_date {
            errors.add("publish_date", e.clone());
        }

        match publish_date {
            Ok(publish_date) if errors.is_empty() => Ok(CreateBookInput {
                isbn: self.isbn,
                title: self.title,
                author: self.author,
                publisher_id: self.publisher_id,
                publish_date,
            }),
            _ => Err(errors),
        }
    }
}

fn parse_publish_date(value: &str) -> Result<DateTime<Utc>, ValidationError> {
    iso_date::parse(value).map_err(|_| {
        ValidationError::new("datetime").with_message(Cow::Borrowed("Invalid publishDate!"))
    })
}

/// JSON representation of a book.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookItem {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher_id: String,
    #[serde(serialize_with = "iso_date::serialize")]
    pub publish_date: DateTime<Utc>,
}

impl From<Book> for BookItem {
    fn from(book: Book) -> Self {
        Self {
            isbn: book.isbn,
            title: book.title,
            author: book.author,
            publisher_id: book.publisher_id,
            publish_date: book.publish_date,
        }
    }
}
