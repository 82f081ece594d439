//! HTTP-facing error type.
//!
//! Handlers are the only layer that converts domain errors into [`AppError`];
//! use cases and repositories never see status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// Status returned for rejected book payloads.
///
/// Existing clients of `POST /books` rely on 402 rather than 400.
pub const BOOK_VALIDATION_STATUS: StatusCode = StatusCode::PAYMENT_REQUIRED;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// The request was malformed or failed schema validation.
    Validation { status: StatusCode, message: String },
    /// The addressed resource does not exist. Rendered with an empty body.
    NotFound,
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    /// A rejected book payload, answered with [`BOOK_VALIDATION_STATUS`].
    pub fn invalid_book(message: impl Into<String>) -> Self {
        Self::Validation {
            status: BOOK_VALIDATION_STATUS,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { status, .. } => *status,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match self {
            AppError::NotFound => status.into_response(),
            AppError::Validation { message, .. } | AppError::Internal { message } => {
                (status, Json(ErrorBody { error: message })).into_response()
            }
        }
    }
}

/// Flattens validator output into a single line such as
/// `author: Author required!; publishDate: Invalid publishDate!`.
///
/// Fields are named as they appear on the wire (camelCase) and listed
/// alphabetically so the message is stable.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| (camel_case(&field), errs))
        .collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                let message = e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string());
                format!("{field}: {message}")
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// `publish_date` -> `publishDate`.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;

    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }

    out
}
