//! Handlers for the publisher endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::book::BookItem;
use crate::api::dto::publisher::{CreatePublisherRequest, PublisherItem};
use crate::application::use_cases::{
    CreatePublisher, CreatePublisherInput, GetPublisherBooks, GetPublisherById,
    GetPublisherByIdInput, GetPublishers,
};
use crate::domain::repositories::PublisherError;
use crate::error::AppError;
use crate::state::AppState;

const INVALID_NAME: &str = "Invalid property name!";

/// Lists all publishers.
///
/// # Endpoint
///
/// `GET /publishers`
pub async fn publisher_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PublisherItem>>, AppError> {
    let publishers = GetPublishers::new(state.publishers.clone())
        .execute()
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;

    Ok(Json(publishers.into_iter().map(PublisherItem::from).collect()))
}

/// Returns a single publisher.
///
/// # Endpoint
///
/// `GET /publishers/{id}`
///
/// # Errors
///
/// Returns 404 with an empty body if the publisher does not exist.
pub async fn get_publisher_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PublisherItem>, AppError> {
    let result = GetPublisherById::new(state.publishers.clone())
        .execute(GetPublisherByIdInput { id })
        .await;

    match result {
        Ok(publisher) => Ok(Json(publisher.into())),
        Err(PublisherError::NotFound(_)) => Err(AppError::NotFound),
        Err(e) => Err(AppError::internal(e.to_string())),
    }
}

/// Lists the books of a publisher.
///
/// # Endpoint
///
/// `GET /publishers/{id}/books`
///
/// An unknown publisher id answers 200 with an empty array.
pub async fn publisher_books_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Vec<BookItem>>, AppError> {
    let books = GetPublisherBooks::new(state.books.clone())
        .execute(&id)
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;

    Ok(Json(books.into_iter().map(BookItem::from).collect()))
}

/// Creates a publisher with a generated id.
///
/// # Endpoint
///
/// `POST /publishers`
///
/// # Request Body
///
/// ```json
/// { "name": "Editora 4" }
/// ```
///
/// # Errors
///
/// Returns 400 `Invalid property name!` if `name` is missing or empty.
/// Returns 500 with the storage message if the insert fails (e.g. the name is taken).
pub async fn create_publisher_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreatePublisherRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PublisherItem>), AppError> {
    let Json(payload) = payload.map_err(|_| AppError::bad_request(INVALID_NAME))?;

    payload
        .validate()
        .map_err(|_| AppError::bad_request(INVALID_NAME))?;

    let publisher = CreatePublisher::new(state.publishers.clone(), state.ids.clone())
        .execute(CreatePublisherInput { name: payload.name })
        .await
        .map_err(|e| AppError::internal(e.to_string()))?;

    tracing::info!(id = %publisher.id, name = %publisher.name, "Publisher created");

    Ok((StatusCode::CREATED, Json(publisher.into())))
}
