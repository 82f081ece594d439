#![allow(dead_code)]

use axum_test::TestServer;
use book_catalog::domain::entities::{Book, Publisher};
use book_catalog::domain::repositories::{BookRepository, PublisherRepository};
use book_catalog::infrastructure::persistence::{SqliteBookRepository, SqlitePublisherRepository};
use book_catalog::routes::router;
use book_catalog::state::AppState;
use book_catalog::utils::id_generator::FixedIdGenerator;
use book_catalog::utils::iso_date;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use std::sync::Arc;

pub const PUBLISH_DATE: &str = "2024-03-25T00:00:00.000Z";

pub const BOOK_ISBNS: [&str; 3] = [
    "34329158-c817-418b-960e-4d784f2927df",
    "f980683c-0987-4eb1-82a2-8a3fa61fd9f9",
    "672a6656-8969-4f41-a783-009782f116f6",
];

pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool))
}

pub fn make_server(pool: SqlitePool) -> TestServer {
    TestServer::new(router(create_test_state(pool))).unwrap()
}

pub async fn create_test_publisher(pool: &SqlitePool, id: &str, name: &str) -> Publisher {
    let repo = SqlitePublisherRepository::new(Arc::new(pool.clone()));
    let publisher = Publisher::new(id.to_string(), name.to_string());
    repo.create(&publisher).await.unwrap();
    publisher
}

pub fn test_book(isbn: &str, title: &str, publisher_id: &str) -> Book {
    Book::new(
        isbn.to_string(),
        title.to_string(),
        "Marya Blue".to_string(),
        publisher_id.to_string(),
        iso_date::parse(PUBLISH_DATE).unwrap(),
    )
}

pub async fn create_test_book(pool: &SqlitePool, isbn: &str, title: &str, publisher_id: &str) -> Book {
    let repo = SqliteBookRepository::new(Arc::new(pool.clone()));
    let book = test_book(isbn, title, publisher_id);
    repo.create(&book).await.unwrap();
    book
}

/// Seeds one publisher with three books and returns the publisher.
pub async fn seed_catalog(pool: &SqlitePool) -> Publisher {
    let publisher =
        create_test_publisher(pool, "284073e2-3494-4653-8f8e-38dfe2ce664d", "Nova editora!").await;

    for (i, isbn) in BOOK_ISBNS.iter().enumerate() {
        create_test_book(pool, isbn, &format!("Book {}", i + 1), &publisher.id).await;
    }

    publisher
}

pub fn book_json(book: &Book) -> Value {
    json!({
        "isbn": book.isbn,
        "title": book.title,
        "author": book.author,
        "publisherId": book.publisher_id,
        "publishDate": iso_date::format(&book.publish_date),
    })
}

pub async fn count_books(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM books")
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Like [`make_server`], with every generated publisher id set to `id`.
pub fn make_server_with_id(pool: SqlitePool, id: &str) -> TestServer {
    let state = AppState::with_id_generator(
        Arc::new(pool),
        Arc::new(FixedIdGenerator(id.to_string())),
    );
    TestServer::new(router(state)).unwrap()
}
