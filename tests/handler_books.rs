mod common;

use axum::http::StatusCode;
use serde_json::{Value, json};
use sqlx::SqlitePool;

const PUBLISHER_ID: &str = "284073e2-3494-4653-8f8e-38dfe2ce664d";

fn new_book_body() -> Value {
    json!({
        "isbn": "9a9eabed-0170-4be3-a289-40aa609a6d53",
        "title": "Ron Doe",
        "author": "Marya Blue",
        "publisherId": PUBLISHER_ID,
        "publishDate": "2024-03-25T00:00:00.000Z"
    })
}

#[sqlx::test]
async fn test_list_books_empty(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server.get("/books").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}

#[sqlx::test]
async fn test_list_books(pool: SqlitePool) {
    common::seed_catalog(&pool).await;
    let server = common::make_server(pool);

    let response = server.get("/books").await;

    response.assert_status_ok();
    let books: Vec<Value> = response.json();
    assert_eq!(books.len(), 3);

    let isbns: Vec<&str> = books.iter().filter_map(|b| b["isbn"].as_str()).collect();
    for isbn in common::BOOK_ISBNS {
        assert!(isbns.contains(&isbn));
    }
    assert_eq!(books[0]["publishDate"], common::PUBLISH_DATE);
}

#[sqlx::test]
async fn test_show_book(pool: SqlitePool) {
    common::create_test_publisher(&pool, PUBLISHER_ID, "Nova editora!").await;
    let book =
        common::create_test_book(&pool, common::BOOK_ISBNS[0], "Código Notebook", PUBLISHER_ID)
            .await;
    let server = common::make_server(pool);

    let response = server.get(&format!("/books/{}", book.isbn)).await;

    response.assert_status_ok();
    response.assert_json(&common::book_json(&book));
}

#[sqlx::test]
async fn test_show_missing_book(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server.get("/books/123456").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert!(response.text().is_empty());
}

#[sqlx::test]
async fn test_create_book(pool: SqlitePool) {
    common::create_test_publisher(&pool, PUBLISHER_ID, "Nova editora!").await;
    let server = common::make_server(pool);

    let response = server.post("/books").json(&new_book_body()).await;

    response.assert_status(StatusCode::CREATED);
    response.assert_json(&new_book_body());

    let fetched = server
        .get("/books/9a9eabed-0170-4be3-a289-40aa609a6d53")
        .await;
    fetched.assert_status_ok();
    fetched.assert_json(&new_book_body());
}

#[sqlx::test]
async fn test_create_book_without_fractional_seconds(pool: SqlitePool) {
    common::create_test_publisher(&pool, PUBLISHER_ID, "Nova editora!").await;
    let server = common::make_server(pool);

    let mut body = new_book_body();
    body["publishDate"] = json!("2024-03-25T00:00:00Z");

    let response = server.post("/books").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert_eq!(created["publishDate"], "2024-03-25T00:00:00.000Z");
}

#[sqlx::test]
async fn test_create_book_rejects_non_utc_publish_dates(pool: SqlitePool) {
    common::create_test_publisher(&pool, PUBLISHER_ID, "Nova editora!").await;
    let server = common::make_server(pool.clone());

    for publish_date in [
        "2024-03-25 00:00:00Z",
        "2024-03-25t00:00:00z",
        "2024-03-25T03:00:00+03:00",
    ] {
        let mut body = new_book_body();
        body["publishDate"] = json!(publish_date);

        let response = server.post("/books").json(&body).await;

        response.assert_status(StatusCode::PAYMENT_REQUIRED);
        response.assert_json(&json!({ "error": "publishDate: Invalid publishDate!" }));
    }

    assert_eq!(common::count_books(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_duplicate_book(pool: SqlitePool) {
    common::create_test_publisher(&pool, PUBLISHER_ID, "Nova editora!").await;
    let original =
        common::create_test_book(&pool, common::BOOK_ISBNS[0], "Original", PUBLISHER_ID).await;
    let server = common::make_server(pool.clone());

    let mut body = new_book_body();
    body["isbn"] = json!(original.isbn);
    body["title"] = json!("Replacement");

    let response = server.post("/books").json(&body).await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "Error creating book" }));

    let stored = server.get(&format!("/books/{}", original.isbn)).await;
    stored.assert_json(&common::book_json(&original));
    assert_eq!(common::count_books(&pool).await, 1);
}

#[sqlx::test]
async fn test_create_book_with_empty_fields(pool: SqlitePool) {
    common::create_test_publisher(&pool, PUBLISHER_ID, "Nova editora!").await;
    let server = common::make_server(pool.clone());

    let mut body = new_book_body();
    body["title"] = json!("");
    body["author"] = json!("");

    let response = server.post("/books").json(&body).await;

    response.assert_status(StatusCode::PAYMENT_REQUIRED);
    let error: Value = response.json();
    let message = error["error"].as_str().unwrap();
    assert!(message.contains("Title required!"));
    assert!(message.contains("Author required!"));
    assert_eq!(common::count_books(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_book_with_empty_publish_date(pool: SqlitePool) {
    common::create_test_publisher(&pool, PUBLISHER_ID, "Nova editora!").await;
    let server = common::make_server(pool.clone());

    let mut body = new_book_body();
    body["publishDate"] = json!("");

    let response = server.post("/books").json(&body).await;

    response.assert_status(StatusCode::PAYMENT_REQUIRED);
    response.assert_json(&json!({ "error": "publishDate: Invalid publishDate!" }));
    assert_eq!(common::count_books(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_book_with_empty_isbn(pool: SqlitePool) {
    common::create_test_publisher(&pool, PUBLISHER_ID, "Nova editora!").await;
    let server = common::make_server(pool.clone());

    let mut body = new_book_body();
    body["isbn"] = json!("");

    let response = server.post("/books").json(&body).await;

    response.assert_status(StatusCode::PAYMENT_REQUIRED);
    response.assert_json(&json!({ "error": "isbn: Isbn required!" }));
    assert_eq!(common::count_books(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_book_with_empty_publisher_id(pool: SqlitePool) {
    common::create_test_publisher(&pool, PUBLISHER_ID, "Nova editora!").await;
    let server = common::make_server(pool.clone());

    let mut body = new_book_body();
    body["publisherId"] = json!("");

    let response = server.post("/books").json(&body).await;

    response.assert_status(StatusCode::PAYMENT_REQUIRED);
    response.assert_json(&json!({ "error": "publisherId: PublisherId required!" }));
    assert_eq!(common::count_books(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_book_with_missing_field(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    let response = server
        .post("/books")
        .json(&json!({ "isbn": "1", "title": "T" }))
        .await;

    response.assert_status(StatusCode::PAYMENT_REQUIRED);
    assert_eq!(common::count_books(&pool).await, 0);
}

#[sqlx::test]
async fn test_create_book_with_unknown_publisher(pool: SqlitePool) {
    let server = common::make_server(pool.clone());

    let response = server.post("/books").json(&new_book_body()).await;

    response.assert_status(StatusCode::PAYMENT_REQUIRED);
    response.assert_json(&json!({ "error": "Publisher not found!" }));
    assert_eq!(common::count_books(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_book(pool: SqlitePool) {
    common::seed_catalog(&pool).await;
    let server = common::make_server(pool.clone());

    let response = server
        .delete(&format!("/books/{}", common::BOOK_ISBNS[0]))
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
    assert!(response.text().is_empty());

    server
        .get(&format!("/books/{}", common::BOOK_ISBNS[0]))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert_eq!(common::count_books(&pool).await, 2);
}

#[sqlx::test]
async fn test_delete_missing_book(pool: SqlitePool) {
    let server = common::make_server(pool);

    let response = server.delete("/books/123456").await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[sqlx::test]
async fn test_list_books_storage_failure(pool: SqlitePool) {
    let server = common::make_server(pool.clone());
    pool.close().await;

    let response = server.get("/books").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let error: Value = response.json();
    assert!(error["error"].is_string());
}
