//! Helpers for turning sqlx errors into storage messages.

/// Returns the database's own message for driver errors (e.g.
/// `UNIQUE constraint failed: publishers.name`), falling back to the sqlx
/// error text for connection or decoding failures.
pub fn storage_message(e: &sqlx::Error) -> String {
    match e.as_database_error() {
        Some(db_err) => db_err.message().to_string(),
        None => e.to_string(),
    }
}

/// Whether the error is a unique constraint violation.
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    e.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}
