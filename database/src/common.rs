use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqliteRow, Row};
use todo_core::{
    error::{Result, TodoError},
    models::Todo,
};

/// Column list shared by every statement that returns TODO rows
pub const TODO_COLUMNS: &str = "id, subject, description, created_at, updated_at";

/// Convert SQLite row to Todo model
pub fn row_to_todo(row: &SqliteRow) -> Result<Todo> {
    let created_at: DateTime<Utc> = row.try_get("created_at").map_err(sqlx_error_to_todo_error)?;
    let updated_at: DateTime<Utc> = row.try_get("updated_at").map_err(sqlx_error_to_todo_error)?;

    Ok(Todo {
        id: row.try_get("id").map_err(sqlx_error_to_todo_error)?,
        subject: row.try_get("subject").map_err(sqlx_error_to_todo_error)?,
        description: row.try_get("description").map_err(sqlx_error_to_todo_error)?,
        created_at,
        updated_at,
    })
}

/// Convert SQLx error to TodoError
///
/// Every store failure collapses into `TodoError::Database`; the message keeps
/// enough of the cause for the 500-class log line.
pub fn sqlx_error_to_todo_error(err: sqlx::Error) -> TodoError {
    match &err {
        sqlx::Error::Database(db_err) => {
            let message = db_err.message();
            if message.contains("constraint failed") {
                TodoError::Database(format!("Constraint violation: {message}"))
            } else {
                TodoError::Database(message.to_string())
            }
        }
        sqlx::Error::RowNotFound => {
            TodoError::Database("Unexpected RowNotFound error".to_string())
        }
        sqlx::Error::ColumnDecode { index, source } => {
            TodoError::Database(format!("Failed to decode column {index}: {source}"))
        }
        sqlx::Error::PoolTimedOut => TodoError::Database("Connection pool timeout".to_string()),
        sqlx::Error::PoolClosed => TodoError::Database("Connection pool closed".to_string()),
        sqlx::Error::Io(io_err) => TodoError::Database(format!("Database I/O error: {io_err}")),
        _ => TodoError::Database(format!("Database operation failed: {err}")),
    }
}

/// Build the newest-first keyset page query.
///
/// `prev_id == 0` selects the head of the table; any other value restricts the
/// page to rows strictly older than that id.
pub fn build_page_query(prev_id: i64, size: i64) -> sqlx::QueryBuilder<'static, sqlx::Sqlite> {
    let mut query_builder: sqlx::QueryBuilder<sqlx::Sqlite> =
        sqlx::QueryBuilder::new(format!("SELECT {TODO_COLUMNS} FROM todos"));

    if prev_id > 0 {
        query_builder.push(" WHERE id < ");
        query_builder.push_bind(prev_id);
    }

    query_builder.push(" ORDER BY id DESC LIMIT ");
    query_builder.push_bind(size);

    query_builder
}

/// Build a `DELETE ... WHERE id IN (...)` statement with one bind per id.
///
/// Callers must not pass an empty slice; `IN ()` is not valid SQLite.
pub fn build_delete_query(ids: &[i64]) -> sqlx::QueryBuilder<'static, sqlx::Sqlite> {
    let mut query_builder: sqlx::QueryBuilder<sqlx::Sqlite> =
        sqlx::QueryBuilder::new("DELETE FROM todos WHERE id IN (");

    let mut separated = query_builder.separated(", ");
    for id in ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");

    query_builder
}
