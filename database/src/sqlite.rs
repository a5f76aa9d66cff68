use crate::common::{build_delete_query, build_page_query, row_to_todo, sqlx_error_to_todo_error};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::{str::FromStr, time::Duration};
use todo_core::{
    error::{Result, TodoError},
    models::Todo,
    service::TodoService,
};

/// Schema bootstrap, applied idempotently by [`SqliteTodoService::ensure_schema`]
const SCHEMA_SQL: &str = include_str!("../schema/todos.sql");

const INSERT_SQL: &str = "INSERT INTO todos (subject, description) VALUES (?, ?) \
    RETURNING id, subject, description, created_at, updated_at";

const UPDATE_SQL: &str = "UPDATE todos SET subject = ?, description = ?, updated_at = CURRENT_TIMESTAMP \
    WHERE id = ? RETURNING id, subject, description, created_at, updated_at";

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite implementation of the TodoService trait
///
/// Holds a connection pool that is shared by every request. Cloning the
/// service clones the pool handle, not the connections.
#[derive(Debug, Clone)]
pub struct SqliteTodoService {
    pool: SqlitePool,
}

impl SqliteTodoService {
    /// Create a new SQLite service with default pool settings
    ///
    /// # Arguments
    /// * `database_url` - `sqlite://path`, a bare file path, or `:memory:`
    ///
    /// # Returns
    /// * `Ok(SqliteTodoService)` - Successfully connected service
    /// * `Err(TodoError::Database)` - If connection fails
    ///
    /// # Examples
    /// ```rust,no_run
    /// use database::SqliteTodoService;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// // In-memory database for testing
    /// let service = SqliteTodoService::new(":memory:").await?;
    /// service.ensure_schema().await?;
    ///
    /// // File-based database
    /// let service = SqliteTodoService::new("sqlite:///tmp/todo.db").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(database_url: &str) -> Result<Self> {
        Self::with_pool_options(database_url, DEFAULT_MAX_CONNECTIONS, DEFAULT_ACQUIRE_TIMEOUT)
            .await
    }

    /// Create a new SQLite service with explicit pool limits
    ///
    /// In-memory databases always use a single long-lived connection so the
    /// data outlives idle periods; `max_connections` only applies to files.
    pub async fn with_pool_options(
        database_url: &str,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self> {
        let pool = if is_memory_url(database_url) {
            let connect_options = SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(sqlx_error_to_todo_error)?
                .busy_timeout(BUSY_TIMEOUT);

            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .acquire_timeout(acquire_timeout)
                .connect_with(connect_options)
                .await
                .map_err(sqlx_error_to_todo_error)?
        } else {
            let connect_options = SqliteConnectOptions::new()
                .filename(database_path(database_url))
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(BUSY_TIMEOUT);

            SqlitePoolOptions::new()
                .max_connections(max_connections)
                .acquire_timeout(acquire_timeout)
                .connect_with(connect_options)
                .await
                .map_err(sqlx_error_to_todo_error)?
        };

        tracing::debug!(database_url, max_connections, "SQLite pool connected");
        Ok(Self { pool })
    }

    /// Create the `todos` table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(SCHEMA_SQL)
            .execute(&self.pool)
            .await
            .map_err(|e| TodoError::Database(format!("Schema setup failed: {e}")))?;

        tracing::info!("Database schema ready");
        Ok(())
    }

    /// Get access to the underlying database pool for custom operations
    ///
    /// This method is primarily intended for testing scenarios where
    /// direct SQL execution is needed.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Whether the URL names an in-memory database
pub fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:")
}

/// Filesystem path of a file database URL (`sqlite://`, `sqlite:` or bare)
pub fn database_path(database_url: &str) -> &str {
    database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .unwrap_or(database_url)
}

#[async_trait]
impl TodoService for SqliteTodoService {
    async fn create(&self, subject: &str, description: &str) -> Result<Todo> {
        let row = sqlx::query(INSERT_SQL)
            .bind(subject)
            .bind(description)
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_todo_error)?;

        let todo = row_to_todo(&row)?;
        tracing::debug!(id = todo.id, "TODO created");
        Ok(todo)
    }

    async fn read(&self, prev_id: i64, size: i64) -> Result<Vec<Todo>> {
        let mut query_builder = build_page_query(prev_id, size);

        let rows = query_builder
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(sqlx_error_to_todo_error)?;

        tracing::debug!(prev_id, size, count = rows.len(), "TODO page read");
        rows.iter().map(row_to_todo).collect()
    }

    async fn update(&self, id: i64, subject: &str, description: &str) -> Result<Todo> {
        let row = sqlx::query(UPDATE_SQL)
            .bind(subject)
            .bind(description)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(sqlx_error_to_todo_error)?;

        match row {
            Some(row) => {
                tracing::debug!(id, "TODO updated");
                row_to_todo(&row)
            }
            None => Err(TodoError::not_found_id(id)),
        }
    }

    async fn delete(&self, ids: &[i64]) -> Result<()> {
        if ids.is_empty() {
            return Ok(());
        }

        let result = build_delete_query(ids)
            .build()
            .execute(&self.pool)
            .await
            .map_err(sqlx_error_to_todo_error)?;

        tracing::debug!(
            requested = ids.len(),
            deleted = result.rows_affected(),
            "TODOs deleted"
        );
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        // Simple query to verify database connectivity
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map_err(sqlx_error_to_todo_error)?;

        Ok(())
    }
}
