use async_trait::async_trait;
use crate::{error::Result, models::Todo};

/// Persistence contract for TODO records.
///
/// Implementations own all SQL and must be safe for concurrent use. Every
/// operation is a single future: dropping it (client disconnect, request
/// deadline) abandons the in-flight store call. Each operation is a single
/// statement, so an abandoned call affects at most one statement's rows.
#[async_trait]
pub trait TodoService: Send + Sync {
    /// Insert a TODO and return the stored row.
    ///
    /// The returned `id`, `created_at` and `updated_at` are read back from the
    /// store in the same step as the insert. `subject` is expected to be
    /// non-empty; callers validate it before dispatching.
    ///
    /// # Returns
    /// * `Ok(Todo)` - The created TODO with assigned id and timestamps
    /// * `Err(TodoError::Database)` - If the store operation fails
    async fn create(&self, subject: &str, description: &str) -> Result<Todo>;

    /// Read one newest-first keyset page.
    ///
    /// # Arguments
    /// * `prev_id` - `0` for the first page, otherwise the last id the caller saw
    /// * `size` - Maximum number of rows to return; `0` yields an empty page
    ///
    /// # Returns
    /// * `Ok(Vec<Todo>)` - Up to `size` rows with `id < prev_id` (or any id when
    ///   `prev_id == 0`), ordered by `id` descending. Empty marks the last page.
    /// * `Err(TodoError::Database)` - If the store operation fails
    async fn read(&self, prev_id: i64, size: i64) -> Result<Vec<Todo>>;

    /// Replace subject and description of an existing TODO.
    ///
    /// `updated_at` is refreshed by the store and the updated row is returned.
    ///
    /// # Returns
    /// * `Ok(Todo)` - The updated TODO
    /// * `Err(TodoError::NotFound)` - If no row has the given id
    /// * `Err(TodoError::Database)` - If the store operation fails
    async fn update(&self, id: i64, subject: &str, description: &str) -> Result<Todo>;

    /// Remove every TODO whose id is in `ids`.
    ///
    /// An empty slice is a no-op. Ids that match nothing are ignored, which
    /// makes the operation idempotent.
    async fn delete(&self, ids: &[i64]) -> Result<()>;

    /// Verify the store is reachable
    async fn health_check(&self) -> Result<()>;
}
