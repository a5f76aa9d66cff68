//! Database crate for the TODO service
//!
//! This crate provides the SQLite implementation of the `TodoService` trait,
//! with connection pooling and keyset pagination over the `todos` table.
//!
//! # Features
//!
//! - SQLite file databases in WAL mode, or isolated in-memory databases
//! - Idempotent schema bootstrap
//! - Atomic write-then-read via `RETURNING`
//! - Error mapping into `TodoError`
//!
//! # Usage
//!
//! ```rust
//! use database::{SqliteTodoService, TodoService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create service (in-memory for testing)
//!     let service = SqliteTodoService::new(":memory:").await?;
//!     service.ensure_schema().await?;
//!
//!     let todo = service.create("buy milk", "2 liters").await?;
//!     assert_eq!(todo.id, 1);
//!
//!     let page = service.read(0, 5).await?;
//!     assert_eq!(page.len(), 1);
//!
//!     Ok(())
//! }
//! ```

mod common;
mod sqlite;

pub use sqlite::{database_path, is_memory_url, SqliteTodoService};

// Re-export commonly used types from todo-core for convenience
pub use todo_core::{
    error::{Result, TodoError},
    models::Todo,
    service::TodoService,
};
