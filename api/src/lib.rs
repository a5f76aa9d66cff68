//! HTTP API for the TODO service
//!
//! This crate exposes a [`TodoService`] over HTTP with axum. It provides:
//!
//! - [`TodoHandler`]: request validation and dispatch to the service
//! - [`TodoServer`]: the router, middleware stack and serve loop
//! - [`ApiError`]: mapping from domain errors to HTTP status codes
//! - Request logging and per-request deadline middleware
//!
//! # Usage
//!
//! ```no_run
//! use mocks::MockTodoService;
//! use std::{sync::Arc, time::Duration};
//! use todo_api::TodoServer;
//!
//! # async fn run() -> anyhow::Result<()> {
//! // In real usage, pass a database::SqliteTodoService
//! let service = Arc::new(MockTodoService::new());
//! let server = TodoServer::new(service).with_request_timeout(Duration::from_secs(10));
//! server
//!     .serve("127.0.0.1:8080", async {
//!         let _ = tokio::signal::ctrl_c().await;
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod deadline;
pub mod error;
pub mod handler;
pub mod request_logger;
pub mod serialization;
pub mod server;

pub use error::ApiError;
pub use handler::TodoHandler;
pub use server::{TodoServer, DEFAULT_REQUEST_TIMEOUT};

// Re-export core types for external consumers
pub use todo_core::{Todo, TodoError, TodoService};
