//! TODO Core Library
//!
//! This crate provides the domain model, error type and trait interfaces for
//! the TODO service. All other crates depend on the types and interfaces
//! defined here.
//!
//! # Architecture
//!
//! - [`models`] - The persisted `Todo` record
//! - [`error`] - Error kinds and result alias
//! - [`service`] - `TodoService` trait implemented by persistence backends
//! - [`protocol`] - Request/response wire types
//! - [`validation`] - Request validation rules
//!
//! # Example
//!
//! ```rust
//! use todo_core::validation::TodoValidator;
//!
//! // Reject an empty subject before it reaches the store
//! assert!(TodoValidator::validate_subject("").is_err());
//!
//! // Apply query defaults
//! assert_eq!(TodoValidator::parse_page(None, None).unwrap(), (0, 5));
//! ```

pub mod error;
pub mod models;
pub mod protocol;
pub mod service;
pub mod validation;

// Re-export commonly used types at the crate root for convenience
pub use error::{Result, TodoError};
pub use models::Todo;
pub use protocol::{
    CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse,
    HealthzResponse, ReadTodoQuery, ReadTodoResponse, UpdateTodoRequest, UpdateTodoResponse,
    DEFAULT_PAGE_SIZE, DEFAULT_PREV_ID,
};
pub use service::TodoService;
pub use validation::TodoValidator;

/// Current version of the core crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Current crate name
pub const CRATE_NAME: &str = env!("CARGO_PKG_NAME");
