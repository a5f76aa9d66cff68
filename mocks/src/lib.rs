//! Mock implementations and test utilities for the TODO service
//!
//! This crate provides the shared testing infrastructure:
//! - An in-memory `TodoService` with error injection and call tracking
//! - Fixtures, builders and random data generators
//! - Custom assertion helpers
//! - Contract tests every `TodoService` implementation must pass

pub mod assertions;
pub mod builders;
pub mod contracts;
pub mod fixtures;
pub mod generators;
pub mod service;

pub use assertions::*;
pub use builders::*;
pub use contracts::*;
pub use fixtures::*;
pub use generators::*;
pub use service::MockTodoService;
