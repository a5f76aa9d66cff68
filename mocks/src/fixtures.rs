//! Standard test fixtures for consistent testing
//!
//! Provides pre-built test data including:
//! - A standard TODO with sensible defaults
//! - Bulk TODO generators with ascending ids
//! - Request bodies for the HTTP layer

use chrono::{SubsecRound, Utc};
use todo_core::{CreateTodoRequest, DeleteTodoRequest, Todo, UpdateTodoRequest};

/// Create a basic test TODO with sensible defaults
pub fn create_test_todo() -> Todo {
    let now = Utc::now().trunc_subsecs(0);
    Todo::new(
        1,
        "Test TODO".to_string(),
        "A standard test TODO with default values".to_string(),
        now,
        now,
    )
}

/// Create TODO with specific subject
pub fn create_test_todo_with_subject(subject: &str) -> Todo {
    let mut todo = create_test_todo();
    todo.subject = subject.to_string();
    todo
}

/// Create `count` TODOs with ids `1..=count`
pub fn create_test_todos(count: usize) -> Vec<Todo> {
    let now = Utc::now().trunc_subsecs(0);
    (1..=count)
        .map(|i| {
            Todo::new(
                i as i64,
                format!("Test TODO {i}"),
                format!("Test TODO number {i} for bulk testing"),
                now,
                now,
            )
        })
        .collect()
}

/// Create a standard create request
pub fn create_todo_request() -> CreateTodoRequest {
    CreateTodoRequest {
        subject: "buy milk".to_string(),
        description: "2 liters".to_string(),
    }
}

/// Create an update request for a specific id
pub fn update_todo_request(id: i64) -> UpdateTodoRequest {
    UpdateTodoRequest {
        id,
        subject: "Updated subject".to_string(),
        description: "Updated description".to_string(),
    }
}

/// Create a delete request for the given ids
pub fn delete_todo_request(ids: &[i64]) -> DeleteTodoRequest {
    DeleteTodoRequest { ids: ids.to_vec() }
}
