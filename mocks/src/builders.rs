//! Builder pattern implementations for easy test data construction

use chrono::{DateTime, SubsecRound, Utc};
use todo_core::{CreateTodoRequest, Todo, UpdateTodoRequest};

/// Builder for constructing Todo instances in tests
pub struct TodoBuilder {
    todo: Todo,
}

impl Default for TodoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoBuilder {
    /// Create new builder with default values
    pub fn new() -> Self {
        let now = Utc::now().trunc_subsecs(0);
        Self {
            todo: Todo::new(1, "Test TODO".to_string(), "A test TODO".to_string(), now, now),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.todo.id = id;
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.todo.subject = subject.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.todo.description = description.into();
        self
    }

    /// Set creation timestamp; `updated_at` is moved along if it would
    /// otherwise precede it
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.todo.created_at = created_at;
        if self.todo.updated_at < created_at {
            self.todo.updated_at = created_at;
        }
        self
    }

    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.todo.updated_at = updated_at;
        self
    }

    /// Build the final Todo
    pub fn build(self) -> Todo {
        self.todo
    }
}

/// Builder for constructing create request bodies
pub struct CreateTodoRequestBuilder {
    request: CreateTodoRequest,
}

impl Default for CreateTodoRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateTodoRequestBuilder {
    pub fn new() -> Self {
        Self {
            request: CreateTodoRequest {
                subject: "New TODO".to_string(),
                description: String::new(),
            },
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.request.subject = subject.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.request.description = description.into();
        self
    }

    pub fn build(self) -> CreateTodoRequest {
        self.request
    }
}

/// Builder for constructing update request bodies
pub struct UpdateTodoRequestBuilder {
    request: UpdateTodoRequest,
}

impl Default for UpdateTodoRequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateTodoRequestBuilder {
    pub fn new() -> Self {
        Self {
            request: UpdateTodoRequest {
                id: 1,
                subject: "Updated TODO".to_string(),
                description: String::new(),
            },
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.request.id = id;
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.request.subject = subject.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.request.description = description.into();
        self
    }

    pub fn build(self) -> UpdateTodoRequest {
        self.request
    }
}
