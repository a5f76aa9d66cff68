//! Mock implementation of the TodoService trait
//!
//! Provides a thread-safe in-memory service with:
//! - The same keyset pagination semantics as the SQLite store
//! - Error injection capabilities
//! - Call tracking for verification

use async_trait::async_trait;
use chrono::{SubsecRound, Utc};
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::sync::{
    atomic::{AtomicI64, Ordering},
    Arc,
};
use todo_core::{Result, Todo, TodoError, TodoService};

/// Mock implementation of TodoService for testing
///
/// Ids are handed out from a monotonic counter and never reused, matching an
/// `AUTOINCREMENT` primary key.
pub struct MockTodoService {
    todos: Arc<Mutex<BTreeMap<i64, Todo>>>,
    next_id: Arc<AtomicI64>,
    error_injection: Arc<Mutex<Option<TodoError>>>,
    call_history: Arc<Mutex<Vec<String>>>,
}

impl Default for MockTodoService {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTodoService {
    /// Create a new empty mock service
    pub fn new() -> Self {
        Self::with_next_id(1)
    }

    /// Create mock service with pre-populated TODOs
    pub fn with_todos(todos: Vec<Todo>) -> Self {
        let max_id = todos.iter().map(|todo| todo.id).max().unwrap_or(0);
        let todo_map = todos.into_iter().map(|todo| (todo.id, todo)).collect();

        Self {
            todos: Arc::new(Mutex::new(todo_map)),
            next_id: Arc::new(AtomicI64::new(max_id + 1)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create mock service with specific starting ID
    pub fn with_next_id(next_id: i64) -> Self {
        Self {
            todos: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(next_id)),
            error_injection: Arc::new(Mutex::new(None)),
            call_history: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Inject error for next operation
    pub fn inject_error(&self, error: TodoError) {
        *self.error_injection.lock() = Some(error);
    }

    /// Clear error injection
    pub fn clear_error(&self) {
        *self.error_injection.lock() = None;
    }

    /// Number of stored TODOs
    pub fn len(&self) -> usize {
        self.todos.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.lock().is_empty()
    }

    /// Get history of called methods
    pub fn call_history(&self) -> Vec<String> {
        self.call_history.lock().clone()
    }

    /// Clear call history
    pub fn clear_history(&self) {
        self.call_history.lock().clear();
    }

    /// Assert method was called
    pub fn assert_called(&self, method: &str) {
        let history = self.call_history.lock();
        assert!(
            history.iter().any(|call| call.contains(method)),
            "Method '{}' was not called. Call history: {:?}",
            method,
            *history
        );
    }

    /// Assert method was never called
    pub fn assert_not_called(&self, method: &str) {
        let history = self.call_history.lock();
        assert!(
            !history.iter().any(|call| call.contains(method)),
            "Method '{}' was called. Call history: {:?}",
            method,
            *history
        );
    }

    /// Check if an error should be injected, consuming it if so
    fn check_error_injection(&self) -> Result<()> {
        if let Some(error) = self.error_injection.lock().take() {
            return Err(error);
        }
        Ok(())
    }

    fn record_call(&self, method: &str) {
        self.call_history.lock().push(format!("{method}()"));
    }

    fn record_call_with_params(&self, method: &str, params: &str) {
        self.call_history.lock().push(format!("{method}({params})"));
    }
}

#[async_trait]
impl TodoService for MockTodoService {
    async fn create(&self, subject: &str, description: &str) -> Result<Todo> {
        self.record_call_with_params("create", &format!("subject={subject}"));
        self.check_error_injection()?;

        if subject.is_empty() {
            return Err(TodoError::empty_field("subject"));
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let now = Utc::now().trunc_subsecs(0);
        let todo = Todo::new(id, subject.to_string(), description.to_string(), now, now);

        self.todos.lock().insert(id, todo.clone());
        Ok(todo)
    }

    async fn read(&self, prev_id: i64, size: i64) -> Result<Vec<Todo>> {
        self.record_call_with_params("read", &format!("prev_id={prev_id}, size={size}"));
        self.check_error_injection()?;

        let limit = usize::try_from(size).unwrap_or(0);
        let todos = self.todos.lock();
        let page = todos
            .values()
            .rev()
            .filter(|todo| prev_id == 0 || todo.id < prev_id)
            .take(limit)
            .cloned()
            .collect();

        Ok(page)
    }

    async fn update(&self, id: i64, subject: &str, description: &str) -> Result<Todo> {
        self.record_call_with_params("update", &format!("id={id}"));
        self.check_error_injection()?;

        let mut todos = self.todos.lock();
        let todo = todos.get_mut(&id).ok_or(TodoError::NotFound(id))?;

        todo.subject = subject.to_string();
        todo.description = description.to_string();
        todo.updated_at = Utc::now().trunc_subsecs(0);

        Ok(todo.clone())
    }

    async fn delete(&self, ids: &[i64]) -> Result<()> {
        self.record_call_with_params("delete", &format!("ids={ids:?}"));
        self.check_error_injection()?;

        let mut todos = self.todos.lock();
        for id in ids {
            todos.remove(id);
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        self.record_call("health_check");
        self.check_error_injection()?;
        Ok(())
    }
}
