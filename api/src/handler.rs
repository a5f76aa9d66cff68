//! TODO request handler
//!
//! Bridges decoded HTTP requests and a [`TodoService`]. Validation runs before
//! any store call, so rejected requests never touch the database.

use std::sync::Arc;
use todo_core::{
    error::Result, CreateTodoRequest, CreateTodoResponse, DeleteTodoRequest, DeleteTodoResponse,
    HealthzResponse, ReadTodoQuery, ReadTodoResponse, TodoService, TodoValidator,
    UpdateTodoRequest, UpdateTodoResponse,
};

/// Validates requests and dispatches them to the service
pub struct TodoHandler<S> {
    service: Arc<S>,
}

impl<S> Clone for TodoHandler<S> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
        }
    }
}

impl<S> TodoHandler<S> {
    /// Create new TODO handler
    pub fn new(service: Arc<S>) -> Self {
        Self { service }
    }

    /// Get a clone of the service Arc
    pub fn service(&self) -> Arc<S> {
        self.service.clone()
    }
}

impl<S: TodoService> TodoHandler<S> {
    pub async fn create(&self, request: CreateTodoRequest) -> Result<CreateTodoResponse> {
        TodoValidator::validate_subject(&request.subject)?;

        let todo = self
            .service
            .create(&request.subject, &request.description)
            .await?;
        Ok(CreateTodoResponse { todo })
    }

    /// List one page, newest first. Missing query values take their defaults.
    pub async fn read(&self, query: ReadTodoQuery) -> Result<ReadTodoResponse> {
        let (prev_id, size) =
            TodoValidator::parse_page(query.prev_id.as_deref(), query.size.as_deref())?;

        let todos = self.service.read(prev_id, size).await?;
        Ok(ReadTodoResponse { todos })
    }

    pub async fn update(&self, request: UpdateTodoRequest) -> Result<UpdateTodoResponse> {
        TodoValidator::validate_update(request.id, &request.subject)?;

        let todo = self
            .service
            .update(request.id, &request.subject, &request.description)
            .await?;
        Ok(UpdateTodoResponse { todo })
    }

    pub async fn delete(&self, request: DeleteTodoRequest) -> Result<DeleteTodoResponse> {
        self.service.delete(&request.ids).await?;
        Ok(DeleteTodoResponse {})
    }

    /// Liveness only; the store is not consulted
    pub fn healthz(&self) -> HealthzResponse {
        HealthzResponse::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mocks::{
        create_test_todos, delete_todo_request, update_todo_request, CreateTodoRequestBuilder,
        MockTodoService,
    };
    use todo_core::TodoError;

    fn handler_with(service: MockTodoService) -> (TodoHandler<MockTodoService>, Arc<MockTodoService>) {
        let service = Arc::new(service);
        (TodoHandler::new(service.clone()), service)
    }

    #[tokio::test]
    async fn test_create_rejects_empty_subject_before_store() {
        let (handler, service) = handler_with(MockTodoService::new());

        let request = CreateTodoRequestBuilder::new()
            .with_subject("")
            .with_description("x")
            .build();
        let error = handler.create(request).await.unwrap_err();

        assert!(error.is_validation());
        service.assert_not_called("create");
    }

    #[tokio::test]
    async fn test_create_forwards_fields() {
        let (handler, service) = handler_with(MockTodoService::new());

        let request = CreateTodoRequestBuilder::new()
            .with_subject("walk dog")
            .with_description("twice")
            .build();
        let response = handler.create(request).await.unwrap();

        assert_eq!(response.todo.subject, "walk dog");
        assert_eq!(response.todo.description, "twice");
        service.assert_called("create");
    }

    #[tokio::test]
    async fn test_read_applies_defaults() {
        let (handler, service) = handler_with(MockTodoService::with_todos(create_test_todos(8)));

        let response = handler.read(ReadTodoQuery::default()).await.unwrap();

        assert_eq!(response.todos.len(), 5);
        service.assert_called("read(prev_id=0, size=5)");
    }

    #[tokio::test]
    async fn test_read_rejects_malformed_query() {
        let (handler, service) = handler_with(MockTodoService::new());

        let query = ReadTodoQuery {
            prev_id: Some("abc".to_string()),
            size: None,
        };
        assert!(handler.read(query).await.unwrap_err().is_validation());
        service.assert_not_called("read");
    }

    #[tokio::test]
    async fn test_update_zero_id_is_rejected() {
        let (handler, service) = handler_with(MockTodoService::new());

        let request = update_todo_request(0);
        assert!(handler.update(request).await.unwrap_err().is_validation());
        service.assert_not_called("update");
    }

    #[tokio::test]
    async fn test_update_missing_propagates_not_found() {
        let (handler, _service) = handler_with(MockTodoService::new());

        let request = update_todo_request(999);
        assert_eq!(handler.update(request).await.unwrap_err(), TodoError::NotFound(999));
    }

    #[tokio::test]
    async fn test_delete_passes_ids_through() {
        let (handler, service) = handler_with(MockTodoService::with_todos(create_test_todos(3)));

        let response = handler
            .delete(delete_todo_request(&[1, 3]))
            .await
            .unwrap();

        assert_eq!(response, DeleteTodoResponse {});
        assert_eq!(service.len(), 1);
    }
}
