//! HTTP server for the TODO API
//!
//! Routes `GET /healthz` and `POST|GET|PUT|DELETE /todos`. Other methods on
//! `/todos` are answered with 405 by the method router.

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    middleware,
    response::Response,
    routing::get,
    Router,
};
use std::{future::Future, net::SocketAddr, sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    deadline::request_deadline_middleware,
    error::ApiError,
    handler::TodoHandler,
    request_logger::request_logging_middleware,
    serialization::{decode_body, json_response},
};
use todo_core::{
    CreateTodoRequest, DeleteTodoRequest, ReadTodoQuery, TodoService, UpdateTodoRequest,
};

/// Deadline applied to each request unless configured otherwise
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared server state for handlers
pub struct TodoServerState<S> {
    pub handler: TodoHandler<S>,
}

/// HTTP server exposing a [`TodoService`]
pub struct TodoServer<S> {
    handler: TodoHandler<S>,
    request_timeout: Duration,
}

impl<S: TodoService + 'static> TodoServer<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self {
            handler: TodoHandler::new(service),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Override the per-request deadline
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }

    /// Create the router with all endpoints
    pub fn router(&self) -> Router {
        let state = Arc::new(TodoServerState {
            handler: self.handler.clone(),
        });

        Router::new()
            .route(
                "/todos",
                get(read_todos::<S>)
                    .post(create_todo::<S>)
                    .put(update_todo::<S>)
                    .delete(delete_todos::<S>),
            )
            .route("/healthz", get(healthz::<S>))
            .with_state(state)
            .layer(middleware::from_fn_with_state(
                self.request_timeout,
                request_deadline_middleware,
            ))
            .layer(middleware::from_fn(request_logging_middleware))
    }

    /// Bind `addr` and serve until `shutdown` resolves
    pub async fn serve<F>(self, addr: &str, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let socket_addr: SocketAddr = addr
            .parse()
            .with_context(|| format!("Invalid address '{addr}'"))?;

        let listener = TcpListener::bind(socket_addr)
            .await
            .with_context(|| format!("Failed to bind {socket_addr}"))?;

        self.serve_with_listener(listener, shutdown).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    pub async fn serve_with_listener<F>(self, listener: TcpListener, shutdown: F) -> anyhow::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let local_addr = listener.local_addr().context("Listener has no local address")?;
        info!("Starting TODO server on {}", local_addr);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server error")?;

        info!("TODO server stopped");
        Ok(())
    }
}

async fn create_todo<S: TodoService + 'static>(
    State(state): State<Arc<TodoServerState<S>>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: CreateTodoRequest = decode_body(&body)?;
    let response = state.handler.create(request).await?;
    Ok(json_response(&response))
}

async fn read_todos<S: TodoService + 'static>(
    State(state): State<Arc<TodoServerState<S>>>,
    query: Result<Query<ReadTodoQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let response = state.handler.read(query).await?;
    Ok(json_response(&response))
}

async fn update_todo<S: TodoService + 'static>(
    State(state): State<Arc<TodoServerState<S>>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: UpdateTodoRequest = decode_body(&body)?;
    let response = state.handler.update(request).await?;
    Ok(json_response(&response))
}

async fn delete_todos<S: TodoService + 'static>(
    State(state): State<Arc<TodoServerState<S>>>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let request: DeleteTodoRequest = decode_body(&body)?;
    let response = state.handler.delete(request).await?;
    Ok(json_response(&response))
}

async fn healthz<S: TodoService + 'static>(
    State(state): State<Arc<TodoServerState<S>>>,
) -> Response {
    json_response(&state.handler.healthz())
}
