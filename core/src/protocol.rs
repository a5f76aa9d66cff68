//! Wire types for the `/todos` and `/healthz` endpoints.
//!
//! Field names are literal JSON keys. Request fields are lenient: a missing
//! key decodes to its zero value and is rejected later by validation when the
//! zero value is not acceptable.

use serde::{Deserialize, Serialize};
use crate::models::Todo;

/// Page size used when the `size` query parameter is absent
pub const DEFAULT_PAGE_SIZE: i64 = 5;

/// Cursor used when the `prev_id` query parameter is absent
pub const DEFAULT_PREV_ID: i64 = 0;

/// Body of `POST /todos`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

/// Query string of `GET /todos`.
///
/// Values are kept raw so that malformed numbers surface as validation
/// errors instead of extractor rejections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadTodoQuery {
    pub prev_id: Option<String>,
    pub size: Option<String>,
}

/// Body of `PUT /todos`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub description: String,
}

/// Body of `DELETE /todos`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteTodoRequest {
    #[serde(default)]
    pub ids: Vec<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTodoResponse {
    pub todo: Todo,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReadTodoResponse {
    pub todos: Vec<Todo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateTodoResponse {
    pub todo: Todo,
}

/// Serializes to `{}`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeleteTodoResponse {}

/// Body of `GET /healthz`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthzResponse {
    pub message: String,
}

impl HealthzResponse {
    pub fn ok() -> Self {
        Self {
            message: "OK".to_string(),
        }
    }
}
