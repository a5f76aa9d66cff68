//! Structured request logging middleware
//!
//! Emits one `tracing` event per request with method, path, status, latency
//! and a truncated summary of the JSON body fields.

use axum::{
    body::Body,
    extract::Request,
    http::Method,
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::{BodyExt, LengthLimitError, Limited};
use serde_json::Value;
use std::time::Instant;

use crate::error::ApiError;

/// Maximum length for field values before truncation
const MAX_PARAM_LENGTH: usize = 30;

/// Truncation suffix for long values
const TRUNCATION_SUFFIX: &str = "...";

/// Largest body buffered for logging, matching axum's `DefaultBodyLimit`
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Request logging middleware
///
/// Bodies of `POST`, `PUT` and `DELETE` requests are buffered so their
/// fields can be summarized, then handed on unchanged. Bodies larger than
/// [`MAX_BODY_BYTES`] are answered with 413 without reaching the handler.
pub async fn request_logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let query = request.uri().query().unwrap_or_default().to_string();

    let (request, params_summary) = if has_json_body(&method) {
        let (parts, body) = request.into_parts();
        let body_bytes = match Limited::new(body, MAX_BODY_BYTES).collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) => {
                let error = if e.downcast_ref::<LengthLimitError>().is_some() {
                    ApiError::PayloadTooLarge(MAX_BODY_BYTES)
                } else {
                    ApiError::BadRequest(format!("Failed to read request body: {e}"))
                };
                let response = error.into_response();
                log_request(&method, &path, &response, start_time, "");
                return response;
            }
        };

        let summary = match serde_json::from_slice::<Value>(&body_bytes) {
            Ok(json) => format_params_summary(&json),
            Err(_) => "invalid_json".to_string(),
        };
        (Request::from_parts(parts, Body::from(body_bytes)), summary)
    } else {
        (request, query)
    };

    let response = next.run(request).await;
    log_request(&method, &path, &response, start_time, &params_summary);
    response
}

fn has_json_body(method: &Method) -> bool {
    matches!(*method, Method::POST | Method::PUT | Method::DELETE)
}

fn log_request(method: &Method, path: &str, response: &Response, start_time: Instant, params: &str) {
    let status = response.status().as_u16();
    let latency_ms = start_time.elapsed().as_millis() as u64;

    if response.status().is_server_error() {
        tracing::warn!(%method, path, status, latency_ms, params, "request");
    } else {
        tracing::info!(%method, path, status, latency_ms, params, "request");
    }
}

/// Format JSON fields into a summary string with truncation
fn format_params_summary(params: &Value) -> String {
    match params {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| format!("{key}=\"{}\"", format_parameter_value(value)))
            .collect::<Vec<_>>()
            .join(", "),
        _ => format_parameter_value(params),
    }
}

/// Format a single value with truncation
fn format_parameter_value(value: &Value) -> String {
    let value_str = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{...{} fields}}", obj.len()),
        Value::Null => "null".to_string(),
    };

    truncate_string(&value_str, MAX_PARAM_LENGTH)
}

/// Truncate string to at most `max_length` characters, suffix included
fn truncate_string(input: &str, max_length: usize) -> String {
    if input.chars().count() <= max_length {
        return input.to_string();
    }

    let kept = max_length.saturating_sub(TRUNCATION_SUFFIX.len());
    let truncated: String = input.chars().take(kept).collect();
    format!("{truncated}{TRUNCATION_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("this is a very long string", 10), "this is...");
        assert_eq!(truncate_string("exactly10c", 10), "exactly10c");
        assert_eq!(truncate_string("žluťoučký kůň", 6), "žlu...");
    }

    #[test]
    fn test_format_parameter_value() {
        assert_eq!(format_parameter_value(&json!("test")), "test");
        assert_eq!(format_parameter_value(&json!(42)), "42");
        assert_eq!(format_parameter_value(&json!(true)), "true");
        assert_eq!(format_parameter_value(&json!(null)), "null");
        assert_eq!(format_parameter_value(&json!([1, 2, 3])), "[3 items]");
    }

    #[test]
    fn test_format_params_summary() {
        let params = json!({
            "id": 3,
            "subject": "This is a very long subject that should be truncated",
            "description": ""
        });

        let summary = format_params_summary(&params);
        assert!(summary.contains("id=\"3\""));
        assert!(summary.contains("subject=\"This is a very long subject...\""));
        assert!(summary.contains("description=\"\""));
    }

    #[test]
    fn test_format_delete_summary() {
        let summary = format_params_summary(&json!({ "ids": [1, 2, 3] }));
        assert_eq!(summary, "ids=\"[3 items]\"");
    }

    #[test]
    fn test_has_json_body() {
        assert!(has_json_body(&Method::POST));
        assert!(has_json_body(&Method::PUT));
        assert!(has_json_body(&Method::DELETE));
        assert!(!has_json_body(&Method::GET));
    }
}
