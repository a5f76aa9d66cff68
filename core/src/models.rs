use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted TODO record.
///
/// The `id` is assigned by the store on insert and grows monotonically, so
/// ordering by `id` descending lists the newest records first. Both timestamps
/// are produced by the store in UTC with second precision; `created_at` never
/// changes after insert while `updated_at` is refreshed by every update.
///
/// # Examples
///
/// ```rust
/// use todo_core::models::Todo;
/// use chrono::Utc;
///
/// let now = Utc::now();
/// let todo = Todo::new(1, "buy milk".to_string(), String::new(), now, now);
///
/// let json = serde_json::to_value(&todo).unwrap();
/// assert_eq!(json["id"], 1);
/// assert_eq!(json["subject"], "buy milk");
/// assert_eq!(json["description"], "");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    /// Store-assigned primary key, strictly positive
    pub id: i64,
    /// Short title, never empty once persisted
    pub subject: String,
    /// Free-form details, may be empty
    pub description: String,
    /// Insert timestamp
    pub created_at: DateTime<Utc>,
    /// Last write timestamp
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(
        id: i64,
        subject: String,
        description: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            subject,
            description,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_todo_serializes_with_literal_field_names() {
        let created = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let updated = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 6).unwrap();
        let todo = Todo::new(3, "write report".to_string(), "q1".to_string(), created, updated);

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["id"], 3);
        assert_eq!(json["subject"], "write report");
        assert_eq!(json["description"], "q1");
        assert_eq!(json["created_at"], "2024-01-02T03:04:05Z");
        assert_eq!(json["updated_at"], "2024-01-02T03:04:06Z");
        assert_eq!(json.as_object().unwrap().len(), 5);
    }

    #[test]
    fn test_todo_deserializes_from_wire_format() {
        let todo: Todo = serde_json::from_str(
            r#"{"id":9,"subject":"s","description":"","created_at":"2024-05-01T10:00:00Z","updated_at":"2024-05-01T10:00:00Z"}"#,
        )
        .unwrap();

        assert_eq!(todo.id, 9);
        assert_eq!(todo.created_at, todo.updated_at);
    }
}
