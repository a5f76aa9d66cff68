//! Integration tests for the mocks crate
//!
//! Tests the mock implementations and utilities to ensure they work correctly
//! and provide the expected testing capabilities.

use chrono::{Duration, TimeZone, Utc};
use mocks::*;
use todo_core::{TodoError, TodoService};

#[tokio::test]
async fn test_mock_service_basic_operations() {
    let service = MockTodoService::new();

    let request = create_todo_request();
    let todo = service
        .create(&request.subject, &request.description)
        .await
        .unwrap();

    assert_eq!(todo.id, 1);
    assert_eq!(todo.subject, "buy milk");
    assert_eq!(todo.description, "2 liters");
    service.assert_called("create");

    let page = service.read(0, 5).await.unwrap();
    assert_page_ids(&page, &[1]);
    service.assert_called("read(prev_id=0, size=5)");
    service.assert_not_called("update");

    service.clear_history();
    assert!(service.call_history().is_empty());
    service.assert_not_called("create");
}

#[tokio::test]
async fn test_mock_service_error_injection() {
    let service = MockTodoService::new();

    service.inject_error(TodoError::Database("disk full".to_string()));

    // Next operation should fail
    let result = service.read(0, 5).await;
    assert!(matches!(result, Err(TodoError::Database(_))));

    // Injection is consumed by one call
    let result = service.read(0, 5).await;
    assert!(result.is_ok());

    service.inject_error(TodoError::Database("again".to_string()));
    service.clear_error();
    assert!(service.health_check().await.is_ok());
}

#[tokio::test]
async fn test_mock_service_pagination() {
    let service = MockTodoService::with_todos(create_test_todos(7));

    assert_page_ids(&service.read(0, 3).await.unwrap(), &[7, 6, 5]);
    assert_page_ids(&service.read(5, 3).await.unwrap(), &[4, 3, 2]);
    assert_page_ids(&service.read(2, 3).await.unwrap(), &[1]);
    assert!(service.read(1, 3).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_mock_service_update_missing() {
    let service = MockTodoService::new();

    let result = service.update(1, "new", "").await;
    assert_eq!(result.unwrap_err(), TodoError::NotFound(1));
    assert!(service.is_empty());
}

#[tokio::test]
async fn test_builders_todo_builder() {
    let todo = TodoBuilder::new()
        .with_id(42)
        .with_subject("Built TODO")
        .with_description("")
        .build();

    assert_eq!(todo.id, 42);
    assert_eq!(todo.subject, "Built TODO");
    assert_eq!(todo.description, "");
    assert_timestamps_consistent(&todo);

    let request = UpdateTodoRequestBuilder::new().with_id(9).build();
    assert_eq!(request.id, 9);
}

#[tokio::test]
async fn test_builders_timestamps() {
    let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
    let later = created_at + Duration::hours(1);

    let todo = TodoBuilder::new()
        .with_updated_at(created_at - Duration::days(1))
        .with_created_at(created_at)
        .build();
    assert_eq!(todo.created_at, created_at);
    assert_eq!(todo.updated_at, created_at);

    let todo = TodoBuilder::new()
        .with_created_at(created_at)
        .with_updated_at(later)
        .build();
    assert_eq!(todo.updated_at, later);
    assert_timestamps_consistent(&todo);

    let backwards = TodoBuilder::new()
        .with_created_at(later)
        .with_updated_at(created_at)
        .build();
    let result = std::panic::catch_unwind(|| assert_timestamps_consistent(&backwards));
    assert!(result.is_err());
}

#[tokio::test]
async fn test_mock_service_seeded_with_fixture() {
    let seeded = create_test_todo_with_subject("seeded");
    let service = MockTodoService::with_todos(vec![seeded.clone()]);

    let page = service.read(0, 5).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_todo_equals_exact(&page[0], &seeded);
    assert_eq!(page[0].subject, "seeded");
}

#[tokio::test]
async fn test_assertions_todo_equals() {
    let todo1 = create_test_todo();
    let mut todo2 = todo1.clone();

    assert_todo_equals(&todo1, &todo2);

    todo2.subject = "Different subject".to_string();

    let result = std::panic::catch_unwind(|| {
        assert_todo_equals(&todo1, &todo2);
    });
    assert!(result.is_err());
}

#[tokio::test]
async fn test_assertions_descending_order() {
    let mut todos = create_test_todos(3);
    todos.reverse();
    assert_strictly_descending(&todos);

    todos.reverse();
    let result = std::panic::catch_unwind(|| {
        assert_strictly_descending(&todos);
    });
    assert!(result.is_err());
}

#[tokio::test]
async fn test_generators_realistic_data() {
    let todo = generate_random_todo();

    assert!(todo.id > 0);
    assert!(!todo.subject.is_empty());
    assert_eq!(todo.created_at, todo.updated_at);
}

#[tokio::test]
async fn test_mock_service_concurrent_access() {
    use std::sync::Arc;
    use tokio::task::JoinSet;

    let service = Arc::new(MockTodoService::new());
    let mut set = JoinSet::new();

    for i in 0..10 {
        let service_clone = service.clone();
        set.spawn(async move {
            service_clone
                .create(&format!("Concurrent TODO {i}"), "")
                .await
                .unwrap()
        });
    }

    let mut todos = Vec::new();
    while let Some(result) = set.join_next().await {
        todos.push(result.unwrap());
    }

    assert_eq!(todos.len(), 10);

    let mut ids: Vec<_> = todos.iter().map(|t| t.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10);
}

#[tokio::test]
async fn test_contract_tests_with_mock() {
    let service = MockTodoService::new();

    test_service_contract(&service).await;

    let history = service.call_history();
    assert!(!history.is_empty(), "Mock should have recorded method calls");
    assert!(history.iter().any(|call| call.contains("delete")));
    assert!(history.iter().any(|call| call.contains("update")));
}
