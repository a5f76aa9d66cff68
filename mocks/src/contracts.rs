//! Contract test helpers for validating TodoService implementations
//!
//! Provides standardized tests that any implementation of [`TodoService`]
//! should pass, ensuring the mock and the SQLite store behave the same way.
//! The suite expects a freshly created, empty service.

use crate::{assert_page_ids, assert_strictly_descending, assert_timestamps_consistent};
use todo_core::{TodoError, TodoService};

/// Test any TodoService implementation with comprehensive contract tests
pub async fn test_service_contract<S: TodoService>(service: &S) {
    test_health_check_contract(service).await;
    test_create_contract(service).await;
    test_update_contract(service).await;
    test_read_contract(service).await;
    test_delete_contract(service).await;
}

/// Test health check contract
pub async fn test_health_check_contract<S: TodoService>(service: &S) {
    assert!(
        service.health_check().await.is_ok(),
        "Health check should pass for healthy service"
    );
}

/// Test TODO creation contract
pub async fn test_create_contract<S: TodoService>(service: &S) {
    let first = service
        .create("contract create", "with description")
        .await
        .expect("Create should succeed");

    assert!(first.id > 0, "Created TODO should have positive ID");
    assert_eq!(first.subject, "contract create");
    assert_eq!(first.description, "with description");
    assert_eq!(
        first.created_at, first.updated_at,
        "Fresh TODO should have equal timestamps"
    );

    let second = service
        .create("contract create 2", "")
        .await
        .expect("Create with empty description should succeed");
    assert!(second.id > first.id, "IDs should increase monotonically");
    assert_eq!(second.description, "");
}

/// Test TODO update contract
pub async fn test_update_contract<S: TodoService>(service: &S) {
    let todo = service
        .create("before update", "old")
        .await
        .expect("Create should succeed");

    let updated = service
        .update(todo.id, "after update", "new")
        .await
        .expect("Update should succeed");
    assert_eq!(updated.id, todo.id, "ID should remain unchanged");
    assert_eq!(updated.subject, "after update");
    assert_eq!(updated.description, "new");
    assert_eq!(
        updated.created_at, todo.created_at,
        "created_at should remain unchanged"
    );
    assert!(updated.updated_at >= todo.updated_at);
    assert_timestamps_consistent(&updated);

    match service.update(99999, "missing", "").await {
        Err(TodoError::NotFound(id)) => assert_eq!(id, 99999),
        other => panic!("Expected NotFound error, got: {other:?}"),
    }
}

/// Test keyset pagination contract
pub async fn test_read_contract<S: TodoService>(service: &S) {
    let mut created = Vec::new();
    for i in 0..4 {
        let todo = service
            .create(&format!("page {i}"), "")
            .await
            .expect("Create should succeed");
        created.push(todo.id);
    }
    let newest = created[3];

    let head = service.read(0, 3).await.expect("Read should succeed");
    assert_page_ids(&head, &[created[3], created[2], created[1]]);

    let next = service
        .read(created[1], 1)
        .await
        .expect("Read should succeed");
    assert_page_ids(&next, &[created[0]]);

    let all = service.read(0, 1000).await.expect("Read should succeed");
    assert_eq!(all[0].id, newest, "Head page should start at the newest TODO");
    assert_strictly_descending(&all);

    let empty = service.read(0, 0).await.expect("Read should succeed");
    assert!(empty.is_empty(), "size 0 should return no TODOs");

    let oldest = all.last().map(|todo| todo.id).unwrap_or(1);
    let past_end = service.read(oldest, 5).await.expect("Read should succeed");
    assert!(past_end.is_empty(), "No TODO is older than the oldest");
}

/// Test delete contract
pub async fn test_delete_contract<S: TodoService>(service: &S) {
    let a = service.create("delete a", "").await.expect("Create should succeed");
    let b = service.create("delete b", "").await.expect("Create should succeed");

    service
        .delete(&[a.id, b.id, 99999])
        .await
        .expect("Delete with unknown ids should succeed");

    let remaining = service.read(0, 1000).await.expect("Read should succeed");
    assert!(
        remaining.iter().all(|todo| todo.id != a.id && todo.id != b.id),
        "Deleted TODOs should be gone"
    );

    service
        .delete(&[a.id])
        .await
        .expect("Deleting twice should succeed");
    service
        .delete(&[])
        .await
        .expect("Deleting nothing should succeed");

    let after = service.read(0, 1000).await.expect("Read should succeed");
    assert_eq!(after.len(), remaining.len());

    match service.update(a.id, "resurrect", "").await {
        Err(TodoError::NotFound(_)) => {}
        other => panic!("Expected NotFound error for deleted TODO, got: {other:?}"),
    }
}
