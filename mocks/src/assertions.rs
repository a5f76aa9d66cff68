//! Custom assertion helpers for testing

use todo_core::Todo;

/// Assert TODOs are equal ignoring timestamps
pub fn assert_todo_equals(actual: &Todo, expected: &Todo) {
    assert_eq!(actual.id, expected.id, "TODO IDs don't match");
    assert_eq!(actual.subject, expected.subject, "TODO subjects don't match");
    assert_eq!(
        actual.description, expected.description,
        "TODO descriptions don't match"
    );
}

/// Assert TODOs are equal including exact timestamps
pub fn assert_todo_equals_exact(actual: &Todo, expected: &Todo) {
    assert_eq!(actual, expected, "TODOs are not exactly equal");
}

/// Assert a page is ordered newest first with no repeated ids
pub fn assert_strictly_descending(todos: &[Todo]) {
    for window in todos.windows(2) {
        assert!(
            window[0].id > window[1].id,
            "TODOs are not in strictly descending id order: {} comes before {}",
            window[0].id,
            window[1].id
        );
    }
}

/// Assert the ids of a page, in order
pub fn assert_page_ids(todos: &[Todo], expected: &[i64]) {
    let ids: Vec<i64> = todos.iter().map(|todo| todo.id).collect();
    assert_eq!(ids, expected, "Page ids don't match");
}

/// Assert timestamps were not moved backwards by a write
pub fn assert_timestamps_consistent(todo: &Todo) {
    assert!(
        todo.updated_at >= todo.created_at,
        "TODO {} was updated ({}) before it was created ({})",
        todo.id,
        todo.updated_at,
        todo.created_at
    );
}
