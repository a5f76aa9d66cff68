//! Random test data generators using the fake crate
//!
//! Provides realistic random subjects and descriptions, plus proptest
//! strategies for property-based tests.

use chrono::{SubsecRound, Utc};
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::Fake;
use proptest::prelude::*;
use rand::Rng;
use todo_core::Todo;

/// Generate a realistic TODO subject
pub fn generate_subject() -> String {
    Sentence(2..6).fake()
}

/// Generate a realistic TODO description, sometimes empty
pub fn generate_description() -> String {
    if rand::thread_rng().gen_bool(0.2) {
        String::new()
    } else {
        Paragraph(1..3).fake()
    }
}

/// Generate a random TODO with realistic data
pub fn generate_random_todo() -> Todo {
    let id: i64 = (1..99999).fake();
    let now = Utc::now().trunc_subsecs(0);
    Todo::new(id, generate_subject(), generate_description(), now, now)
}

/// Proptest strategy for non-empty subjects
pub fn subject_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 ]{1,40}"
}

/// Proptest strategy for descriptions, including the empty string
pub fn description_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 .,!?]{0,120}"
}

/// Proptest strategy for a `(prev_id, size)` page request
pub fn page_strategy(max_id: i64) -> impl Strategy<Value = (i64, i64)> {
    (0..=max_id + 1, 0i64..10)
}

/// Proptest strategy for a delete id list, possibly with duplicates and
/// ids that were never assigned
pub fn delete_ids_strategy(max_id: i64) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1..=max_id + 5, 0..8)
}
