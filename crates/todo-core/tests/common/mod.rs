//! Test doubles and common utilities for todo store contract tests

#![allow(dead_code)]

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use todo_core::{IncrementalIdGenerator, InMemoryTodoService, Todo, TodoService, UniqueIdGenerator};

/// A generator that returns a fixed id and counts its calls
pub struct FixedIdGenerator {
    id: String,
    call_count: Arc<AtomicUsize>,
}

impl FixedIdGenerator {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of times generate() was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

impl UniqueIdGenerator for FixedIdGenerator {
    fn generate(&self, _hints: &[&dyn Any]) -> String {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.id.clone()
    }
}

/// A generator that records the todos it receives as hints
#[derive(Default)]
pub struct RecordingIdGenerator {
    seen: std::sync::Mutex<Vec<Todo>>,
}

impl RecordingIdGenerator {
    /// Todos passed as hints so far
    pub fn seen(&self) -> Vec<Todo> {
        self.seen.lock().unwrap().clone()
    }
}

impl UniqueIdGenerator for RecordingIdGenerator {
    fn generate(&self, hints: &[&dyn Any]) -> String {
        let mut seen = self.seen.lock().unwrap();
        seen.extend(hints.iter().filter_map(|h| h.downcast_ref::<Todo>()).cloned());
        format!("rec-{}", seen.len())
    }
}

/// A store pre-populated with `count` todos, returning their ids in order
pub fn populated_store(count: usize) -> (InMemoryTodoService<IncrementalIdGenerator>, Vec<String>) {
    let store = InMemoryTodoService::with_default_generator();
    let ids = (0..count)
        .map(|i| {
            store
                .create(Todo::new(format!("todo #{i}")).with_done(i % 2 == 0))
                .expect("in-memory create never fails")
        })
        .collect();
    (store, ids)
}

/// The todo stored at position `i` by [`populated_store`]
pub fn expected_todo(i: usize) -> Todo {
    Todo::new(format!("todo #{i}")).with_done(i % 2 == 0)
}
