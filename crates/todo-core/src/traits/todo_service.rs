// # Todo Service Trait
//
// Defines the storage-agnostic interface for todo CRUD.
//
// ## Purpose
//
// Callers (CLIs, HTTP handlers, tests) depend on this trait only. The
// in-memory store is one implementation; decorators such as the traced
// service wrap any other implementation without changing its contract.
//
// ## Usage
//
// ```rust
// use todo_core::{InMemoryTodoService, Todo, TodoService, is_todo_not_found};
//
// let service = InMemoryTodoService::with_default_generator();
//
// let id = service.create(Todo::new("buy milk")).unwrap();
// assert_eq!(id, "0");
// assert_eq!(service.get(&id).unwrap(), Todo::new("buy milk"));
//
// service.delete(&id).unwrap();
// let err = service.get(&id).unwrap_err();
// assert_eq!(is_todo_not_found(&err), Some("0"));
// ```

use crate::error::TodoNotFound;
use crate::model::Todo;

/// Trait for todo service implementations
///
/// Every operation is synchronous and independently atomic. Sequences of
/// calls (for example `get` then `update`) are not atomic as a unit.
///
/// # Errors
///
/// The associated `Error` type must expose the [`TodoNotFound`] capability so
/// that callers can recover the offending id without knowing which backend
/// produced the error.
///
/// # Thread Safety
///
/// Implementations must be safe to call concurrently from multiple threads.
pub trait TodoService: Send + Sync {
    /// Error returned by the service operations
    type Error: std::error::Error + TodoNotFound + Send + Sync + 'static;

    /// Get the todo associated with `id`
    ///
    /// # Returns
    ///
    /// - `Ok(Todo)`: A copy of the stored todo
    /// - `Err(_)`: Not-found carrying `id` if no todo is stored under it
    fn get(&self, id: &str) -> Result<Todo, Self::Error>;

    /// Store a new todo and return the id assigned to it
    ///
    /// The id is always chosen by the service.
    fn create(&self, todo: Todo) -> Result<String, Self::Error>;

    /// Remove the todo associated with `id`
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The todo was removed
    /// - `Err(_)`: Not-found carrying `id`; nothing was changed
    fn delete(&self, id: &str) -> Result<(), Self::Error>;

    /// Replace the todo associated with `id`
    ///
    /// The stored record is replaced wholesale, never merged.
    ///
    /// # Parameters
    ///
    /// - `id`: Target id
    /// - `todo`: The new record
    /// - `upsert`: When `true` the record is written even if `id` is absent
    ///
    /// # Returns
    ///
    /// - `Ok(())`: The record was written
    /// - `Err(_)`: Not-found carrying `id` when `upsert` is `false` and `id`
    ///   is absent; nothing was changed
    fn update(&self, id: &str, todo: Todo, upsert: bool) -> Result<(), Self::Error>;
}

impl<S: TodoService + ?Sized> TodoService for std::sync::Arc<S> {
    type Error = S::Error;

    fn get(&self, id: &str) -> Result<Todo, Self::Error> {
        (**self).get(id)
    }

    fn create(&self, todo: Todo) -> Result<String, Self::Error> {
        (**self).create(todo)
    }

    fn delete(&self, id: &str) -> Result<(), Self::Error> {
        (**self).delete(id)
    }

    fn update(&self, id: &str, todo: Todo, upsert: bool) -> Result<(), Self::Error> {
        (**self).update(id, todo, upsert)
    }
}
