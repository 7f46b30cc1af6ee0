// # Traced Todo Service
//
// Decorator that wraps any TodoService and emits a tracing event for every
// operation. The wrapped service's errors are forwarded untouched, so
// not-found classification keeps working through the decorator.
//
// Not-found outcomes are expected and logged at `debug`; any other error is
// logged at `warn`.

use tracing::{debug, trace, warn};

use crate::error::is_todo_not_found;
use crate::model::Todo;
use crate::traits::TodoService;

/// Tracing decorator around a todo service
///
/// # Example
///
/// ```rust
/// use todo_core::{InMemoryTodoService, Todo, TodoService, TracedTodoService};
///
/// let service = TracedTodoService::new(InMemoryTodoService::with_default_generator());
/// let id = service.create(Todo::new("write report")).unwrap();
/// assert_eq!(service.inner().len(), 1);
/// # let _ = id;
/// ```
#[derive(Debug)]
pub struct TracedTodoService<S> {
    inner: S,
}

impl<S: TodoService> TracedTodoService<S> {
    /// Wrap `inner`
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Access the wrapped service
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwrap into the wrapped service
    pub fn into_inner(self) -> S {
        self.inner
    }

    fn observe<T>(&self, op: &'static str, id: &str, result: &Result<T, S::Error>) {
        match result {
            Ok(_) => trace!(op, id, "Todo operation succeeded"),
            Err(err) => match is_todo_not_found(err) {
                Some(missing) => debug!(op, id = missing, "Todo not found"),
                None => warn!(op, id, error = %err, "Todo operation failed"),
            },
        }
    }
}

impl<S: TodoService> TodoService for TracedTodoService<S> {
    type Error = S::Error;

    fn get(&self, id: &str) -> Result<Todo, Self::Error> {
        let result = self.inner.get(id);
        self.observe("get", id, &result);
        result
    }

    fn create(&self, todo: Todo) -> Result<String, Self::Error> {
        let result = self.inner.create(todo);
        match &result {
            Ok(id) => debug!(op = "create", id = %id, "Todo created"),
            Err(err) => warn!(op = "create", error = %err, "Todo creation failed"),
        }
        result
    }

    fn delete(&self, id: &str) -> Result<(), Self::Error> {
        let result = self.inner.delete(id);
        self.observe("delete", id, &result);
        result
    }

    fn update(&self, id: &str, todo: Todo, upsert: bool) -> Result<(), Self::Error> {
        let result = self.inner.update(id, todo, upsert);
        if result.is_ok() {
            debug!(op = "update", id, upsert, "Todo written");
        }
        self.observe("update", id, &result);
        result
    }
}
