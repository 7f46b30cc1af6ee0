// # In-Memory Todo Service
//
// HashMap-backed implementation of TodoService.
//
// ## Locking
//
// One RwLock covers the whole map; there is no per-key locking.
// - `get` takes the read lock, so lookups run in parallel
// - `create`, `update` and `delete` take the write lock and exclude everyone
//
// Guards live only for the duration of a single map call and are released
// on every return path. A poisoned lock is recovered rather than propagated:
// each critical section is one map operation, so a panicking holder cannot
// leave a half-applied change behind.
//
// ## Crash Behavior
//
// All records are lost when the process exits.

use std::any::Any;
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::TodoConfig;
use crate::error::{Result, TodoError};
use crate::id::IncrementalIdGenerator;
use crate::model::Todo;
use crate::registry::GeneratorRegistry;
use crate::traits::{TodoService, UniqueIdGenerator};

/// In-memory todo service
///
/// The store owns every record; `get` hands out clones, so mutating a
/// returned value never bypasses the lock.
///
/// # Example
///
/// ```rust
/// use todo_core::{InMemoryTodoService, Todo, TodoService};
///
/// let service = InMemoryTodoService::with_default_generator();
///
/// let id = service.create(Todo::new("buy milk")).unwrap();
/// service.update(&id, Todo::new("buy milk").with_done(true), false).unwrap();
///
/// assert!(service.get(&id).unwrap().is_done);
/// ```
pub struct InMemoryTodoService<G = Box<dyn UniqueIdGenerator>> {
    todos: RwLock<HashMap<String, Todo>>,
    generator: G,
}

impl InMemoryTodoService<IncrementalIdGenerator> {
    /// Create an empty service using a fresh incremental generator
    pub fn with_default_generator() -> Self {
        Self::new(IncrementalIdGenerator::new())
    }
}

impl InMemoryTodoService {
    /// Create an empty service whose generator is built from configuration
    ///
    /// # Returns
    ///
    /// - `Ok(InMemoryTodoService)`: Ready to use
    /// - `Err(TodoError::Config)`: Invalid configuration or unknown generator
    pub fn from_config(config: &TodoConfig, registry: &GeneratorRegistry) -> Result<Self> {
        config.validate()?;
        let generator = registry.create_generator(&config.id_generator)?;
        Ok(Self::new(generator))
    }
}

impl<G: UniqueIdGenerator> InMemoryTodoService<G> {
    /// Create an empty service that assigns ids with `generator`
    pub fn new(generator: G) -> Self {
        Self {
            todos: RwLock::new(HashMap::new()),
            generator,
        }
    }

    /// Get the number of todos in the store
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Check whether a todo is stored under `id`
    pub fn contains(&self, id: &str) -> bool {
        self.read().contains_key(id)
    }

    /// Remove every todo from the store
    ///
    /// The generator is not reset, so ids handed out earlier are never reused.
    pub fn clear(&self) {
        self.write().clear();
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Todo>> {
        self.todos.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Todo>> {
        self.todos.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryTodoService<IncrementalIdGenerator> {
    fn default() -> Self {
        Self::with_default_generator()
    }
}

impl<G> std::fmt::Debug for InMemoryTodoService<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let len = self.todos.read().unwrap_or_else(PoisonError::into_inner).len();
        f.debug_struct("InMemoryTodoService")
            .field("len", &len)
            .finish_non_exhaustive()
    }
}

impl<G: UniqueIdGenerator> TodoService for InMemoryTodoService<G> {
    type Error = TodoError;

    fn get(&self, id: &str) -> Result<Todo> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| TodoError::not_found(id))
    }

    fn create(&self, todo: Todo) -> Result<String> {
        let mut guard = self.write();
        let id = self.generator.generate(&[&todo as &dyn Any]);
        guard.insert(id.clone(), todo);
        Ok(id)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.write()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| TodoError::not_found(id))
    }

    fn update(&self, id: &str, todo: Todo, upsert: bool) -> Result<()> {
        let mut guard = self.write();

        if upsert {
            guard.insert(id.to_string(), todo);
            return Ok(());
        }

        match guard.get_mut(id) {
            Some(stored) => {
                *stored = todo;
                Ok(())
            }
            None => Err(TodoError::not_found(id)),
        }
    }
}
