// # todo-core
//
// Core library for the in-memory todo store.
//
// ## Architecture Overview
//
// - **Todo**: The single record kind held by the store
// - **TodoService**: Storage-agnostic CRUD interface over todos
// - **UniqueIdGenerator**: Pluggable strategy assigning ids on creation
// - **InMemoryTodoService**: HashMap-backed service guarded by one RwLock
// - **TracedTodoService**: Decorator emitting tracing events around any service
// - **GeneratorRegistry**: Factory registry building generators from configuration
//
// ## Design Principles
//
// 1. **Storage-Agnostic**: Callers depend on `TodoService`, not on the map
// 2. **Capability Errors**: Not-found is detected through `TodoNotFound`,
//    never by matching one concrete error type
// 3. **Exclusive Custody**: The store owns every record; reads hand out clones
// 4. **Synchronous**: No background tasks, lock acquisition is the only wait

pub mod config;
pub mod error;
pub mod id;
pub mod model;
pub mod registry;
pub mod service;
pub mod traits;

// Re-export core types for convenience
pub use config::{IdGeneratorConfig, TodoConfig};
pub use error::{Result, TodoError, TodoNotFound, is_todo_not_found};
pub use id::{IncrementalIdGenerator, UuidIdGenerator};
pub use model::Todo;
pub use registry::GeneratorRegistry;
pub use service::{InMemoryTodoService, TracedTodoService};
pub use traits::{IdGeneratorFactory, TodoService, UniqueIdGenerator};
