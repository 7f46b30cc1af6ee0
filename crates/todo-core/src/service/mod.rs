// # Todo Service Implementations
//
// - `memory`: HashMap-backed store guarded by a single RwLock
// - `traced`: Decorator that logs every operation of a wrapped service

pub mod memory;
pub mod traced;

pub use memory::InMemoryTodoService;
pub use traced::TracedTodoService;
