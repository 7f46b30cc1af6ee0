// # Unique Id Generator Trait
//
// Defines the strategy used by services to assign ids to new todos.
//
// ## Contract
//
// `generate` must return an id that differs from every id previously
// returned by the same instance, for the lifetime of that instance. Nothing
// more is promised: ids are not required to be unpredictable.
//
// ## Hints
//
// Callers may pass opaque hints (the in-memory store passes the todo being
// created). Implementations are free to inspect them, e.g. by downcasting to
// `Todo`, or to ignore them.

use std::any::Any;
use std::sync::Arc;

/// Trait for id generation strategies
///
/// Generators take `&self` so one instance can be shared between stores;
/// implementations guard their own state.
pub trait UniqueIdGenerator: Send + Sync {
    /// Produce a fresh id
    ///
    /// # Parameters
    ///
    /// - `hints`: Zero or more opaque values describing what the id is for
    fn generate(&self, hints: &[&dyn Any]) -> String;
}

impl<G: UniqueIdGenerator + ?Sized> UniqueIdGenerator for Box<G> {
    fn generate(&self, hints: &[&dyn Any]) -> String {
        (**self).generate(hints)
    }
}

impl<G: UniqueIdGenerator + ?Sized> UniqueIdGenerator for Arc<G> {
    fn generate(&self, hints: &[&dyn Any]) -> String {
        (**self).generate(hints)
    }
}

impl<G: UniqueIdGenerator + ?Sized> UniqueIdGenerator for &G {
    fn generate(&self, hints: &[&dyn Any]) -> String {
        (**self).generate(hints)
    }
}

/// Helper trait for constructing generators from configuration
pub trait IdGeneratorFactory: Send + Sync {
    /// Create a generator instance
    ///
    /// # Parameters
    ///
    /// - `config`: Generator-specific configuration (the serialized
    ///   `IdGeneratorConfig`)
    ///
    /// # Returns
    ///
    /// A boxed generator, or a configuration error
    fn create(
        &self,
        config: &serde_json::Value,
    ) -> Result<Box<dyn UniqueIdGenerator>, crate::TodoError>;
}
