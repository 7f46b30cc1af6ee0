//! Plugin-based id generator registry
//!
//! The registry maps generator type names to factories so that stores can be
//! built from configuration without hardcoded if-else chains.
//!
//! ## Usage
//!
//! ```rust
//! use todo_core::{GeneratorRegistry, IdGeneratorConfig, UniqueIdGenerator};
//!
//! let registry = GeneratorRegistry::with_builtins();
//! let generator = registry
//!     .create_generator(&IdGeneratorConfig::Incremental { start: 7 })
//!     .unwrap();
//! assert_eq!(generator.generate(&[]), "7");
//! ```

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::config::IdGeneratorConfig;
use crate::error::{Result, TodoError};
use crate::id::{IncrementalIdGeneratorFactory, UuidIdGeneratorFactory};
use crate::traits::{IdGeneratorFactory, UniqueIdGenerator};

/// Registry for plugin-based id generator creation
///
/// ## Thread Safety
///
/// The registry uses interior mutability with RwLock, allowing concurrent
/// reads and exclusive writes.
#[derive(Default)]
pub struct GeneratorRegistry {
    factories: RwLock<HashMap<String, Box<dyn IdGeneratorFactory>>>,
}

impl GeneratorRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the `incremental` and `uuid` generators registered
    pub fn with_builtins() -> Self {
        let registry = Self::new();
        registry.register("incremental", Box::new(IncrementalIdGeneratorFactory));
        registry.register("uuid", Box::new(UuidIdGeneratorFactory));
        registry
    }

    /// Register a generator factory, replacing any previous one of that name
    ///
    /// # Parameters
    ///
    /// - `name`: Generator type name (e.g., "incremental", "snowflake")
    /// - `factory`: Factory object for creating generator instances
    pub fn register(&self, name: impl Into<String>, factory: Box<dyn IdGeneratorFactory>) {
        let name = name.into();
        debug!(generator = %name, "Registering id generator factory");
        self.factories
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, factory);
    }

    /// Create a generator from configuration
    ///
    /// # Returns
    ///
    /// - `Ok(Box<dyn UniqueIdGenerator>)`: Created generator
    /// - `Err(TodoError::Config)`: If the type is not registered or creation fails
    pub fn create_generator(
        &self,
        config: &IdGeneratorConfig,
    ) -> Result<Box<dyn UniqueIdGenerator>> {
        config.validate()?;

        let generator_type = config.type_name();
        let factories = self.factories.read().unwrap_or_else(PoisonError::into_inner);

        let factory = factories.get(generator_type).ok_or_else(|| {
            TodoError::config(format!("Unknown id generator type: {}", generator_type))
        })?;

        let settings = match config {
            IdGeneratorConfig::Custom { config, .. } => config.clone(),
            _ => serde_json::to_value(config)
                .map_err(|e| TodoError::config(format!("Unserializable generator config: {e}")))?,
        };

        factory.create(&settings)
    }

    /// List all registered generator types
    pub fn list(&self) -> Vec<String> {
        self.factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Check if a generator type is registered
    pub fn has(&self, name: &str) -> bool {
        self.factories
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }
}
