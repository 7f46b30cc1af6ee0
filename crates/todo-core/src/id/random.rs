//! Random UUID id generator.

use std::any::Any;

use tracing::debug;
use uuid::Uuid;

use crate::TodoError;
use crate::traits::{IdGeneratorFactory, UniqueIdGenerator};

/// Id generator producing random v4 UUIDs.
///
/// Stateless; uniqueness rests on the randomness of v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl UuidIdGenerator {
    /// Create a new UUID generator
    pub fn new() -> Self {
        Self
    }
}

impl UniqueIdGenerator for UuidIdGenerator {
    fn generate(&self, _hints: &[&dyn Any]) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Factory for [`UuidIdGenerator`]; takes no settings.
pub struct UuidIdGeneratorFactory;

impl IdGeneratorFactory for UuidIdGeneratorFactory {
    fn create(
        &self,
        _config: &serde_json::Value,
    ) -> Result<Box<dyn UniqueIdGenerator>, TodoError> {
        debug!("Creating uuid id generator");
        Ok(Box::new(UuidIdGenerator::new()))
    }
}
