//! Configuration types for the todo store
//!
//! Only the id generation strategy is configurable; the store itself has no
//! tunables.

use serde::{Deserialize, Serialize};

/// Main store configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoConfig {
    /// Id generator configuration
    #[serde(default)]
    pub id_generator: IdGeneratorConfig,
}

impl TodoConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id generator configuration
    pub fn with_id_generator(mut self, id_generator: IdGeneratorConfig) -> Self {
        self.id_generator = id_generator;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::TodoError> {
        self.id_generator.validate()
    }
}

/// Id generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IdGeneratorConfig {
    /// Auto-increment counter rendered in decimal
    Incremental {
        /// First id handed out
        #[serde(default)]
        start: u64,
    },

    /// Random v4 UUIDs
    Uuid,

    /// Generator registered under a custom factory name
    Custom {
        /// Factory name to use
        factory: String,
        /// Custom configuration data
        #[serde(default)]
        config: serde_json::Value,
    },
}

impl IdGeneratorConfig {
    /// Validate the generator configuration
    pub fn validate(&self) -> Result<(), crate::TodoError> {
        match self {
            IdGeneratorConfig::Custom { factory, .. } if factory.trim().is_empty() => Err(
                crate::TodoError::config("Custom id generator factory cannot be empty"),
            ),
            _ => Ok(()),
        }
    }

    /// Get the generator type name used for registry lookup
    pub fn type_name(&self) -> &str {
        match self {
            IdGeneratorConfig::Incremental { .. } => "incremental",
            IdGeneratorConfig::Uuid => "uuid",
            IdGeneratorConfig::Custom { factory, .. } => factory,
        }
    }
}

impl Default for IdGeneratorConfig {
    fn default() -> Self {
        IdGeneratorConfig::Incremental { start: 0 }
    }
}
