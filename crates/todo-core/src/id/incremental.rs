// # Incremental Id Generator
//
// Default id strategy: a private per-instance counter rendered in decimal.
//
// ## Guarantees
//
// - Ids are unique for the lifetime of the instance
// - Ids are predictable ("0", "1", "2", ...); they carry no security value
// - The counter is never reset and never persisted
//
// The counter is atomic, so one generator may safely be shared by several
// stores even though each store already serialises its own `create` calls.

use std::any::Any;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;
use tracing::debug;

use crate::TodoError;
use crate::traits::{IdGeneratorFactory, UniqueIdGenerator};

/// Auto-increment id generator
///
/// # Example
///
/// ```rust
/// use todo_core::{IncrementalIdGenerator, UniqueIdGenerator};
///
/// let generator = IncrementalIdGenerator::new();
/// assert_eq!(generator.generate(&[]), "0");
/// assert_eq!(generator.generate(&[]), "1");
/// ```
#[derive(Debug, Default)]
pub struct IncrementalIdGenerator {
    counter: AtomicU64,
}

impl IncrementalIdGenerator {
    /// Create a generator starting at zero
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Create a generator whose first id is `start`
    pub fn starting_at(start: u64) -> Self {
        Self {
            counter: AtomicU64::new(start),
        }
    }
}

impl UniqueIdGenerator for IncrementalIdGenerator {
    fn generate(&self, _hints: &[&dyn Any]) -> String {
        self.counter.fetch_add(1, Ordering::Relaxed).to_string()
    }
}

#[derive(Debug, Deserialize)]
struct IncrementalSettings {
    #[serde(default)]
    start: u64,
}

/// Factory for [`IncrementalIdGenerator`]
///
/// Reads an optional `start` field from the configuration.
pub struct IncrementalIdGeneratorFactory;

impl IdGeneratorFactory for IncrementalIdGeneratorFactory {
    fn create(
        &self,
        config: &serde_json::Value,
    ) -> Result<Box<dyn UniqueIdGenerator>, TodoError> {
        let settings: IncrementalSettings = serde_json::from_value(config.clone())
            .map_err(|e| TodoError::config(format!("Invalid incremental generator config: {e}")))?;

        debug!(start = settings.start, "Creating incremental id generator");
        Ok(Box::new(IncrementalIdGenerator::starting_at(settings.start)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_counts_from_zero() {
        let generator = IncrementalIdGenerator::new();
        let ids: Vec<String> = (0..3).map(|_| generator.generate(&[])).collect();
        assert_eq!(ids, ["0", "1", "2"]);
    }

    #[test]
    fn test_hints_are_ignored() {
        let generator = IncrementalIdGenerator::starting_at(10);
        let hint = "ignored".to_string();
        assert_eq!(generator.generate(&[&hint as &dyn Any]), "10");
        assert_eq!(generator.generate(&[&1u8 as &dyn Any, &hint]), "11");
    }

    #[test]
    fn test_instances_do_not_share_state() {
        let a = IncrementalIdGenerator::new();
        let b = IncrementalIdGenerator::new();
        assert_eq!(a.generate(&[]), "0");
        assert_eq!(a.generate(&[]), "1");
        assert_eq!(b.generate(&[]), "0");
    }

    #[test]
    fn test_shared_across_threads_stays_unique() {
        let generator = Arc::new(IncrementalIdGenerator::new());

        let ids: HashSet<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let generator = Arc::clone(&generator);
                    scope.spawn(move || {
                        (0..250).map(|_| generator.generate(&[])).collect::<Vec<_>>()
                    })
                })
                .collect();

            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_factory_reads_start() {
        let generator = IncrementalIdGeneratorFactory
            .create(&serde_json::json!({ "type": "incremental", "start": 5 }))
            .unwrap();
        assert_eq!(generator.generate(&[]), "5");
    }

    #[test]
    fn test_factory_rejects_bad_start() {
        let result = IncrementalIdGeneratorFactory
            .create(&serde_json::json!({ "start": "five" }));
        assert!(matches!(result, Err(TodoError::Config(_))));
    }
}
