// # Id Generator Implementations
//
// This module provides implementations of the UniqueIdGenerator trait for
// different id strategies.

pub mod incremental;
pub mod random;

pub use self::incremental::{IncrementalIdGenerator, IncrementalIdGeneratorFactory};
pub use self::random::{UuidIdGenerator, UuidIdGeneratorFactory};
