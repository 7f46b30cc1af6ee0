//! Core traits for the todo store
//!
//! This module defines the abstract interfaces that all implementations must follow.
//!
//! - [`TodoService`]: CRUD operations over todos
//! - [`UniqueIdGenerator`]: Id assignment strategy used on creation
//! - [`IdGeneratorFactory`]: Builds generators from configuration

pub mod id_generator;
pub mod todo_service;

pub use id_generator::{IdGeneratorFactory, UniqueIdGenerator};
pub use todo_service::TodoService;
