//! Error types for the todo store
//!
//! The store surfaces exactly one failure to callers: a missing record.
//! Classification goes through the [`TodoNotFound`] capability so that other
//! backends and decorators can produce their own error types and still be
//! recognised by [`is_todo_not_found`].

use thiserror::Error;

/// Result type alias for todo store operations
pub type Result<T> = std::result::Result<T, TodoError>;

/// Core error type for the todo store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    /// No todo is associated with the queried id
    #[error("todo with id {id} not found")]
    NotFound {
        /// The id that was looked up
        id: String,
    },

    /// Configuration or registry errors
    ///
    /// Never returned by the four service operations.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl TodoError {
    /// Create a "not found" error for `id`
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Capability exposed by errors that can report a missing todo.
///
/// Any error type may implement this; callers should query it through
/// [`is_todo_not_found`] instead of matching on a concrete error enum.
pub trait TodoNotFound {
    /// Returns the offending id when the error means "no such todo"
    fn todo_not_found(&self) -> Option<&str>;
}

impl TodoNotFound for TodoError {
    fn todo_not_found(&self) -> Option<&str> {
        match self {
            Self::NotFound { id } => Some(id),
            Self::Config(_) => None,
        }
    }
}

impl<E: TodoNotFound + ?Sized> TodoNotFound for Box<E> {
    fn todo_not_found(&self) -> Option<&str> {
        (**self).todo_not_found()
    }
}

impl<E: TodoNotFound + ?Sized> TodoNotFound for &E {
    fn todo_not_found(&self) -> Option<&str> {
        (**self).todo_not_found()
    }
}

/// Classify `err` as a not-found error.
///
/// Returns the id carried by the error, or `None` if the error is of any
/// other kind.
pub fn is_todo_not_found<E: TodoNotFound + ?Sized>(err: &E) -> Option<&str> {
    err.todo_not_found()
}
