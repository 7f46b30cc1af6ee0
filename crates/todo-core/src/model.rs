//! The record kind held by the store.

use serde::{Deserialize, Serialize};

/// Something that has to be done, with a binary completion state.
///
/// The id is not part of the record: the store assigns it on creation and
/// returns it separately.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Free-form text
    pub description: String,
    /// Completion flag
    pub is_done: bool,
}

impl Todo {
    /// Create an open todo
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            is_done: false,
        }
    }

    /// Set the completion flag
    pub fn with_done(mut self, is_done: bool) -> Self {
        self.is_done = is_done;
        self
    }
}
