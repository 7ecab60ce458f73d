//! Task entity

use serde::{Deserialize, Serialize};

/// Unique identifier for a task within a snapshot
pub type TaskId = i64;

/// A single to-do item
///
/// Tasks are immutable value records: every transition replaces the record
/// with a new one carrying the same `id`. Exactly these three fields are
/// persisted; unknown extra fields are ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique within the snapshot, assigned at creation, never mutated
    pub id: TaskId,

    /// User-supplied text, trimmed, never blank
    pub text: String,

    /// Completion flag
    pub completed: bool,
}

impl Task {
    /// Create a new task, not yet completed
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}
