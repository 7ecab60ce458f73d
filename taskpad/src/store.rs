//! Pure snapshot transitions for the task list
//!
//! Every operation maps the current snapshot plus an input to a new snapshot
//! without touching the original. Operations are total: invalid input (blank
//! text, unknown id) returns an equal snapshot rather than an error.

use crate::domain::{self, Task, TaskId};

/// Which tasks a view shows, by completion state
///
/// Session-transient; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Every task
    #[default]
    All,
    /// Not yet completed
    Active,
    /// Completed
    Completed,
}

impl FilterMode {
    /// Whether `task` passes this mode's predicate
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Active => write!(f, "active"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Derived counts over a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// All tasks
    pub total: usize,
    /// Tasks marked completed
    pub completed: usize,
    /// Tasks still open
    pub active: usize,
}

/// Append a new task with `text`, trimmed
///
/// No-op when `text` is blank. The new task gets a fresh id and starts
/// not completed.
pub fn add(snapshot: &[Task], text: &str) -> Vec<Task> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return snapshot.to_vec();
    }
    let mut next = snapshot.to_vec();
    next.push(Task::new(domain::next_id(snapshot), trimmed));
    next
}

/// Flip completion on the task matching `id`; no-op when absent
pub fn toggle(snapshot: &[Task], id: TaskId) -> Vec<Task> {
    snapshot
        .iter()
        .map(|t| {
            if t.id == id {
                Task {
                    completed: !t.completed,
                    ..t.clone()
                }
            } else {
                t.clone()
            }
        })
        .collect()
}

/// Replace the text of the task matching `id` with `new_text`, trimmed
///
/// No-op when `new_text` is blank (a task can never become visually empty)
/// or when `id` is absent. Completion state is untouched.
pub fn edit(snapshot: &[Task], id: TaskId, new_text: &str) -> Vec<Task> {
    let trimmed = new_text.trim();
    if trimmed.is_empty() {
        return snapshot.to_vec();
    }
    snapshot
        .iter()
        .map(|t| {
            if t.id == id {
                Task {
                    text: trimmed.to_string(),
                    ..t.clone()
                }
            } else {
                t.clone()
            }
        })
        .collect()
}

/// Remove the task matching `id`; no-op when absent
pub fn delete(snapshot: &[Task], id: TaskId) -> Vec<Task> {
    snapshot.iter().filter(|t| t.id != id).cloned().collect()
}

/// Drop every task
pub fn clear(_snapshot: &[Task]) -> Vec<Task> {
    Vec::new()
}

/// Order-preserving sublist passing `mode` whose text contains `query`
///
/// Matching is case-insensitive substring containment; an empty query
/// matches everything.
pub fn filter(snapshot: &[Task], mode: FilterMode, query: &str) -> Vec<Task> {
    let needle = query.to_lowercase();
    snapshot
        .iter()
        .filter(|t| mode.matches(t) && t.text.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Count tasks by completion state
pub fn stats(snapshot: &[Task]) -> Stats {
    let completed = snapshot.iter().filter(|t| t.completed).count();
    Stats {
        total: snapshot.len(),
        completed,
        active: snapshot.len() - completed,
    }
}
