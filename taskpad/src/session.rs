//! Interactive task session
//!
//! Owns the current snapshot plus the transient view state the rendering
//! layer needs: filter mode, search query, and the two-mode edit toggle.
//! Every mutation applies a pure store transition and persists the new
//! snapshot; transient state is never persisted.

use eyre::Result;

use crate::domain::{Task, TaskId};
use crate::repo::TaskRepository;
use crate::store::{self, FilterMode, Stats};

/// Edit mode over a single task: the target id and the in-progress draft
#[derive(Debug, Clone, PartialEq, Eq)]
struct EditState {
    id: TaskId,
    draft: String,
}

/// A single-user session over one persisted task list
pub struct Session {
    repo: TaskRepository,
    tasks: Vec<Task>,
    filter: FilterMode,
    search: String,
    editing: Option<EditState>,
}

impl Session {
    /// Open a session, loading the persisted snapshot once
    pub fn open(repo: TaskRepository) -> Self {
        let tasks = repo.load();
        Self {
            repo,
            tasks,
            filter: FilterMode::default(),
            search: String::new(),
            editing: None,
        }
    }

    /// The full current snapshot
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The snapshot as projected by the current filter mode and search query
    pub fn visible(&self) -> Vec<Task> {
        store::filter(&self.tasks, self.filter, &self.search)
    }

    /// Counts for the stats row
    pub fn stats(&self) -> Stats {
        store::stats(&self.tasks)
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn set_filter(&mut self, mode: FilterMode) {
        self.filter = mode;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    /// Append a new task; blank text is ignored
    pub fn add(&mut self, text: &str) -> Result<()> {
        self.apply(store::add(&self.tasks, text))
    }

    /// Flip completion on the task matching `id`
    pub fn toggle(&mut self, id: TaskId) -> Result<()> {
        self.apply(store::toggle(&self.tasks, id))
    }

    /// Remove the task matching `id`
    pub fn delete(&mut self, id: TaskId) -> Result<()> {
        self.apply(store::delete(&self.tasks, id))
    }

    /// Remove every task
    pub fn clear(&mut self) -> Result<()> {
        self.apply(store::clear(&self.tasks))
    }

    /// Enter edit mode on `id`, seeding the draft with the current text
    ///
    /// No-op when `id` is not in the snapshot.
    pub fn begin_edit(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter().find(|t| t.id == id) {
            self.editing = Some(EditState {
                id,
                draft: task.text.clone(),
            });
        }
    }

    /// The id currently in edit mode, if any
    pub fn editing(&self) -> Option<TaskId> {
        self.editing.as_ref().map(|e| e.id)
    }

    /// The in-progress edit draft, if in edit mode
    pub fn draft(&self) -> Option<&str> {
        self.editing.as_ref().map(|e| e.draft.as_str())
    }

    /// Replace the edit draft; no-op outside edit mode
    pub fn set_draft(&mut self, text: impl Into<String>) {
        if let Some(edit) = self.editing.as_mut() {
            edit.draft = text.into();
        }
    }

    /// Apply the draft to the edited task and leave edit mode
    ///
    /// A blank draft leaves the task unchanged; edit mode ends either way.
    pub fn save_edit(&mut self) -> Result<()> {
        let Some(edit) = self.editing.take() else {
            return Ok(());
        };
        self.apply(store::edit(&self.tasks, edit.id, &edit.draft))
    }

    /// Leave edit mode without applying the draft
    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Install `next` as the current snapshot and persist it
    ///
    /// Skips the write when the transition was a no-op, so invalid input
    /// never touches storage.
    fn apply(&mut self, next: Vec<Task>) -> Result<()> {
        if next == self.tasks {
            return Ok(());
        }
        self.tasks = next;
        self.repo.save(&self.tasks)
    }
}
