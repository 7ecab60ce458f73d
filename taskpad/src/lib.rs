//! taskpad - local-first to-do task core
//!
//! The state core of a single-screen to-do list: pure snapshot transitions
//! (add/toggle/edit/delete/clear, plus a filter+search projection) over an
//! ordered task list, persisted as one JSON array under a fixed key in a
//! local key-value store. Rendering belongs to the embedder; this crate owns
//! state and persistence only.
//!
//! # Architecture
//!
//! ```text
//! {store_path}/
//! └── tasks_list       # UTF-8 JSON array of {id, text, completed}
//! ```
//!
//! Load happens once at startup; every mutation produces a new snapshot and
//! replaces the persisted value atomically. Missing or corrupt data degrades
//! to an empty list, never to a crash.
//!
//! # Example
//!
//! ```ignore
//! use taskpad::{Config, Session, TaskRepository};
//!
//! let config = Config::load(None)?;
//! let repo = TaskRepository::open(&config.store_path)?;
//! let mut session = Session::open(repo);
//!
//! session.add("Buy milk")?;
//! session.set_search("milk");
//! for task in session.visible() {
//!     println!("[{}] {}", if task.completed { "x" } else { " " }, task.text);
//! }
//! ```

pub mod config;
pub mod domain;
pub mod kv;
pub mod repo;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use domain::{Task, TaskId};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use repo::{TASKS_KEY, TaskRepository};
pub use session::Session;
pub use store::{FilterMode, Stats};
