//! Core library modules for the tasklens crate.
//!
//! Serves as the main entry point for all tasklens components: the task
//! model and its lifecycle engine, the query and statistics engines, the
//! persistence adapter, and the session layer that wires them together.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasklens::libs::session::TaskSession;
//! use tasklens::libs::store::JsonFileStore;
//! use tasklens::libs::task::{TaskCategory, TaskDraft};
//!
//! # fn main() -> anyhow::Result<()> {
//! let store = JsonFileStore::new()?;
//! let mut session = TaskSession::open(Box::new(store))?;
//! let draft = TaskDraft::new("Write spec", "", TaskCategory::Blue);
//! session.add_task(draft, chrono::Local::now().naive_local());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod lifecycle;
pub mod logging;
pub mod messages;
pub mod query;
pub mod session;
pub mod stats;
pub mod store;
pub mod task;
