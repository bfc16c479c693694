//! # Tasklens
//!
//! The core engine of a single-user task manager: lifecycle transitions,
//! filtering and sorting, and time-windowed statistics over a collection of
//! task records persisted as a single JSON blob.
//!
//! ## Features
//!
//! - **Lifecycle Engine**: pure create/update/delete transitions with
//!   completion-time bookkeeping
//! - **Query Engine**: status and text filters, stable multi-key sorting
//! - **Statistics Engine**: calendar-window status counts, monthly creation
//!   histograms, overdue checks
//! - **Persistence Adapter**: single-blob JSON storage with corruption
//!   recovery
//! - **Session Layer**: one owner for the live collection, saving after
//!   every committed mutation
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
//! session.add_task(
//!     TaskDraft::new("Write spec", "Outline the data model", TaskCategory::Blue),
//!     chrono::Local::now().naive_local(),
//! );
//! # Ok(())
//! # }
//! ```

pub mod libs;
