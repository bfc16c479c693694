//! Session-scoped ownership of the task collection.
//!
//! Exactly one [`TaskSession`] exists per running front end: it is the single
//! writer and single reader of the collection, so no locking is involved.
//! Mutations go through the lifecycle engine, and each committed mutation is
//! followed by a synchronous best-effort save. A failed write is logged and
//! swallowed; the in-memory state is never rolled back.
//!
//! Presentation-only state (selection, form visibility) lives in the separate
//! [`ViewState`] so domain data and view bookkeeping never share a store.

use crate::libs::config::Config;
use crate::libs::lifecycle::{self, TaskCommand};
use crate::libs::messages::Message;
use crate::libs::store::{JsonFileStore, TaskStore};
use crate::libs::task::{TaskDraft, TaskId, TaskRecord};
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use chrono::NaiveDateTime;

pub struct TaskSession {
    tasks: Vec<TaskRecord>,
    store: Box<dyn TaskStore>,
}

impl TaskSession {
    /// Opens a session, performing the single load from the store.
    pub fn open(store: Box<dyn TaskStore>) -> Result<Self> {
        let tasks = store.load()?;
        Ok(Self { tasks, store })
    }

    /// Opens a session backed by the file store named in the configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let store = JsonFileStore::with_file_name(&config.storage().file_name)?;
        Self::open(Box::new(store))
    }

    /// The live collection, in insertion order.
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    pub fn task_by_id(&self, id: TaskId) -> Option<&TaskRecord> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Creates a task from the draft, commits it, and returns the new record.
    pub fn add_task(&mut self, draft: TaskDraft, now: NaiveDateTime) -> TaskRecord {
        let (tasks, record) = lifecycle::create_task(&self.tasks, draft, now);
        self.tasks = tasks;
        msg_debug!(Message::TaskCommitted(record.id.to_string()));
        self.persist();
        record
    }

    /// Commits an edited record. Unknown ids are a no-op (but still logged).
    pub fn update_task(&mut self, record: TaskRecord, now: NaiveDateTime) {
        if self.task_by_id(record.id).is_none() {
            msg_debug!(Message::UnknownTaskIgnored(record.id.to_string()));
        }
        self.tasks = lifecycle::update_task(&self.tasks, record, now);
        self.persist();
    }

    /// Removes a task; deleting an unknown id is a no-op.
    pub fn delete_task(&mut self, id: TaskId) {
        self.tasks = lifecycle::delete_task(&self.tasks, id);
        msg_debug!(Message::TaskRemoved(id.to_string()));
        self.persist();
    }

    /// Cycles the status of the given task and commits the transition.
    pub fn advance_status(&mut self, id: TaskId, now: NaiveDateTime) {
        let Some(task) = self.task_by_id(id) else {
            msg_debug!(Message::UnknownTaskIgnored(id.to_string()));
            return;
        };
        let mut next = task.clone();
        next.status = lifecycle::cycle_status(next.status);
        self.update_task(next, now);
    }

    /// Applies a lifecycle command and commits the result.
    pub fn dispatch(&mut self, command: TaskCommand, now: NaiveDateTime) {
        self.tasks = lifecycle::apply(&self.tasks, command, now);
        self.persist();
    }

    // The in-memory collection is the authority; a failed write is not
    // retried and does not roll anything back.
    fn persist(&self) {
        if let Err(err) = self.store.save(&self.tasks) {
            msg_warning!(Message::TaskStoreSaveFailed(err.to_string()));
        }
    }
}

/// Presentation-session state: which task is selected and whether the task
/// form is open. Deliberately separate from the domain collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    selected_task_id: Option<TaskId>,
    form_open: bool,
    edit_mode: bool,
}

impl ViewState {
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.selected_task_id
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn is_edit_mode(&self) -> bool {
        self.edit_mode
    }

    /// Selecting a task opens the form in edit mode; `None` clears the
    /// selection and closes it.
    pub fn select_task(&mut self, id: Option<TaskId>) {
        self.selected_task_id = id;
        self.form_open = id.is_some();
        if id.is_some() {
            self.edit_mode = true;
        }
    }

    /// Opening the form without a selection starts a fresh draft; closing it
    /// drops the selection.
    pub fn toggle_form(&mut self, open: bool) {
        self.form_open = open;
        if open {
            self.edit_mode = false;
        } else {
            self.selected_task_id = None;
        }
    }

    /// Clears the selection when the selected task is deleted.
    pub fn task_deleted(&mut self, id: TaskId) {
        if self.selected_task_id == Some(id) {
            self.selected_task_id = None;
        }
    }
}
