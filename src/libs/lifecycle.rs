//! Task lifecycle engine.
//!
//! Pure transition functions over `(collection, operation) -> new collection`.
//! The engine holds no state between calls; the session layer owns the
//! collection and commits each result. Every function that needs "now"
//! receives it as an explicit parameter, so transitions stay deterministic
//! and testable.
//!
//! The engine is the sole authority for `completed_at`: whatever a caller
//! passes in that field is overridden against the previously stored value
//! during `update_task`.

use crate::libs::task::{TaskDraft, TaskId, TaskRecord, TaskStatus};
use chrono::NaiveDateTime;
use uuid::Uuid;

/// A lifecycle mutation, dispatched by [`apply`].
///
/// This is the reducer form of the engine: a tagged command applied to the
/// current collection, independent of any UI binding.
#[derive(Debug, Clone)]
pub enum TaskCommand {
    Create(TaskDraft),
    Update(TaskRecord),
    Delete(TaskId),
}

/// Creates a task from a draft and appends it to the collection.
///
/// Assigns a fresh id and `created_at = now`. `completed_at` starts as `None`
/// even when the draft status is `Done`: completion time is only ever set by
/// an explicit transition, never inferred at creation.
pub fn create_task(tasks: &[TaskRecord], draft: TaskDraft, now: NaiveDateTime) -> (Vec<TaskRecord>, TaskRecord) {
    let record = TaskRecord {
        id: Uuid::new_v4(),
        title: draft.title,
        description: draft.description,
        status: draft.status,
        due_date: draft.due_date,
        category: draft.category,
        created_at: now,
        completed_at: None,
    };

    let mut next = tasks.to_vec();
    next.push(record.clone());
    (next, record)
}

/// Replaces the record matching `incoming.id`; no-op when the id is absent.
///
/// `completed_at` is re-derived against the previous stored value for that
/// id, not against the incoming record's own field: a transition into `Done`
/// with no prior completion stamps `now`, a transition away from `Done`
/// clears the stamp, and a record staying `Done` keeps its original stamp.
/// `created_at` is carried over from the stored record unchanged.
pub fn update_task(tasks: &[TaskRecord], incoming: TaskRecord, now: NaiveDateTime) -> Vec<TaskRecord> {
    tasks
        .iter()
        .map(|task| {
            if task.id != incoming.id {
                return task.clone();
            }
            let mut next = incoming.clone();
            next.created_at = task.created_at;
            next.completed_at = match next.status {
                TaskStatus::Done => task.completed_at.or(Some(now)),
                _ => None,
            };
            next
        })
        .collect()
}

/// Removes the record with the given id. Idempotent: deleting an id that is
/// not in the collection returns it unchanged.
pub fn delete_task(tasks: &[TaskRecord], id: TaskId) -> Vec<TaskRecord> {
    tasks.iter().filter(|task| task.id != id).cloned().collect()
}

/// Deterministic three-step status cycle:
/// `Todo -> InProgress -> Done -> Todo`.
///
/// Pure helper; it does not commit anything. Callers pass the result into
/// [`update_task`] to record the transition.
pub fn cycle_status(status: TaskStatus) -> TaskStatus {
    match status {
        TaskStatus::Todo => TaskStatus::InProgress,
        TaskStatus::InProgress => TaskStatus::Done,
        TaskStatus::Done => TaskStatus::Todo,
    }
}

/// Applies a [`TaskCommand`] to the collection and returns the next state.
pub fn apply(tasks: &[TaskRecord], command: TaskCommand, now: NaiveDateTime) -> Vec<TaskRecord> {
    match command {
        TaskCommand::Create(draft) => create_task(tasks, draft, now).0,
        TaskCommand::Update(record) => update_task(tasks, record, now),
        TaskCommand::Delete(id) => delete_task(tasks, id),
    }
}
