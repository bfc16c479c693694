use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier assigned to every task at creation, never reused.
pub type TaskId = Uuid;

/// Task lifecycle state. Drives completion bookkeeping: `completed_at` is
/// present on a record exactly while its status is `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

/// Fixed palette of color tags. Purely a presentational grouping; no
/// behavior is attached to the choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Blue,
    Purple,
    Orange,
    Green,
    Pink,
    Yellow,
}

impl TaskCategory {
    /// All palette members, in display order.
    pub const ALL: [TaskCategory; 6] = [
        TaskCategory::Blue,
        TaskCategory::Purple,
        TaskCategory::Orange,
        TaskCategory::Green,
        TaskCategory::Pink,
        TaskCategory::Yellow,
    ];
}

/// The persisted task entity.
///
/// Field names serialize in camelCase and timestamps as ISO 8601 strings,
/// so blobs written by earlier versions of the app reload unchanged.
///
/// Invariants maintained by the lifecycle engine:
/// - `completed_at` is `Some` iff `status == Done`
/// - `id` is unique across the live collection
/// - `created_at` never changes after creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub category: TaskCategory,
    pub created_at: NaiveDateTime,
    pub completed_at: Option<NaiveDateTime>,
}

/// Creation payload for a new task. The caller is responsible for rejecting
/// a blank title before constructing a draft; the engine does not validate it.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub due_date: Option<NaiveDate>,
    pub category: TaskCategory,
}

impl TaskDraft {
    pub fn new(title: &str, description: &str, category: TaskCategory) -> Self {
        TaskDraft {
            title: title.to_string(),
            description: description.to_string(),
            status: TaskStatus::Todo,
            due_date: None,
            category,
        }
    }
}
