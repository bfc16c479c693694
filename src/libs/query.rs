//! Query engine: pure filter and sort functions over a task collection.
//!
//! All functions take the input sequence and explicit parameters, and return
//! a new sequence. Filters preserve input order; sorts are stable, so records
//! with equal keys keep their relative input order.

use crate::libs::task::{TaskRecord, TaskStatus};
use std::cmp::Ordering;

/// Status filter selector: everything, or an exact status match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Only(TaskStatus),
}

/// Sortable keys of a task record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    DueDate,
    CreatedAt,
    Title,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Keeps tasks matching the filter; `All` is the identity.
pub fn filter_by_status(tasks: &[TaskRecord], filter: StatusFilter) -> Vec<TaskRecord> {
    match filter {
        StatusFilter::All => tasks.to_vec(),
        StatusFilter::Only(status) => tasks.iter().filter(|task| task.status == status).cloned().collect(),
    }
}

/// Case-insensitive substring match against title or description.
///
/// A term that trims to empty skips filtering entirely and returns the input
/// unchanged, rather than matching the empty string against every record.
pub fn filter_by_text(tasks: &[TaskRecord], term: &str) -> Vec<TaskRecord> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return tasks.to_vec();
    }
    tasks
        .iter()
        .filter(|task| task.title.to_lowercase().contains(&needle) || task.description.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Ascending due-date sort; undated records sort after all dated ones and
/// keep their relative input order among themselves.
pub fn sort_by_due_date(tasks: &[TaskRecord]) -> Vec<TaskRecord> {
    sort_tasks(tasks, SortKey::DueDate, SortDirection::Asc)
}

/// Stable sort by the given key and direction.
///
/// An absent due date sorts after all present values in *both* directions;
/// this is the defined behavior, not an artifact of the comparison. Title
/// comparison is case-folded lexicographic, created-at is plain timestamp
/// order.
pub fn sort_tasks(tasks: &[TaskRecord], key: SortKey, direction: SortDirection) -> Vec<TaskRecord> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| compare(a, b, key, direction));
    sorted
}

fn compare(a: &TaskRecord, b: &TaskRecord, key: SortKey, direction: SortDirection) -> Ordering {
    match key {
        SortKey::DueDate => match (a.due_date, b.due_date) {
            (None, None) => Ordering::Equal,
            // Undated records stay last regardless of direction.
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(lhs), Some(rhs)) => directed(lhs.cmp(&rhs), direction),
        },
        SortKey::CreatedAt => directed(a.created_at.cmp(&b.created_at), direction),
        SortKey::Title => directed(a.title.to_lowercase().cmp(&b.title.to_lowercase()), direction),
    }
}

fn directed(ordering: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

/// A composed view query: status filter, then text search, then sort.
///
/// Mirrors what a list view asks for on every render. The default shows all
/// tasks, newest first.
#[derive(Debug, Clone)]
pub struct TaskQuery {
    pub status: StatusFilter,
    pub search_term: String,
    pub sort_by: SortKey,
    pub direction: SortDirection,
}

impl Default for TaskQuery {
    fn default() -> Self {
        TaskQuery {
            status: StatusFilter::All,
            search_term: String::new(),
            sort_by: SortKey::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

impl TaskQuery {
    pub fn apply(&self, tasks: &[TaskRecord]) -> Vec<TaskRecord> {
        let by_status = filter_by_status(tasks, self.status);
        let matched = filter_by_text(&by_status, &self.search_term);
        sort_tasks(&matched, self.sort_by, self.direction)
    }
}
