//! Statistics engine: pure aggregation over a task collection.
//!
//! Status counts, calendar-window filtering (week/month/year), a rolling
//! monthly creation histogram, and overdue checks. Every function takes the
//! reference instant as an explicit parameter instead of reading a clock, so
//! results are deterministic for a given input.

use crate::libs::task::{TaskRecord, TaskStatus};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

/// Per-status record counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.done
    }
}

/// Canonical calendar window containing a reference instant.
/// Weeks start on Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Week,
    Month,
    Year,
}

/// One bucket of the monthly creation histogram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthBucket {
    /// Abbreviated month name, e.g. "Jun".
    pub label: String,
    pub count: usize,
}

/// Partitions the collection by status. The status domain is closed, so the
/// three counters always sum to the input length.
pub fn count_by_status(tasks: &[TaskRecord]) -> StatusCounts {
    let mut counts = StatusCounts::default();
    for task in tasks {
        match task.status {
            TaskStatus::Todo => counts.todo += 1,
            TaskStatus::InProgress => counts.in_progress += 1,
            TaskStatus::Done => counts.done += 1,
        }
    }
    counts
}

/// Retains records whose `created_at` falls inside the calendar window
/// containing `reference`. The window is a closed interval: records created
/// on the first or last day of the window are included.
pub fn window_filter(tasks: &[TaskRecord], period: Period, reference: NaiveDateTime) -> Vec<TaskRecord> {
    let (start, end) = window_bounds(period, reference.date());
    tasks
        .iter()
        .filter(|task| {
            let created = task.created_at.date();
            created >= start && created <= end
        })
        .cloned()
        .collect()
}

/// [`window_filter`] composed with [`count_by_status`].
pub fn count_by_status_in_window(tasks: &[TaskRecord], period: Period, reference: NaiveDateTime) -> StatusCounts {
    count_by_status(&window_filter(tasks, period, reference))
}

/// Creation counts for the `months_back` calendar months ending at the month
/// containing `reference`, ordered oldest to newest. Each bucket counts
/// records whose `created_at` falls inside that month's closed interval.
pub fn monthly_histogram(tasks: &[TaskRecord], months_back: u32, reference: NaiveDateTime) -> Vec<MonthBucket> {
    let mut buckets = Vec::with_capacity(months_back as usize);
    for offset in (0..months_back).rev() {
        let Some(month) = reference.date().checked_sub_months(Months::new(offset)) else {
            continue;
        };
        let (start, end) = month_bounds(month);
        let count = tasks
            .iter()
            .filter(|task| {
                let created = task.created_at.date();
                created >= start && created <= end
            })
            .count();
        buckets.push(MonthBucket {
            label: month.format("%b").to_string(),
            count,
        });
    }
    buckets
}

/// True iff the task has a due date, is not done, and its due day started
/// before `reference`. Completed tasks are never overdue regardless of date.
pub fn is_overdue(task: &TaskRecord, reference: NaiveDateTime) -> bool {
    if task.status == TaskStatus::Done {
        return false;
    }
    match task.due_date {
        Some(due) => due.and_time(NaiveTime::MIN) < reference,
        None => false,
    }
}

/// Number of overdue tasks in the collection.
pub fn overdue_count(tasks: &[TaskRecord], reference: NaiveDateTime) -> usize {
    tasks.iter().filter(|task| is_overdue(task, reference)).count()
}

/// Share of done tasks as a rounded percentage; 0 for an empty collection.
pub fn completion_rate(tasks: &[TaskRecord]) -> u32 {
    if tasks.is_empty() {
        return 0;
    }
    let done = tasks.iter().filter(|task| task.status == TaskStatus::Done).count();
    ((done as f64 / tasks.len() as f64) * 100.0).round() as u32
}

fn window_bounds(period: Period, reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    match period {
        Period::Week => {
            let week = reference.week(Weekday::Mon);
            (week.first_day(), week.last_day())
        }
        Period::Month => month_bounds(reference),
        Period::Year => {
            let start = reference.with_ordinal(1).unwrap_or(reference);
            let end = NaiveDate::from_ymd_opt(reference.year(), 12, 31).unwrap_or(reference);
            (start, end)
        }
    }
}

fn month_bounds(reference: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = reference.with_day(1).unwrap_or(reference);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.checked_sub_days(Days::new(1)))
        .unwrap_or(reference);
    (start, end)
}
