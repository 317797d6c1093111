//! Shared fixtures and helpers for board tests.

use crate::task::domain::{Task, TaskDraft, TaskId, TaskPriority, TaskRecordData, TaskStatus};
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;

/// Builds a fixed UTC timestamp.
pub fn timestamp(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0)
        .single()
        .expect("valid timestamp")
}

/// Builds a task with the given title and status, stamped now.
pub fn task_with_status(title: &str, status: TaskStatus) -> Task {
    Task::new(
        TaskDraft::new(title).expect("valid title").with_status(status),
        None,
        &DefaultClock,
    )
}

/// Reconstructs a task record with an explicit last-update timestamp.
pub fn task_updated_at(title: &str, status: TaskStatus, updated_at: DateTime<Utc>) -> Task {
    Task::from_record(TaskRecordData {
        id: TaskId::new(),
        title: title.to_owned(),
        status,
        priority: TaskPriority::Medium,
        project_id: None,
        due_date: None,
        description: None,
        assignee: None,
        owner: None,
        created_at: updated_at,
        updated_at,
    })
}
