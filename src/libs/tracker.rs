//! Task tracking operations on top of an injected [`TaskStore`].
//!
//! `TaskTracker` is the layer the command handlers talk to. It validates
//! descriptions, orders task lists and computes which tasks are due soon;
//! persistence is left entirely to the store it wraps.
//!
//! ## Usage
//!
//! ```rust
//! use tsk::db::memory::MemoryTasks;
//! use tsk::libs::task::{SortKey, TaskPriority};
//! use tsk::libs::tracker::TaskTracker;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tracker = TaskTracker::new(MemoryTasks::default())?;
//! tracker.create("Write report", None, TaskPriority::High)?;
//! let sorted = tracker.sort(SortKey::Deadline)?;
//! assert_eq!(sorted.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! ## Due-soon window
//!
//! A task is due soon when its deadline, taken at midnight, is no later than
//! `now + window`. The window rolls with the current instant, so a deadline of
//! tomorrow is always included while the day after tomorrow is not. Overdue
//! tasks are included as well.

use super::error::TaskError;
use super::store::TaskStore;
use super::task::{NewTask, SortKey, Task, TaskFilter, TaskPriority, TaskStatus, TaskUpdate};
use crate::msg_debug;
use anyhow::Result;
use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// Default width of the due-soon window, in hours.
pub const DEFAULT_DUE_SOON_HOURS: i64 = 24;

pub struct TaskTracker<S: TaskStore> {
    store: S,
    due_window: Duration,
}

impl<S: TaskStore> TaskTracker<S> {
    /// Wraps `store`, initializing it first.
    pub fn new(mut store: S) -> Result<Self> {
        store.init()?;
        Ok(Self {
            store,
            due_window: Duration::hours(DEFAULT_DUE_SOON_HOURS),
        })
    }

    pub fn with_due_window(mut self, due_window: Duration) -> Self {
        self.due_window = due_window;
        self
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Records a new pending task.
    pub fn create(&mut self, description: &str, deadline: Option<NaiveDate>, priority: TaskPriority) -> Result<Task> {
        self.add(NewTask::new(description, deadline, priority))
    }

    pub fn add(&mut self, task: NewTask) -> Result<Task> {
        if task.description.trim().is_empty() {
            return Err(TaskError::EmptyDescription.into());
        }
        let task = self.store.insert(&task)?;
        msg_debug!(format!("Created task {} ({})", task.id, task.description));
        Ok(task)
    }

    pub fn list_all(&mut self) -> Result<Vec<Task>> {
        self.store.fetch(TaskFilter::All)
    }

    pub fn list_by_status(&mut self, status: TaskStatus) -> Result<Vec<Task>> {
        self.store.fetch(TaskFilter::ByStatus(status))
    }

    pub fn search(&mut self, query: &str) -> Result<Vec<Task>> {
        self.store.fetch(TaskFilter::Search(query.to_string()))
    }

    /// Applies a partial update. Returns `None` when `id` does not exist.
    pub fn update(&mut self, id: i64, update: &TaskUpdate) -> Result<Option<Task>> {
        if update.description.as_deref().is_some_and(|d| d.trim().is_empty()) {
            return Err(TaskError::EmptyDescription.into());
        }
        if update.is_empty() {
            return self.store.get(id);
        }
        self.store.update(id, update)
    }

    /// Deletes a task. Returns `false` when `id` does not exist.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        self.store.delete(id)
    }

    /// Loads every task and orders it by `key`.
    pub fn sort(&mut self, key: SortKey) -> Result<Vec<Task>> {
        let mut tasks = self.store.fetch(TaskFilter::All)?;
        sort_tasks(&mut tasks, key);
        Ok(tasks)
    }

    /// Tasks whose deadline falls within the due-soon window after `now`.
    pub fn due_soon(&mut self, now: NaiveDateTime) -> Result<Vec<Task>> {
        let limit = now.checked_add_signed(self.due_window).unwrap_or(NaiveDateTime::MAX);
        let tasks = self.store.fetch(TaskFilter::WithDeadline)?;

        Ok(tasks.into_iter().filter(|task| is_due_by(task, limit)).collect())
    }

    pub fn due_soon_now(&mut self) -> Result<Vec<Task>> {
        self.due_soon(Local::now().naive_local())
    }
}

fn is_due_by(task: &Task, limit: NaiveDateTime) -> bool {
    task.deadline
        .and_then(|deadline| deadline.and_hms_opt(0, 0, 0))
        .is_some_and(|deadline| deadline <= limit)
}

/// Orders tasks in place. Ties keep their relative order.
///
/// By deadline, tasks without one come after every dated task.
pub fn sort_tasks(tasks: &mut [Task], key: SortKey) {
    match key {
        SortKey::Status => tasks.sort_by(|a, b| a.status.as_str().cmp(b.status.as_str())),
        SortKey::Deadline => tasks.sort_by_key(|task| (task.deadline.is_none(), task.deadline)),
    }
}
