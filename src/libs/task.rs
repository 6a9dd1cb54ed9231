//! Task records and the value types used to create, change and query them.
//!
//! A task carries a description, an optional deadline, a status and a
//! priority. Status and priority are closed enumerations: free text coming
//! from the command line or from the database is parsed once at the boundary
//! and rejected when it is not one of the known values.
//!
//! ## Usage
//!
//! ```rust
//! use tsk::libs::task::{NewTask, TaskPriority, TaskStatus, TaskUpdate};
//!
//! let task = NewTask::new("Reach milestone 1", None, TaskPriority::High);
//! assert_eq!(task.status, TaskStatus::Pending);
//!
//! let update = TaskUpdate::default().status(TaskStatus::Completed);
//! assert!(!update.is_empty());
//! ```

use super::error::TaskError;
use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// Text stored in the database and shown to the user.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(TaskError::InvalidStatus(s.to_string())),
        }
    }
}

/// Relative importance of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    #[default]
    Medium,
    Low,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 3] = [TaskPriority::High, TaskPriority::Medium, TaskPriority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::High => "high",
            TaskPriority::Medium => "medium",
            TaskPriority::Low => "low",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(TaskPriority::High),
            "medium" => Ok(TaskPriority::Medium),
            "low" => Ok(TaskPriority::Low),
            _ => Err(TaskError::InvalidPriority(s.to_string())),
        }
    }
}

// Both enums are stored as their lowercase text. Rows holding anything else
// fail to load instead of being coerced.
macro_rules! sql_text_enum {
    ($ty:ty) => {
        impl ToSql for $ty {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.as_str()))
            }
        }

        impl FromSql for $ty {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                value.as_str()?.parse().map_err(|e: TaskError| FromSqlError::Other(Box::new(e)))
            }
        }
    };
}

sql_text_enum!(TaskStatus);
sql_text_enum!(TaskPriority);

/// A stored task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-assigned identifier, never reused.
    pub id: i64,
    pub description: String,
    /// `None` when the task has no deadline.
    pub deadline: Option<NaiveDate>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}

/// Field values for a task that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub description: String,
    pub deadline: Option<NaiveDate>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
}

impl NewTask {
    /// Creates a pending task.
    pub fn new(description: &str, deadline: Option<NaiveDate>, priority: TaskPriority) -> Self {
        NewTask {
            description: description.to_string(),
            deadline,
            status: TaskStatus::Pending,
            priority,
        }
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Materializes the record once the store has assigned an id.
    pub fn into_task(self, id: i64) -> Task {
        Task {
            id,
            description: self.description,
            deadline: self.deadline,
            status: self.status,
            priority: self.priority,
        }
    }
}

/// A partial change to a task. Fields left as `None` are not touched.
///
/// `deadline` is doubly optional: `Some(None)` clears the deadline while
/// `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub description: Option<String>,
    pub deadline: Option<Option<NaiveDate>>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl TaskUpdate {
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.deadline.is_none() && self.status.is_none() && self.priority.is_none()
    }

    /// Applies the change to an in-memory record.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(deadline) = self.deadline {
            task.deadline = deadline;
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
    }
}

/// Selection applied when fetching tasks from a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskFilter {
    All,
    ByStatus(TaskStatus),
    /// Substring match anywhere in the description.
    Search(String),
    /// Only tasks that have a deadline.
    WithDeadline,
}

/// Ordering for [`TaskTracker::sort`](crate::libs::tracker::TaskTracker::sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Deadline,
    Status,
}

impl From<&str> for SortKey {
    /// Anything other than `status` sorts by deadline.
    fn from(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("status") {
            SortKey::Status
        } else {
            SortKey::Deadline
        }
    }
}
