//! Storage handle for task records.
//!
//! The tracker never opens a database itself: it is handed something that
//! implements [`TaskStore`]. The SQLite-backed [`Tasks`](crate::db::tasks::Tasks)
//! is used by the CLI and [`MemoryTasks`](crate::db::memory::MemoryTasks) backs
//! the tests.

use super::task::{NewTask, Task, TaskFilter, TaskUpdate};
use anyhow::Result;

/// Create/read/update/delete access to the task collection.
///
/// Missing ids are not errors: [`update`](TaskStore::update) returns `None`
/// and [`delete`](TaskStore::delete) returns `false`. Errors are storage
/// faults and are propagated untouched.
pub trait TaskStore {
    /// Prepares the backing storage. Must be idempotent.
    fn init(&mut self) -> Result<()>;

    /// Stores a new task and returns it with its assigned id.
    fn insert(&mut self, task: &NewTask) -> Result<Task>;

    /// Returns the tasks matching `filter` in storage order.
    fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>>;

    fn get(&mut self, id: i64) -> Result<Option<Task>>;

    /// Writes every field present in `update`, all or nothing.
    fn update(&mut self, id: i64, update: &TaskUpdate) -> Result<Option<Task>>;

    fn delete(&mut self, id: i64) -> Result<bool>;
}
