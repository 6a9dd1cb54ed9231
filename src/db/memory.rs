//! In-memory task store.
//!
//! Mirrors the behavior of the SQLite store closely enough to stand in for it
//! in tests: ids grow monotonically and are never reused, results come back in
//! id order and description search ignores ASCII case like SQLite's `LIKE`.

use crate::libs::store::TaskStore;
use crate::libs::task::{NewTask, Task, TaskFilter, TaskUpdate};
use anyhow::Result;

#[derive(Debug, Default)]
pub struct MemoryTasks {
    tasks: Vec<Task>,
    last_id: i64,
}

impl MemoryTasks {
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

fn matches(task: &Task, filter: &TaskFilter) -> bool {
    match filter {
        TaskFilter::All => true,
        TaskFilter::ByStatus(status) => task.status == *status,
        TaskFilter::Search(query) => task
            .description
            .to_ascii_lowercase()
            .contains(&query.to_ascii_lowercase()),
        TaskFilter::WithDeadline => task.deadline.is_some(),
    }
}

impl TaskStore for MemoryTasks {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn insert(&mut self, task: &NewTask) -> Result<Task> {
        self.last_id += 1;
        let task = task.clone().into_task(self.last_id);
        self.tasks.push(task.clone());

        Ok(task)
    }

    fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        Ok(self.tasks.iter().filter(|task| matches(task, &filter)).cloned().collect())
    }

    fn get(&mut self, id: i64) -> Result<Option<Task>> {
        Ok(self.tasks.iter().find(|task| task.id == id).cloned())
    }

    fn update(&mut self, id: i64, update: &TaskUpdate) -> Result<Option<Task>> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        update.apply_to(task);

        Ok(Some(task.clone()))
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);

        Ok(self.tasks.len() < before)
    }
}
