//! SQLite-backed task store.
//!
//! All tasks live in a single `tasks` table. Deadlines are ISO `YYYY-MM-DD`
//! text (or `NULL`), status and priority their lowercase names.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsk::db::tasks::Tasks;
//! use tsk::libs::store::TaskStore;
//! use tsk::libs::task::{NewTask, TaskFilter, TaskPriority};
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tasks = Tasks::new()?;
//! tasks.insert(&NewTask::new("Reach milestone 1", None, TaskPriority::High))?;
//! let found = tasks.fetch(TaskFilter::Search("mile".to_string()))?;
//! # Ok(())
//! # }
//! ```

use super::db::Db;
use crate::libs::store::TaskStore;
use crate::libs::task::{NewTask, Task, TaskFilter, TaskUpdate};
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, ToSql};
use std::path::Path;

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL,
    deadline TEXT,
    status TEXT NOT NULL,
    priority TEXT NOT NULL
);";

/// Earlier releases stored this date in place of a missing deadline.
const CLEAR_LEGACY_DEADLINES: &str = "UPDATE tasks SET deadline = NULL WHERE deadline = '2999-12-31'";

/// Schema version recorded in `PRAGMA user_version`. Files left by earlier
/// releases are at 0.
const SCHEMA_VERSION: i64 = 1;

const INSERT_TASK: &str = "INSERT INTO tasks (description, deadline, status, priority) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TASKS: &str = "SELECT id, description, deadline, status, priority FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_STATUS: &str = "WHERE status = ?1";
const WHERE_DESCRIPTION_LIKE: &str = "WHERE description LIKE '%' || ?1 || '%' ESCAPE '\\'";
const WHERE_HAS_DEADLINE: &str = "WHERE deadline IS NOT NULL";
const ORDER_BY_ID: &str = "ORDER BY id";
const UPDATE_DESCRIPTION: &str = "UPDATE tasks SET description = ?1 WHERE id = ?2";
const UPDATE_DEADLINE: &str = "UPDATE tasks SET deadline = ?1 WHERE id = ?2";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?1 WHERE id = ?2";
const UPDATE_PRIORITY: &str = "UPDATE tasks SET priority = ?1 WHERE id = ?2";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    /// Opens the application database and makes sure the table exists.
    pub fn new() -> Result<Tasks> {
        Self::from_db(Db::new()?)
    }

    /// Opens (or creates) a database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Tasks> {
        Self::from_db(Db::open(path)?)
    }

    fn from_db(db: Db) -> Result<Tasks> {
        let mut tasks = Tasks { conn: db.conn };
        tasks.init()?;

        Ok(tasks)
    }

    fn select_by_id(conn: &Connection, id: i64) -> Result<Option<Task>> {
        let task = conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], task_from_row)
            .optional()?;

        Ok(task)
    }
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        deadline: row.get(2)?,
        status: row.get(3)?,
        priority: row.get(4)?,
    })
}

/// Escapes `LIKE` wildcards so the query matches literally.
fn escape_like(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len());
    for c in query.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

impl TaskStore for Tasks {
    fn init(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(SCHEMA_TASKS, [])?;

        let version: i64 = tx.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if version < SCHEMA_VERSION {
            // From here on 2999-12-31 is an ordinary deadline
            let cleared = tx.execute(CLEAR_LEGACY_DEADLINES, [])?;
            tx.pragma_update(None, "user_version", SCHEMA_VERSION)?;
            msg_debug!(format!(
                "Migrated task table to version {}, cleared placeholder deadline on {} task(s)",
                SCHEMA_VERSION, cleared
            ));
        }
        tx.commit()?;

        Ok(())
    }

    fn insert(&mut self, task: &NewTask) -> Result<Task> {
        self.conn.execute(
            INSERT_TASK,
            params![task.description, task.deadline, task.status, task.priority],
        )?;
        let id = self.conn.last_insert_rowid();

        Ok(task.clone().into_task(id))
    }

    fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let (condition, params): (&str, Vec<Box<dyn ToSql>>) = match filter {
            TaskFilter::All => ("", vec![]),
            TaskFilter::ByStatus(status) => (WHERE_STATUS, vec![Box::new(status) as Box<dyn ToSql>]),
            TaskFilter::Search(query) => (WHERE_DESCRIPTION_LIKE, vec![Box::new(escape_like(&query)) as Box<dyn ToSql>]),
            TaskFilter::WithDeadline => (WHERE_HAS_DEADLINE, vec![]),
        };
        let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_TASKS, condition, ORDER_BY_ID))?;

        let task_iter = stmt.query_map(params_from_iter(params.iter()), task_from_row)?;
        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    fn get(&mut self, id: i64) -> Result<Option<Task>> {
        Self::select_by_id(&self.conn, id)
    }

    fn update(&mut self, id: i64, update: &TaskUpdate) -> Result<Option<Task>> {
        // Dropping the transaction without commit rolls back every write below.
        let tx = self.conn.transaction()?;
        if Self::select_by_id(&tx, id)?.is_none() {
            return Ok(None);
        }

        if let Some(description) = &update.description {
            tx.execute(UPDATE_DESCRIPTION, params![description, id])?;
        }
        if let Some(deadline) = update.deadline {
            tx.execute(UPDATE_DEADLINE, params![deadline, id])?;
        }
        if let Some(status) = update.status {
            tx.execute(UPDATE_STATUS, params![status, id])?;
        }
        if let Some(priority) = update.priority {
            tx.execute(UPDATE_PRIORITY, params![priority, id])?;
        }

        let task = Self::select_by_id(&tx, id)?;
        tx.commit()?;
        msg_debug!(format!("Updated task {}", id));

        Ok(task)
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        msg_debug!(format!("Deleted {} row(s) for task {}", affected, id));

        Ok(affected > 0)
    }
}
