//! Persistence layer for tsk.
//!
//! Task records are kept in a single SQLite table in the platform data
//! directory. Both stores here implement
//! [`TaskStore`](crate::libs::store::TaskStore), so anything driving tasks can
//! run against either.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsk::db::tasks::Tasks;
//! use tsk::libs::tracker::TaskTracker;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tracker = TaskTracker::new(Tasks::new()?)?;
//! let tasks = tracker.list_all()?;
//! # Ok(())
//! # }
//! ```

/// Connection management for the on-disk database file.
pub mod db;

/// In-memory store used by tests.
pub mod memory;

/// SQLite task table and its CRUD statements.
pub mod tasks;
