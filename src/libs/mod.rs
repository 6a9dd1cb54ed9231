//! Core library modules for tsk.
//!
//! ## Features
//!
//! - **Task Model**: Tasks, partial updates, closed status and priority values
//! - **Tracking**: Filtering, sorting and due-soon computation over any store
//! - **Date Validation**: `DD-MM-YYYY` parsing against the real calendar
//! - **Infrastructure**: Configuration, data directory, messaging, table output
//!
//! ## Usage
//!
//! ```rust
//! use tsk::db::memory::MemoryTasks;
//! use tsk::libs::task::TaskPriority;
//! use tsk::libs::tracker::TaskTracker;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut tracker = TaskTracker::new(MemoryTasks::default())?;
//! let task = tracker.create("Implement feature", None, TaskPriority::Medium)?;
//! assert_eq!(task.id, 1);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod data_storage;
pub mod date;
pub mod error;
pub mod messages;
pub mod store;
pub mod task;
pub mod tracker;
pub mod view;
