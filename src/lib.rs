//! # tsk - personal task tracker
//!
//! A command-line utility for recording tasks with a description, an
//! optional deadline, a status and a priority, backed by a local SQLite file.
//!
//! ## Features
//!
//! - **Task Management**: Add, update, delete and list tasks
//! - **Queries**: Filter by status, search descriptions, sort by deadline or status
//! - **Reminders**: Tasks due within a configurable window (24 hours by default)
//! - **Interactive Menu**: Numbered menu for everyday use, subcommands for scripts
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsk::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::run()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
