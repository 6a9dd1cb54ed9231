//! Validation errors raised at the boundary between user input and the task store.
//!
//! Storage faults are not modelled here: they travel as `anyhow::Error` and
//! are never caught inside the library. A missing task id is not an error
//! either; store and tracker operations report it as `None` / `false`.

use thiserror::Error;

/// Rejected user input for a task field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    /// The text is not a real calendar date in `DD-MM-YYYY` form.
    #[error("Invalid date '{0}', expected DD-MM-YYYY")]
    InvalidDate(String),

    /// The date parsed but lies before today.
    #[error("Date '{0}' is in the past")]
    PastDate(String),

    #[error("Unknown status '{0}', expected pending or completed")]
    InvalidStatus(String),

    #[error("Unknown priority '{0}', expected high, medium or low")]
    InvalidPriority(String),

    #[error("Task description cannot be empty")]
    EmptyDescription,
}
