//! Calendar date parsing and validation for task deadlines.
//!
//! Users type dates as `DD-MM-YYYY`. The database stores them as ISO
//! `YYYY-MM-DD` text through rusqlite's chrono support, so conversion happens
//! here, at the input boundary, and never inside the stores.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use tsk::libs::date::{is_valid_future_date_on, parse_display_date};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! assert!(is_valid_future_date_on("29-02-2024", today));
//! assert!(!is_valid_future_date_on("31-04-2030", today));
//! assert!(parse_display_date("15-03-2030").is_ok());
//! ```

use super::error::TaskError;
use chrono::{Local, NaiveDate};

/// Format used for dates typed by and shown to the user.
pub const DISPLAY_FORMAT: &str = "%d-%m-%Y";

/// Parses a `DD-MM-YYYY` date.
///
/// Day and month ranges are checked against the real calendar, including
/// February 29 in leap years only. The year must be exactly four digits.
pub fn parse_display_date(input: &str) -> Result<NaiveDate, TaskError> {
    let trimmed = input.trim();
    let invalid = || TaskError::InvalidDate(input.to_string());

    // chrono's %Y also takes signs and years past 9999
    let year = trimmed.rsplit('-').next().unwrap_or_default();
    if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(trimmed, DISPLAY_FORMAT).map_err(|_| invalid())
}

/// Parses a `DD-MM-YYYY` date that must not be earlier than `today`.
pub fn parse_future_date_on(input: &str, today: NaiveDate) -> Result<NaiveDate, TaskError> {
    let date = parse_display_date(input)?;
    if date < today {
        return Err(TaskError::PastDate(input.to_string()));
    }
    Ok(date)
}

/// Same as [`parse_future_date_on`] against the local calendar date.
pub fn parse_future_date(input: &str) -> Result<NaiveDate, TaskError> {
    parse_future_date_on(input, Local::now().date_naive())
}

/// Returns `true` when `input` is a real `DD-MM-YYYY` date on or after `today`.
pub fn is_valid_future_date_on(input: &str, today: NaiveDate) -> bool {
    parse_future_date_on(input, today).is_ok()
}

/// Returns `true` when `input` is a real `DD-MM-YYYY` date that is not in the past.
pub fn is_valid_future_date(input: &str) -> bool {
    is_valid_future_date_on(input, Local::now().date_naive())
}

/// Renders an optional deadline for display.
pub fn display_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format(DISPLAY_FORMAT).to_string(),
        None => "None".to_string(),
    }
}

/// Interprets a deadline typed while editing a task.
///
/// Blank input keeps the stored deadline (`None`), `none` clears it
/// (`Some(None)`) and anything else must be a valid date not before `today`.
pub fn parse_deadline_edit_on(input: &str, today: NaiveDate) -> Result<Option<Option<NaiveDate>>, TaskError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    if input.eq_ignore_ascii_case("none") {
        return Ok(Some(None));
    }
    parse_future_date_on(input, today).map(|date| Some(Some(date)))
}
