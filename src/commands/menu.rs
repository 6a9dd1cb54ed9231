//! Numbered interactive menu.
//!
//! Shows a reminder of tasks that are due soon, then loops over the menu until
//! the user picks "Exit". Input problems (bad dates, unknown status or
//! priority, empty descriptions) are reported and the menu comes back; storage
//! errors end the session.

use super::{delete, list::status_header, open_tracker, sort::sorted_header, update};
use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        date::parse_future_date,
        error::TaskError,
        messages::Message,
        task::{SortKey, TaskPriority, TaskStatus},
        tracker::TaskTracker,
        view::View,
    },
    msg_error, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};

const SEPARATOR: &str = "--------------------------------------------------------------------------------------";

pub fn cmd(config: &Config) -> Result<()> {
    let mut tracker = open_tracker(config)?;
    remind_due_soon(&mut tracker)?;

    let items = [
        Message::MenuAddTask,
        Message::MenuViewAll,
        Message::MenuViewPending,
        Message::MenuViewCompleted,
        Message::MenuUpdateTask,
        Message::MenuDeleteTask,
        Message::MenuSearch,
        Message::MenuSort,
        Message::MenuDueSoon(config.due_soon_hours),
        Message::MenuExit,
    ];

    loop {
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::MenuTitle.to_string())
            .items(&items)
            .default(0)
            .interact()?;

        let outcome = match choice {
            0 => add(&mut tracker, config),
            1 => list(&mut tracker, None),
            2 => list(&mut tracker, Some(TaskStatus::Pending)),
            3 => list(&mut tracker, Some(TaskStatus::Completed)),
            4 => edit(&mut tracker),
            5 => remove(&mut tracker),
            6 => search(&mut tracker),
            7 => sort(&mut tracker),
            8 => due_soon(&mut tracker, config),
            _ => {
                msg_print!(Message::Exiting);
                return Ok(());
            }
        };
        report_invalid_input(outcome)?;
    }
}

/// Prints validation errors and swallows them; anything else is propagated.
fn report_invalid_input(outcome: Result<()>) -> Result<()> {
    match outcome {
        Err(e) => match e.downcast_ref::<TaskError>() {
            Some(invalid) => {
                msg_error!(Message::InvalidInput(invalid.to_string()));
                Ok(())
            }
            None => Err(e),
        },
        ok => ok,
    }
}

fn remind_due_soon(tracker: &mut TaskTracker<Tasks>) -> Result<()> {
    let tasks = tracker.due_soon_now()?;
    if tasks.is_empty() {
        return Ok(());
    }

    msg_print!(SEPARATOR);
    msg_warning!(Message::DueSoonReminder);
    View::tasks(&tasks);
    msg_print!(SEPARATOR);
    Ok(())
}

fn prompt(message: Message, allow_empty: bool) -> Result<String> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(message.to_string())
        .allow_empty(allow_empty)
        .interact_text()?;
    Ok(input)
}

fn prompt_id(message: Message) -> Result<i64> {
    let id = Input::<i64>::with_theme(&ColorfulTheme::default())
        .with_prompt(message.to_string())
        .interact_text()?;
    Ok(id)
}

fn add(tracker: &mut TaskTracker<Tasks>, config: &Config) -> Result<()> {
    let description = prompt(Message::PromptTaskDescription, false)?;

    let deadline = prompt(Message::PromptTaskDeadline, true)?;
    let deadline = match deadline.trim() {
        "" => None,
        input => match parse_future_date(input) {
            Ok(date) => Some(date),
            Err(_) => {
                msg_error!(Message::InvalidDate);
                return Ok(());
            }
        },
    };

    let priorities = TaskPriority::ALL;
    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&priorities)
        .default(priorities.iter().position(|p| *p == config.default_priority).unwrap_or(1))
        .interact()?;

    let task = tracker.create(&description, deadline, priorities[selected])?;
    msg_success!(Message::TaskCreated(task.id));
    Ok(())
}

fn list(tracker: &mut TaskTracker<Tasks>, status: Option<TaskStatus>) -> Result<()> {
    match status {
        Some(status) => View::task_list(status_header(status), &tracker.list_by_status(status)?),
        None => View::task_list(Message::TasksHeader, &tracker.list_all()?),
    }
    Ok(())
}

fn edit(tracker: &mut TaskTracker<Tasks>) -> Result<()> {
    let id = prompt_id(Message::PromptTaskIdToUpdate)?;
    let description = prompt(Message::PromptNewDescription, true)?;
    let deadline = prompt(Message::PromptNewDeadline, true)?;
    let status = prompt(Message::PromptNewStatus, true)?;
    let priority = prompt(Message::PromptNewPriority, true)?;

    let changes = match update::build_update(Some(&description), Some(&deadline), Some(&status), Some(&priority)) {
        Ok(changes) => changes,
        Err(TaskError::InvalidDate(_) | TaskError::PastDate(_)) => {
            msg_error!(Message::InvalidDate);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    update::apply(tracker, id, &changes)
}

fn remove(tracker: &mut TaskTracker<Tasks>) -> Result<()> {
    let id = prompt_id(Message::PromptTaskIdToDelete)?;
    delete::remove(tracker, id)
}

fn search(tracker: &mut TaskTracker<Tasks>) -> Result<()> {
    let keyword = prompt(Message::PromptSearchKeyword, true)?;
    let tasks = tracker.search(&keyword)?;
    View::task_list(Message::TasksSearchHeader(keyword), &tasks);
    Ok(())
}

fn sort(tracker: &mut TaskTracker<Tasks>) -> Result<()> {
    let keys = ["deadline", "status"];
    let selected = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptSortBy.to_string())
        .items(&keys)
        .default(0)
        .interact()?;

    let key = SortKey::from(keys[selected]);
    View::task_list(sorted_header(key), &tracker.sort(key)?);
    Ok(())
}

fn due_soon(tracker: &mut TaskTracker<Tasks>, config: &Config) -> Result<()> {
    View::task_list(Message::TasksDueSoonHeader(config.due_soon_hours), &tracker.due_soon_now()?);
    Ok(())
}
