use super::open_tracker;
use crate::{
    db::tasks::Tasks,
    libs::{
        config::Config,
        date::parse_deadline_edit_on,
        error::TaskError,
        messages::Message,
        task::TaskUpdate,
        tracker::TaskTracker,
    },
    msg_bail_anyhow, msg_error, msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// ID of the task to update
    id: i64,

    /// New description
    #[arg(long)]
    description: Option<String>,

    /// New deadline in DD-MM-YYYY format, or "none" to clear it
    #[arg(short, long)]
    deadline: Option<String>,

    /// New status: pending or completed
    #[arg(short, long)]
    status: Option<String>,

    /// New priority: high, medium or low
    #[arg(short, long)]
    priority: Option<String>,
}

pub fn cmd(args: UpdateArgs, config: &Config) -> Result<()> {
    let update = match build_update(
        args.description.as_deref(),
        args.deadline.as_deref(),
        args.status.as_deref(),
        args.priority.as_deref(),
    ) {
        Ok(update) => update,
        Err(e) => msg_bail_anyhow!(Message::InvalidInput(e.to_string())),
    };

    apply(&mut open_tracker(config)?, args.id, &update)
}

/// Turns raw field input into a partial update. Blank fields are skipped.
pub fn build_update(
    description: Option<&str>,
    deadline: Option<&str>,
    status: Option<&str>,
    priority: Option<&str>,
) -> Result<TaskUpdate, TaskError> {
    let mut update = TaskUpdate::default();
    if let Some(description) = present(description) {
        update = update.description(description);
    }
    if let Some(deadline) = deadline {
        update.deadline = parse_deadline_edit_on(deadline, Local::now().date_naive())?;
    }
    if let Some(status) = present(status) {
        update = update.status(status.parse()?);
    }
    if let Some(priority) = present(priority) {
        update = update.priority(priority.parse()?);
    }

    Ok(update)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

pub(super) fn apply(tracker: &mut TaskTracker<Tasks>, id: i64, update: &TaskUpdate) -> Result<()> {
    match tracker.update(id, update)? {
        None => msg_error!(Message::TaskNotFoundWithId(id)),
        Some(_) if update.is_empty() => msg_warning!(Message::NoChangesDetected),
        Some(task) => msg_success!(Message::TaskUpdated(task.id)),
    }

    Ok(())
}
