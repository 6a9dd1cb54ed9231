use super::open_tracker;
use crate::libs::{
    config::Config,
    messages::Message,
    task::TaskStatus,
    view::View,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show tasks with this status (pending or completed)
    #[arg(short, long)]
    status: Option<TaskStatus>,
}

pub fn cmd(args: ListArgs, config: &Config) -> Result<()> {
    let mut tracker = open_tracker(config)?;

    match args.status {
        Some(status) => View::task_list(status_header(status), &tracker.list_by_status(status)?),
        None => View::task_list(Message::TasksHeader, &tracker.list_all()?),
    }

    Ok(())
}

pub(super) fn status_header(status: TaskStatus) -> Message {
    match status {
        TaskStatus::Pending => Message::TasksPendingHeader,
        TaskStatus::Completed => Message::TasksCompletedHeader,
    }
}
