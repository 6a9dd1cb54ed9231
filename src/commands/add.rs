use super::open_tracker;
use crate::{
    libs::{config::Config, date::parse_future_date, messages::Message, task::TaskPriority},
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description
    #[arg(required = true)]
    description: String,

    /// Deadline in DD-MM-YYYY format, not earlier than today
    #[arg(short, long)]
    deadline: Option<String>,

    /// Priority: high, medium or low (defaults to the configured priority)
    #[arg(short, long)]
    priority: Option<TaskPriority>,
}

pub fn cmd(args: AddArgs, config: &Config) -> Result<()> {
    let deadline = match args.deadline.as_deref() {
        Some(input) => match parse_future_date(input) {
            Ok(date) => Some(date),
            Err(e) => msg_bail_anyhow!(Message::InvalidInput(e.to_string())),
        },
        None => None,
    };
    let priority = args.priority.unwrap_or(config.default_priority);

    let task = open_tracker(config)?.create(&args.description, deadline, priority)?;
    msg_success!(Message::TaskCreated(task.id));

    Ok(())
}
