use super::open_tracker;
use crate::libs::{config::Config, messages::Message, view::View};
use anyhow::Result;

pub fn cmd(config: &Config) -> Result<()> {
    let tasks = open_tracker(config)?.due_soon_now()?;
    View::task_list(Message::TasksDueSoonHeader(config.due_soon_hours), &tasks);

    Ok(())
}
