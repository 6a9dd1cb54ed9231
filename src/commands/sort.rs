use super::open_tracker;
use crate::libs::{config::Config, messages::Message, task::SortKey, view::View};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SortArgs {
    /// Sort key: deadline or status
    #[arg(short, long, default_value = "deadline")]
    by: String,
}

pub fn cmd(args: SortArgs, config: &Config) -> Result<()> {
    let key = SortKey::from(args.by.as_str());
    let tasks = open_tracker(config)?.sort(key)?;
    View::task_list(sorted_header(key), &tasks);

    Ok(())
}

pub(super) fn sorted_header(key: SortKey) -> Message {
    let name = match key {
        SortKey::Deadline => "deadline",
        SortKey::Status => "status",
    };
    Message::TasksSortedHeader(name.to_string())
}
