use super::open_tracker;
use crate::libs::{config::Config, messages::Message, view::View};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text to look for anywhere in task descriptions
    #[arg(required = true)]
    query: String,
}

pub fn cmd(args: SearchArgs, config: &Config) -> Result<()> {
    let tasks = open_tracker(config)?.search(&args.query)?;
    View::task_list(Message::TasksSearchHeader(args.query), &tasks);

    Ok(())
}
