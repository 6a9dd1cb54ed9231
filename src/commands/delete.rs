use super::open_tracker;
use crate::{
    db::tasks::Tasks,
    libs::{config::Config, messages::Message, tracker::TaskTracker},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: i64,
}

pub fn cmd(args: DeleteArgs, config: &Config) -> Result<()> {
    remove(&mut open_tracker(config)?, args.id)
}

pub(super) fn remove(tracker: &mut TaskTracker<Tasks>, id: i64) -> Result<()> {
    if tracker.delete(id)? {
        msg_success!(Message::TaskDeleted(id));
    } else {
        msg_error!(Message::TaskNotFoundWithId(id));
    }

    Ok(())
}
