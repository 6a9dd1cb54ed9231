pub mod add;
pub mod delete;
pub mod due;
pub mod init;
pub mod list;
pub mod menu;
pub mod search;
pub mod sort;
pub mod update;

use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::tracker::TaskTracker;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List tasks, optionally filtered by status")]
    List(list::ListArgs),
    #[command(about = "Update fields of a task", arg_required_else_help = true)]
    Update(update::UpdateArgs),
    #[command(about = "Delete a task", arg_required_else_help = true)]
    Delete(delete::DeleteArgs),
    #[command(about = "Search task descriptions", arg_required_else_help = true)]
    Search(search::SearchArgs),
    #[command(about = "List tasks sorted by deadline or status")]
    Sort(sort::SortArgs),
    #[command(about = "List tasks due soon")]
    Due,
    #[command(about = "Open the interactive menu (default)")]
    Menu,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn run() -> Result<()> {
        Self::parse().execute()
    }

    /// Dispatches the parsed command line.
    ///
    /// `init` runs before the configuration is loaded so a broken
    /// `config.json` can still be rewritten or removed.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Init(args)) => init::cmd(args),
            command => dispatch(command, &Config::read()?),
        }
    }
}

fn dispatch(command: Option<Commands>, config: &Config) -> Result<()> {
    match command {
        Some(Commands::Init(args)) => init::cmd(args),
        Some(Commands::Add(args)) => add::cmd(args, config),
        Some(Commands::List(args)) => list::cmd(args, config),
        Some(Commands::Update(args)) => update::cmd(args, config),
        Some(Commands::Delete(args)) => delete::cmd(args, config),
        Some(Commands::Search(args)) => search::cmd(args, config),
        Some(Commands::Sort(args)) => sort::cmd(args, config),
        Some(Commands::Due) => due::cmd(config),
        Some(Commands::Menu) | None => menu::cmd(config),
    }
}

/// Opens the application database with the configured due-soon window.
pub(crate) fn open_tracker(config: &Config) -> Result<TaskTracker<Tasks>> {
    Ok(TaskTracker::new(Tasks::new()?)?.with_due_window(config.due_window()))
}
