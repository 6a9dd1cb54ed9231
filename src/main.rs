use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tsk::commands::Cli;
use tsk::libs::messages::macros::is_debug_mode;

fn main() -> Result<()> {
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tsk=debug")))
            .init();
    }

    Cli::run()
}
