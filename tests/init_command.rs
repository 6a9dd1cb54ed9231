#[cfg(test)]
mod tests {
    use clap::Parser;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tsk::commands::Cli;
    use tsk::libs::config::Config;

    struct InitTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for InitTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            InitTestContext { _temp_dir: temp_dir }
        }
    }

    // Kept as a single test: the data directory comes from process-wide env vars.
    #[test_context(InitTestContext)]
    #[test]
    fn test_init_delete_recovers_from_corrupt_config(_ctx: &mut InitTestContext) {
        let path = Config::path().unwrap();
        std::fs::write(&path, "{").unwrap();

        // Commands that need the configuration report the broken file
        let list = Cli::try_parse_from(["tsk", "list"]).unwrap();
        assert!(list.execute().is_err());

        // Removing it still works
        let delete = Cli::try_parse_from(["tsk", "init", "--delete"]).unwrap();
        delete.execute().unwrap();

        assert!(!path.exists());
        assert_eq!(Config::read().unwrap(), Config::default());
    }
}
