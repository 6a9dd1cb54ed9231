#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rusqlite::Connection;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tsk::db::tasks::Tasks;
    use tsk::libs::store::TaskStore;
    use tsk::libs::task::{NewTask, TaskFilter, TaskPriority, TaskStatus, TaskUpdate};

    struct TaskTestContext {
        temp_dir: TempDir,
    }

    impl TaskTestContext {
        fn open(&self) -> Tasks {
            Tasks::open(self.temp_dir.path().join("tsk.db")).unwrap()
        }
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            TaskTestContext { temp_dir }
        }
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_insert_and_fetch(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.open();

        let created = tasks
            .insert(&NewTask::new("Write report", date(2030, 3, 15), TaskPriority::High))
            .unwrap();
        let all = tasks.fetch(TaskFilter::All).unwrap();

        assert_eq!(all, vec![created.clone()]);
        assert_eq!(created.description, "Write report");
        assert_eq!(created.deadline, date(2030, 3, 15));
        assert_eq!(created.status, TaskStatus::Pending);
        assert_eq!(created.priority, TaskPriority::High);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_persists_across_connections(ctx: &mut TaskTestContext) {
        let created = ctx
            .open()
            .insert(&NewTask::new("Survives reopen", None, TaskPriority::Low))
            .unwrap();

        let fetched = ctx.open().get(created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.deadline, None);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update_changes_only_given_fields(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.open();
        let original = tasks
            .insert(&NewTask::new("Original", date(2030, 1, 1), TaskPriority::Medium))
            .unwrap();

        let updated = tasks
            .update(original.id, &TaskUpdate::default().description("X"))
            .unwrap()
            .unwrap();

        assert_eq!(updated.description, "X");
        assert_eq!(updated.deadline, original.deadline);
        assert_eq!(updated.status, original.status);
        assert_eq!(updated.priority, original.priority);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update_clears_deadline(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.open();
        let task = tasks
            .insert(&NewTask::new("Dated", date(2030, 1, 1), TaskPriority::Medium))
            .unwrap();

        let updated = tasks
            .update(task.id, &TaskUpdate::default().deadline(None).status(TaskStatus::Completed))
            .unwrap()
            .unwrap();

        assert_eq!(updated.deadline, None);
        assert_eq!(updated.status, TaskStatus::Completed);
        assert!(tasks.fetch(TaskFilter::WithDeadline).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update_missing_id(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.open();
        tasks.insert(&NewTask::new("Only task", None, TaskPriority::Low)).unwrap();

        let result = tasks.update(42, &TaskUpdate::default().description("Ghost")).unwrap();

        assert!(result.is_none());
        assert_eq!(tasks.fetch(TaskFilter::All).unwrap()[0].description, "Only task");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_update_rolls_back_on_failure(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.open();
        let task = tasks.insert(&NewTask::new("Original", None, TaskPriority::Low)).unwrap();

        // Make the status write fail after the description write succeeded
        tasks
            .conn
            .execute_batch(
                "CREATE TRIGGER lock_status BEFORE UPDATE OF status ON tasks
                 BEGIN SELECT RAISE(ABORT, 'status is locked'); END;",
            )
            .unwrap();

        let result = tasks.update(
            task.id,
            &TaskUpdate::default().description("Changed").status(TaskStatus::Completed),
        );

        assert!(result.is_err());
        let stored = tasks.get(task.id).unwrap().unwrap();
        assert_eq!(stored.description, "Original");
        assert_eq!(stored.status, TaskStatus::Pending);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_delete(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.open();
        let task = tasks.insert(&NewTask::new("Short-lived", None, TaskPriority::Low)).unwrap();

        assert!(tasks.delete(task.id).unwrap());
        assert!(tasks.fetch(TaskFilter::All).unwrap().is_empty());

        // Second delete reports not found and changes nothing
        assert!(!tasks.delete(task.id).unwrap());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_ids_are_not_reused(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.open();
        tasks.insert(&NewTask::new("First", None, TaskPriority::Low)).unwrap();
        let second = tasks.insert(&NewTask::new("Second", None, TaskPriority::Low)).unwrap();

        tasks.delete(second.id).unwrap();
        let third = tasks.insert(&NewTask::new("Third", None, TaskPriority::Low)).unwrap();

        assert!(third.id > second.id);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_fetch_by_status(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.open();
        tasks.insert(&NewTask::new("Open", None, TaskPriority::Low)).unwrap();
        tasks
            .insert(&NewTask::new("Done", None, TaskPriority::Low).with_status(TaskStatus::Completed))
            .unwrap();

        let pending = tasks.fetch(TaskFilter::ByStatus(TaskStatus::Pending)).unwrap();
        let completed = tasks.fetch(TaskFilter::ByStatus(TaskStatus::Completed)).unwrap();

        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].description, "Open");
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].description, "Done");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_search(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.open();
        tasks.insert(&NewTask::new("Reach milestone 1", None, TaskPriority::High)).unwrap();
        tasks.insert(&NewTask::new("milestone review", None, TaskPriority::Medium)).unwrap();
        tasks.insert(&NewTask::new("Buy groceries", None, TaskPriority::Low)).unwrap();

        let results = tasks.fetch(TaskFilter::Search("mile".to_string())).unwrap();
        let names: Vec<_> = results.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(names, vec!["Reach milestone 1", "milestone review"]);

        // SQLite LIKE ignores ASCII case
        let results = tasks.fetch(TaskFilter::Search("MILE".to_string())).unwrap();
        assert_eq!(results.len(), 2);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_search_treats_wildcards_literally(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.open();
        tasks.insert(&NewTask::new("100% coverage", None, TaskPriority::High)).unwrap();
        tasks.insert(&NewTask::new("1000 lines", None, TaskPriority::Low)).unwrap();
        tasks.insert(&NewTask::new("snake_case names", None, TaskPriority::Low)).unwrap();

        let percent = tasks.fetch(TaskFilter::Search("100%".to_string())).unwrap();
        assert_eq!(percent.len(), 1);
        assert_eq!(percent[0].description, "100% coverage");

        let underscore = tasks.fetch(TaskFilter::Search("e_c".to_string())).unwrap();
        assert_eq!(underscore.len(), 1);
        assert_eq!(underscore[0].description, "snake_case names");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_legacy_placeholder_deadline_is_cleared(ctx: &mut TaskTestContext) {
        // A file written by an earlier release: no schema version, placeholder deadlines
        let conn = Connection::open(ctx.temp_dir.path().join("tsk.db")).unwrap();
        conn.execute_batch(
            "CREATE TABLE tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                description TEXT NOT NULL,
                deadline TEXT,
                status TEXT NOT NULL,
                priority TEXT NOT NULL
            );
            INSERT INTO tasks (description, deadline, status, priority) VALUES ('Legacy', '2999-12-31', 'pending', 'low');
            INSERT INTO tasks (description, deadline, status, priority) VALUES ('Dated', '2030-01-15', 'pending', 'high');",
        )
        .unwrap();
        drop(conn);

        let mut tasks = ctx.open();
        let all = tasks.fetch(TaskFilter::All).unwrap();

        assert_eq!(all.len(), 2);
        assert_eq!(all[0].deadline, None);
        assert_eq!(all[1].deadline, date(2030, 1, 15));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_far_future_deadline_survives_reopen(ctx: &mut TaskTestContext) {
        let created = ctx
            .open()
            .insert(&NewTask::new("Millennium plan", date(2999, 12, 31), TaskPriority::Low))
            .unwrap();

        let fetched = ctx.open().get(created.id).unwrap().unwrap();

        assert_eq!(fetched.deadline, date(2999, 12, 31));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_unknown_status_in_database_is_rejected(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.open();
        tasks
            .conn
            .execute(
                "INSERT INTO tasks (description, status, priority) VALUES ('Odd', 'archived', 'low')",
                [],
            )
            .unwrap();

        assert!(tasks.fetch(TaskFilter::All).is_err());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_init_is_idempotent(ctx: &mut TaskTestContext) {
        let mut tasks = ctx.open();
        tasks.insert(&NewTask::new("Keep me", None, TaskPriority::Low)).unwrap();

        tasks.init().unwrap();
        tasks.init().unwrap();

        assert_eq!(tasks.fetch(TaskFilter::All).unwrap().len(), 1);
    }
}
