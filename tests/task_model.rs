#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tsk::commands::update::build_update;
    use tsk::libs::error::TaskError;
    use tsk::libs::messages::Message;
    use tsk::libs::task::{NewTask, SortKey, TaskPriority, TaskStatus, TaskUpdate};

    #[test]
    fn test_status_parsing() {
        assert_eq!("pending".parse::<TaskStatus>(), Ok(TaskStatus::Pending));
        assert_eq!(" Completed ".parse::<TaskStatus>(), Ok(TaskStatus::Completed));
        assert_eq!(
            "done".parse::<TaskStatus>(),
            Err(TaskError::InvalidStatus("done".to_string()))
        );
        assert_eq!(TaskStatus::Completed.to_string(), "completed");
    }

    #[test]
    fn test_priority_parsing() {
        assert_eq!("HIGH".parse::<TaskPriority>(), Ok(TaskPriority::High));
        assert_eq!("medium".parse::<TaskPriority>(), Ok(TaskPriority::Medium));
        assert_eq!("low".parse::<TaskPriority>(), Ok(TaskPriority::Low));
        assert!("urgent".parse::<TaskPriority>().is_err());
        assert_eq!(TaskPriority::default(), TaskPriority::Medium);
    }

    #[test]
    fn test_sort_key_falls_back_to_deadline() {
        assert_eq!(SortKey::from("status"), SortKey::Status);
        assert_eq!(SortKey::from("STATUS"), SortKey::Status);
        assert_eq!(SortKey::from("deadline"), SortKey::Deadline);
        assert_eq!(SortKey::from("priority"), SortKey::Deadline);
        assert_eq!(SortKey::from(""), SortKey::Deadline);
    }

    #[test]
    fn test_update_apply() {
        let mut task = NewTask::new("Draft", NaiveDate::from_ymd_opt(2030, 1, 1), TaskPriority::Low).into_task(3);
        let update = TaskUpdate::default().deadline(None).priority(TaskPriority::High);

        update.apply_to(&mut task);

        assert_eq!(task.id, 3);
        assert_eq!(task.description, "Draft");
        assert_eq!(task.deadline, None);
        assert_eq!(task.priority, TaskPriority::High);
        assert!(TaskUpdate::default().is_empty());
        assert!(!update.is_empty());
    }

    #[test]
    fn test_build_update_skips_blank_fields() {
        let update = build_update(Some(""), Some(""), Some(" "), None).unwrap();
        assert!(update.is_empty());

        let update = build_update(Some("New text"), Some("none"), Some("completed"), Some("low")).unwrap();
        assert_eq!(update.description.as_deref(), Some("New text"));
        assert_eq!(update.deadline, Some(None));
        assert_eq!(update.status, Some(TaskStatus::Completed));
        assert_eq!(update.priority, Some(TaskPriority::Low));
    }

    #[test]
    fn test_build_update_rejects_bad_values() {
        assert_eq!(
            build_update(None, None, Some("archived"), None),
            Err(TaskError::InvalidStatus("archived".to_string()))
        );
        assert!(matches!(
            build_update(None, Some("31-04-2030"), None, None),
            Err(TaskError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_messages() {
        assert_eq!(Message::TaskNotFoundWithId(4).to_string(), "No task found with ID 4.");
        assert_eq!(Message::TasksNotFound.to_string(), "No tasks found.");
        assert_eq!(Message::MenuDueSoon(24).to_string(), "9. View tasks due soon (within 24 hours)");
    }
}
