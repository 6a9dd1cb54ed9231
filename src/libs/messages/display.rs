//! Display implementation for tsk application messages.
//!
//! Every user-facing string lives here, keyed by a [`Message`] variant, so
//! wording stays consistent between the interactive menu and the
//! subcommands.
//!
//! ```rust
//! use tsk::libs::messages::Message;
//!
//! assert_eq!(Message::TaskNotFoundWithId(7).to_string(), "No task found with ID 7.");
//! ```

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task added successfully! (ID {})", id),
            Message::TaskUpdated(id) => format!("Task {} updated successfully!", id),
            Message::TaskDeleted(id) => format!("Task {} deleted successfully!", id),
            Message::TaskNotFoundWithId(id) => format!("No task found with ID {}.", id),
            Message::TasksNotFound => "No tasks found.".to_string(),
            Message::TasksHeader => "All tasks".to_string(),
            Message::TasksPendingHeader => "Pending tasks".to_string(),
            Message::TasksCompletedHeader => "Completed tasks".to_string(),
            Message::TasksSearchHeader(query) => format!("Tasks matching '{}'", query),
            Message::TasksSortedHeader(key) => format!("Tasks sorted by {}", key),
            Message::TasksDueSoonHeader(hours) => format!("Tasks due within {} hours", hours),
            Message::DueSoonReminder => "Reminder: The following tasks are due soon:".to_string(),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::InvalidDate => "Invalid date. Please enter a valid date.".to_string(),
            Message::InvalidInput(reason) => reason.clone(),

            // === PROMPTS ===
            Message::PromptTaskDescription => "Enter task description".to_string(),
            Message::PromptTaskDeadline => "Enter task deadline (DD-MM-YYYY, leave blank for none)".to_string(),
            Message::PromptTaskPriority => "Select task priority".to_string(),
            Message::PromptTaskIdToUpdate => "Enter task ID to update".to_string(),
            Message::PromptTaskIdToDelete => "Enter task ID to delete".to_string(),
            Message::PromptNewDescription => "Enter new description (leave blank to skip)".to_string(),
            Message::PromptNewDeadline => "Enter new deadline (DD-MM-YYYY, 'none' to clear, leave blank to skip)".to_string(),
            Message::PromptNewStatus => "Enter new status (pending/completed, leave blank to skip)".to_string(),
            Message::PromptNewPriority => "Enter new priority (high/medium/low, leave blank to skip)".to_string(),
            Message::PromptSearchKeyword => "Enter keyword to search in task descriptions".to_string(),
            Message::PromptSortBy => "Sort by".to_string(),

            // === MENU ===
            Message::MenuTitle => "Main Menu".to_string(),
            Message::MenuAddTask => "1. Add a task".to_string(),
            Message::MenuViewAll => "2. View all tasks".to_string(),
            Message::MenuViewPending => "3. View pending tasks".to_string(),
            Message::MenuViewCompleted => "4. View completed tasks".to_string(),
            Message::MenuUpdateTask => "5. Update a task".to_string(),
            Message::MenuDeleteTask => "6. Delete a task".to_string(),
            Message::MenuSearch => "7. Search tasks".to_string(),
            Message::MenuSort => "8. Sort tasks".to_string(),
            Message::MenuDueSoon(hours) => format!("9. View tasks due soon (within {} hours)", hours),
            Message::MenuExit => "10. Exit".to_string(),
            Message::Exiting => "Exiting the application.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigFileNotFound => "Configuration file not found".to_string(),
            Message::PromptDueSoonHours => "Due-soon window (hours)".to_string(),
            Message::PromptDefaultPriority => "Default priority for new tasks".to_string(),
            Message::DueSoonHoursNegative => "The window cannot be negative".to_string(),
        };

        write!(f, "{}", text)
    }
}
