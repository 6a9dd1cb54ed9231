#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TasksNotFound,
    TasksHeader,
    TasksPendingHeader,
    TasksCompletedHeader,
    TasksSearchHeader(String),
    TasksSortedHeader(String),
    TasksDueSoonHeader(i64),
    DueSoonReminder,
    NoChangesDetected,
    InvalidDate,
    InvalidInput(String),

    // === PROMPTS ===
    PromptTaskDescription,
    PromptTaskDeadline,
    PromptTaskPriority,
    PromptTaskIdToUpdate,
    PromptTaskIdToDelete,
    PromptNewDescription,
    PromptNewDeadline,
    PromptNewStatus,
    PromptNewPriority,
    PromptSearchKeyword,
    PromptSortBy,

    // === MENU ===
    MenuTitle,
    MenuAddTask,
    MenuViewAll,
    MenuViewPending,
    MenuViewCompleted,
    MenuUpdateTask,
    MenuDeleteTask,
    MenuSearch,
    MenuSort,
    MenuDueSoon(i64),
    MenuExit,
    Exiting,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    PromptDueSoonHours,
    PromptDefaultPriority,
    DueSoonHoursNegative,
}
