use super::date::display_date;
use super::messages::Message;
use super::task::Task;
use crate::{msg_info, msg_print};
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders tasks as a table on stdout.
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DESCRIPTION", "DEADLINE", "STATUS", "PRIORITY"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.description,
                display_date(task.deadline),
                task.status,
                task.priority
            ]);
        }
        table.printstd();
    }

    /// Prints `header` and the table, or a notice when `tasks` is empty.
    pub fn task_list(header: Message, tasks: &[Task]) {
        if tasks.is_empty() {
            msg_info!(Message::TasksNotFound);
            return;
        }
        msg_print!(header, true);
        Self::tasks(tasks);
    }
}
