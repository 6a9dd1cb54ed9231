//! User configuration for tsk.
//!
//! Settings are stored as pretty-printed JSON next to the database in the
//! platform data directory. A missing file is not an error: every field has a
//! default, so the tool works without ever running `tsk init`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsk::libs::config::Config;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::read()?;
//! println!("Due-soon window: {}h", config.due_soon_hours);
//!
//! let updated = Config::init()?;
//! updated.save()?;
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use super::task::TaskPriority;
use super::tracker::DEFAULT_DUE_SOON_HOURS;
use crate::libs::messages::Message;
use anyhow::Result;
use chrono::Duration;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Width of the due-soon window in hours, counted from the current instant.
    pub due_soon_hours: i64,

    /// Priority preselected when adding a task.
    pub default_priority: TaskPriority,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            due_soon_hours: DEFAULT_DUE_SOON_HOURS,
            default_priority: TaskPriority::default(),
        }
    }
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        DataStorage::new().get_path(CONFIG_FILE_NAME)
    }

    /// Loads the configuration, falling back to defaults when no file exists.
    pub fn read() -> Result<Config> {
        Self::read_from(&Self::path()?)
    }

    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file if present.
    pub fn delete() -> Result<bool> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(path)?;
        Ok(true)
    }

    pub fn due_window(&self) -> Duration {
        Duration::try_hours(self.due_soon_hours.max(0)).unwrap_or(Duration::MAX)
    }

    /// Interactive setup wizard, prefilled with the current values.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        let due_soon_hours = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDueSoonHours.to_string())
            .default(current.due_soon_hours)
            .validate_with(|hours: &i64| -> Result<(), String> {
                if *hours >= 0 {
                    Ok(())
                } else {
                    Err(Message::DueSoonHoursNegative.to_string())
                }
            })
            .interact_text()?;

        let priorities = TaskPriority::ALL;
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultPriority.to_string())
            .items(&priorities)
            .default(priorities.iter().position(|p| *p == current.default_priority).unwrap_or(1))
            .interact()?;

        Ok(Config {
            due_soon_hours,
            default_priority: priorities[selected],
        })
    }
}
