//! Where the expense tracker keeps its files
//!
//! One base directory holds everything:
//!
//! ```text
//! <base>/config.json
//! <base>/data/expenses.db
//! <base>/exports/
//! ```
//!
//! The base is chosen by the first of: the `--data-dir` flag, the
//! `EXPENSE_TRACKER_DATA_DIR` variable, then the platform config directory
//! (`$XDG_CONFIG_HOME` or `~/.config` on Unix, `%APPDATA%` on Windows).

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "EXPENSE_TRACKER_DATA_DIR";

const APP_DIR_NAME: &str = "expense-tracker";

/// Resolved file locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpensePaths {
    base_dir: PathBuf,
}

impl ExpensePaths {
    /// Resolve the base directory from an optional explicit override, the
    /// environment, and the platform default, in that order
    pub fn resolve(explicit: Option<PathBuf>) -> ExpenseResult<Self> {
        let base_dir = match explicit.or_else(|| env_path(DATA_DIR_ENV)) {
            Some(dir) => dir,
            None => platform_base_dir(|var| std::env::var_os(var))?,
        };
        Ok(Self { base_dir })
    }

    /// Use a fixed base directory
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding the database file
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default destination for exports
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn database_file(&self) -> PathBuf {
        self.data_dir().join("expenses.db")
    }

    /// Labelled locations, for the `config` command
    pub fn locations(&self) -> [(&'static str, PathBuf); 4] {
        [
            ("Base directory", self.base_dir.clone()),
            ("Database file", self.database_file()),
            ("Settings file", self.settings_file()),
            ("Export directory", self.export_dir()),
        ]
    }

    /// Create the data and export directories (and the base above them)
    pub fn ensure_directories(&self) -> ExpenseResult<()> {
        for dir in [self.data_dir(), self.export_dir()] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                ExpenseError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }

    /// Settings have been saved at least once (`init` has run)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().is_file()
    }
}

fn env_path(var: &str) -> Option<PathBuf> {
    non_empty(std::env::var_os(var))
}

fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}

/// Platform config directory joined with the app name. `lookup` reads an
/// environment variable.
fn platform_base_dir<F>(lookup: F) -> ExpenseResult<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    let root = if cfg!(windows) {
        non_empty(lookup("APPDATA"))
    } else {
        non_empty(lookup("XDG_CONFIG_HOME"))
            .or_else(|| non_empty(lookup("HOME")).map(|home| home.join(".config")))
    };

    root.map(|dir| dir.join(APP_DIR_NAME)).ok_or_else(|| {
        ExpenseError::Config(format!(
            "Cannot determine a config directory; set {} or pass --data-dir",
            DATA_DIR_ENV
        ))
    })
}
