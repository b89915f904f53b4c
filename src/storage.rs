use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HabitError, Result};
use crate::habit::Habit;

/// On-disk layout: one `[[habit]]` table per habit, in collection order
#[derive(Deserialize)]
struct HabitFile {
    #[serde(default, rename = "habit")]
    habits: Vec<Habit>,
}

#[derive(Serialize)]
struct HabitFileRef<'a> {
    #[serde(rename = "habit")]
    habits: &'a [Habit],
}

/// TOML file holding the full habit collection
#[derive(Debug, Clone)]
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Load the stored habits
    ///
    /// Returns `Ok(None)` when the file does not exist. An existing empty
    /// file is an empty collection.
    pub fn load(&self) -> Result<Option<Vec<Habit>>> {
        if !self.file_path.exists() {
            debug!("No habit store at {}", self.file_path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.file_path).map_err(|source| self.io_error(source))?;
        let file: HabitFile = toml::from_str(&content).map_err(|source| HabitError::Parse {
            path: self.file_path.clone(),
            source,
        })?;
        debug!(
            "Loaded {} habit(s) from {}",
            file.habits.len(),
            self.file_path.display()
        );
        Ok(Some(file.habits))
    }

    /// Overwrite the store with `habits`
    pub fn save(&self, habits: &[Habit]) -> Result<()> {
        let content = toml::to_string_pretty(&HabitFileRef { habits })?;

        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        fs::write(&self.file_path, content).map_err(|source| self.io_error(source))?;
        debug!(
            "Saved {} habit(s) to {}",
            habits.len(),
            self.file_path.display()
        );
        Ok(())
    }

    fn io_error(&self, source: std::io::Error) -> HabitError {
        HabitError::Io {
            path: self.file_path.clone(),
            source,
        }
    }
}
