//! Task store - CSV file persistence
//!
//! The store is loaded once and then rewrites the whole file after every
//! successful mutation. Separate processes opening the same file race: the
//! last writer wins. The previous file is kept next to it as `<file>.bak`.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use super::chart::PriorityCounts;
use super::codec;
use super::model::{Priority, Task};

/// File name used when nothing else is configured
pub const DEFAULT_TASKS_FILE: &str = "tasks.csv";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access task file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode task file: {0}")]
    Csv(#[from] csv::Error),

    #[error("no task ids left in {}", path.display())]
    IdsExhausted { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug)]
pub struct TaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// Load the store from `path`. A missing file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let tasks = match File::open(&path) {
            Ok(file) => {
                let report = codec::read_tasks(BufReader::new(file))?;
                if report.skipped > 0 {
                    warn!(
                        "Dropped {} malformed record(s) while loading {}",
                        report.skipped,
                        path.display()
                    );
                }
                report.tasks
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        // parse_row never yields u64::MAX, so this cannot overflow
        let next_id = tasks.iter().map(|t| t.id).max().map_or(1, |max| max + 1);
        debug!(
            "Loaded {} task(s) from {}, next id {}",
            tasks.len(),
            path.display(),
            next_id
        );

        Ok(Self {
            path,
            tasks,
            next_id,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Id the next added task will receive
    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    /// Tasks in insertion order, as persisted
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task and persist. Unknown priority text is stored as `Low`.
    pub fn add_task(
        &mut self,
        title: &str,
        description: &str,
        priority: impl Into<Priority>,
    ) -> Result<u64> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or_else(|| StoreError::IdsExhausted {
            path: self.path.clone(),
        })?;
        self.tasks.push(Task::new(id, title, description, priority));

        if let Err(e) = self.save() {
            self.tasks.pop();
            return Err(e);
        }

        debug!("Added task {}", id);
        Ok(id)
    }

    /// Remove the task with `id`. Returns `false` without touching the file
    /// when no such task exists.
    pub fn delete_task(&mut self, id: u64) -> Result<bool> {
        let Some(index) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };

        let removed = self.tasks.remove(index);
        if let Err(e) = self.save() {
            self.tasks.insert(index, removed);
            return Err(e);
        }

        debug!("Deleted task {}", id);
        Ok(true)
    }

    /// All tasks, highest priority first, ties broken by ascending id
    pub fn list_tasks(&self) -> Vec<&Task> {
        let mut sorted: Vec<&Task> = self.tasks.iter().collect();
        sorted.sort_by(|a, b| a.display_cmp(b));
        sorted
    }

    pub fn priority_counts(&self) -> PriorityCounts {
        PriorityCounts::from_tasks(&self.tasks)
    }

    fn save(&self) -> Result<()> {
        let mut content = Vec::new();
        codec::write_tasks(&mut content, &self.tasks)?;

        // Keep the previous version around
        if self.path.exists() {
            let backup = backup_path(&self.path);
            if let Err(e) = fs::copy(&self.path, &backup) {
                warn!("Failed to create backup {}: {}", backup.display(), e);
            }
        }

        fs::write(&self.path, content).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        debug!("Saved {} task(s) to {}", self.tasks.len(), self.path.display());
        Ok(())
    }
}

/// `tasks.csv` -> `tasks.csv.bak`
fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".bak");
    PathBuf::from(name)

}
