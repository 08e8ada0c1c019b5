use super::files::{atomic_write, home_store_file, local_store_file, read_file};
use super::migration::{migrate_all, RawTask};
use crate::domain::Task;
use anyhow::Result;
use std::path::PathBuf;

/// Storage seam for the task sequence
///
/// Load never fails from the caller's point of view and save is best-effort;
/// implementations report problems on stderr themselves. Operations stay
/// oblivious to where the tasks actually live, which is what lets tests run
/// against an in-memory store.
pub trait TaskStore {
    fn load(&self) -> Vec<Task>;
    fn save(&mut self, tasks: &[Task]);
}

/// File-backed store over a todos.json array
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store in the home directory (interactive mode)
    pub fn in_home() -> Result<Self> {
        Ok(Self::new(home_store_file()?))
    }

    /// Store in the current working directory (scripted mode)
    pub fn in_current_dir() -> Result<Self> {
        Ok(Self::new(local_store_file()?))
    }

    fn load_inner(&self) -> Result<Vec<Task>> {
        let content = read_file(&self.path)?;
        if content.trim().is_empty() {
            // Missing or empty file starts a fresh list
            return Ok(Vec::new());
        }
        let raw: Vec<RawTask> = serde_json::from_str(&content)?;
        Ok(migrate_all(raw))
    }
}

impl TaskStore for JsonStore {
    fn load(&self) -> Vec<Task> {
        match self.load_inner() {
            Ok(tasks) => tasks,
            Err(e) => {
                eprintln!("Warning: could not read {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    fn save(&mut self, tasks: &[Task]) {
        let result = serde_json::to_string_pretty(tasks)
            .map_err(anyhow::Error::from)
            .and_then(|json| atomic_write(&self.path, &json));

        // The previous file survives a failed write thanks to the temp-file
        // swap; the mutation that triggered this save may be lost.
        if let Err(e) = result {
            eprintln!("Warning: could not write {}: {}", self.path.display(), e);
        }
    }
}

/// Vec-backed store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: Vec<Task>,
    save_count: usize,
}

#[cfg(test)]
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            save_count: 0,
        }
    }

    /// Number of times save has been called, for no-write assertions
    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

#[cfg(test)]
impl TaskStore for MemoryStore {
    fn load(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    fn save(&mut self, tasks: &[Task]) {
        self.tasks = tasks.to_vec();
        self.save_count += 1;
    }
}
