//! Task file persistence - whole-file YAML read/rewrite.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::TaskStore;

/// Fixed file name inside the task directory.
pub const STORE_FILE: &str = "tasks.yaml";

pub struct Storage {
    path: PathBuf,
}

impl Storage {
    /// Adapter over `tasks.yaml` inside an already-resolved directory. Path
    /// resolution (environment override, home fallback) happens in the CLI
    /// layer; this only receives the result.
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(STORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole task file. A missing file is an empty store; a present
    /// but undecodable one is an error, so a later save can't silently wipe
    /// whatever is in it.
    pub fn load(&self) -> Result<TaskStore> {
        if !self.path.exists() {
            debug!("no task file at {}, starting empty", self.path.display());
            return Ok(TaskStore::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        TaskStore::load(&raw).with_context(|| format!("in {}", self.path.display()))
    }

    /// Rewrite the whole task file, keeping the previous contents in a
    /// `.bak` next to it.
    pub fn save(&self, store: &TaskStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        if self.path.exists() {
            let backup = self.path.with_extension("yaml.bak");
            if let Err(err) = fs::copy(&self.path, &backup) {
                warn!("failed to back up task file: {}", err);
            }
        }

        let raw = store.dump()?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        debug!("saved {} tasks to {}", store.len(), self.path.display());
        Ok(())
    }
}
