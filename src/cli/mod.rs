//! Command-line interface: argument definitions and per-command handlers.

use anyhow::{bail, Result};
use std::path::PathBuf;

pub mod add;
pub mod current;
pub mod definition;
pub mod done;
pub mod list;

pub use definition::{Cli, Commands};

/// Directory under the home directory that holds the task file.
pub const DEFAULT_DIR_NAME: &str = ".todo";

/// Resolve the data directory: an explicit `--dir`/`TODO_DIR` override
/// wins, otherwise fall back to `~/.todo`.
pub fn resolve_dir(dir: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir);
    }
    match dirs::home_dir() {
        Some(home) => Ok(home.join(DEFAULT_DIR_NAME)),
        None => bail!("could not determine a home directory; pass --dir or set TODO_DIR"),
    }
}
