//! clap definitions for the `todo` command line.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::done::DoneArgs;
use super::list::ListArgs;

#[derive(Parser)]
#[command(name = "todo", version)]
#[command(about = "Track what to do now, soon, later and maybe")]
pub struct Cli {
    /// Directory holding the task file (defaults to ~/.todo)
    #[arg(long, global = true, env = "TODO_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Plain output, no decorative box
    #[arg(long, global = true)]
    pub ugly: bool,

    /// With no command, show the current task
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Put a task at the front of the now/soon list
    #[command(visible_alias = "n")]
    Now(AddArgs),

    /// Queue a task at the back of the now/soon list
    #[command(visible_alias = "s")]
    Soon(AddArgs),

    /// Put a task at the front of the later/maybe list
    #[command(visible_alias = "l")]
    Later(AddArgs),

    /// Queue a task at the back of the later/maybe list
    #[command(visible_alias = "m")]
    Maybe(AddArgs),

    /// Show upcoming tasks
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Finish a task and drop it from the list
    Done(DoneArgs),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
