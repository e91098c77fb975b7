//! `todo now`/`soon`/`later`/`maybe` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::tasks::Storage;

/// Where a new task lands in the two lists.
#[derive(Debug, Clone, Copy)]
pub enum Position {
    Now,
    Soon,
    Later,
    Maybe,
}

#[derive(Args)]
pub struct AddArgs {
    /// Task description (words are joined with spaces)
    #[arg(required = true, num_args = 1.., value_name = "TEXT")]
    text: Vec<String>,
}

pub fn run(dir: &Path, position: Position, args: AddArgs) -> Result<()> {
    let desc = args.text.join(" ");

    let storage = Storage::new(dir);
    let mut store = storage.load()?;
    match position {
        Position::Now => store.add_now(&desc)?,
        Position::Soon => store.add_soon(&desc)?,
        Position::Later => store.add_later(&desc)?,
        Position::Maybe => store.add_maybe(&desc)?,
    }
    storage.save(&store)?;

    println!("Added: {}", desc);
    Ok(())
}
