//! `todo done` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::tasks::Storage;

#[derive(Args)]
pub struct DoneArgs {
    /// Flat index of the task to finish (defaults to the current task)
    #[arg(value_name = "INDEX")]
    index: Option<usize>,
}

pub fn run(dir: &Path, args: DoneArgs) -> Result<()> {
    let storage = Storage::new(dir);
    let mut store = storage.load()?;
    let task = store.done(args.index)?;
    storage.save(&store)?;

    println!("Done: {}", task);
    Ok(())
}
