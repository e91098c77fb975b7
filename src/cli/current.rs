//! Default command: show the task at the front of the queue

use anyhow::Result;
use std::path::Path;

use crate::display;
use crate::tasks::{Config, Storage};

pub fn run(dir: &Path, ugly: bool) -> Result<()> {
    let store = Storage::new(dir).load()?;
    let ugly = ugly || Config::load(dir)?.display.ugly;

    let line = match store.current() {
        Some(task) => task.to_string(),
        None => "Nothing to do!".to_string(),
    };
    print!("{}", display::render(&[line], ugly));
    Ok(())
}
