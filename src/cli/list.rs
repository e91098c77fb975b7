//! `todo list` command implementation

use anyhow::Result;
use clap::Args;
use std::path::Path;

use crate::display;
use crate::tasks::{Config, Storage};

#[derive(Args)]
pub struct ListArgs {
    /// How many tasks to show (defaults to 3)
    #[arg(value_name = "COUNT")]
    count: Option<usize>,

    /// Show every task, including the later/maybe list
    #[arg(long)]
    all: bool,
}

pub fn run(dir: &Path, ugly: bool, args: ListArgs) -> Result<()> {
    let store = Storage::new(dir).load()?;
    let ugly = ugly || Config::load(dir)?.display.ugly;

    let items = store.list(args.count, args.all);
    let lines = if items.is_empty() {
        vec!["Nothing to do!".to_string()]
    } else {
        display::task_lines(&items)
    };
    print!("{}", display::render(&lines, ugly));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::cli::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_count_and_all_parse_together() {
        let cli = Cli::try_parse_from(["todo", "list", "5", "--all"]).unwrap();
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.count, Some(5));
                assert!(args.all);
            }
            _ => panic!("expected the list command"),
        }
    }
}
