//! todo - track what to do now, soon, later and maybe

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use todo::cli::add::Position;
use todo::cli::{self, Cli, Commands};

fn main() -> Result<()> {
    if std::env::var("TODO_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("todo=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completion generation needs no task data and no resolved directory.
    if let Some(Commands::Completion { shell }) = &cli.command {
        generate(*shell, &mut Cli::command(), "todo", &mut std::io::stdout());
        return Ok(());
    }

    let dir = cli::resolve_dir(cli.dir)?;

    match cli.command {
        Some(Commands::Now(args)) => cli::add::run(&dir, Position::Now, args),
        Some(Commands::Soon(args)) => cli::add::run(&dir, Position::Soon, args),
        Some(Commands::Later(args)) => cli::add::run(&dir, Position::Later, args),
        Some(Commands::Maybe(args)) => cli::add::run(&dir, Position::Maybe, args),
        Some(Commands::List(args)) => cli::list::run(&dir, cli.ugly, args),
        Some(Commands::Done(args)) => cli::done::run(&dir, args),
        Some(Commands::Completion { .. }) => unreachable!(),
        None => cli::current::run(&dir, cli.ugly),
    }
}
