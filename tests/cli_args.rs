//! Argument-surface tests: subcommand aliases, the global flags and the
//! TODO_DIR environment override.

use clap::Parser;
use clap_complete::Shell;
use serial_test::serial;
use std::path::PathBuf;
use todo::cli::{Cli, Commands};

#[test]
fn test_no_arguments_selects_the_default_command() {
    let cli = Cli::try_parse_from(["todo"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.ugly);
}

#[test]
fn test_short_aliases_reach_the_same_commands() {
    assert!(matches!(
        Cli::try_parse_from(["todo", "n", "x"]).unwrap().command,
        Some(Commands::Now(_))
    ));
    assert!(matches!(
        Cli::try_parse_from(["todo", "s", "x"]).unwrap().command,
        Some(Commands::Soon(_))
    ));
    assert!(matches!(
        Cli::try_parse_from(["todo", "l", "x"]).unwrap().command,
        Some(Commands::Later(_))
    ));
    assert!(matches!(
        Cli::try_parse_from(["todo", "m", "x"]).unwrap().command,
        Some(Commands::Maybe(_))
    ));
    assert!(matches!(
        Cli::try_parse_from(["todo", "ls"]).unwrap().command,
        Some(Commands::List(_))
    ));
}

#[test]
fn test_add_commands_require_a_description() {
    assert!(Cli::try_parse_from(["todo", "now"]).is_err());
    assert!(Cli::try_parse_from(["todo", "maybe"]).is_err());
}

#[test]
fn test_negative_done_index_is_rejected_at_parse_time() {
    assert!(Cli::try_parse_from(["todo", "done", "-1"]).is_err());
}

#[test]
fn test_ugly_flag_is_accepted_after_a_subcommand() {
    let cli = Cli::try_parse_from(["todo", "list", "--ugly"]).unwrap();
    assert!(cli.ugly);
}

#[test]
fn test_completion_takes_a_shell_name() {
    let cli = Cli::try_parse_from(["todo", "completion", "bash"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Completion { shell: Shell::Bash })
    ));
}

#[test]
#[serial]
fn test_dir_falls_back_to_the_environment() {
    std::env::set_var("TODO_DIR", "/srv/tasks");
    let cli = Cli::try_parse_from(["todo"]).unwrap();
    std::env::remove_var("TODO_DIR");

    assert_eq!(cli.dir, Some(PathBuf::from("/srv/tasks")));
}

#[test]
#[serial]
fn test_dir_flag_wins_over_the_environment() {
    std::env::set_var("TODO_DIR", "/srv/tasks");
    let cli = Cli::try_parse_from(["todo", "--dir", "/tmp/override", "list"]).unwrap();
    std::env::remove_var("TODO_DIR");

    assert_eq!(cli.dir, Some(PathBuf::from("/tmp/override")));
}
