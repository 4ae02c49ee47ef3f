//! Top-level clap definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::add::AddArgs;
use super::chart::ChartArgs;
use super::list::ListArgs;
use super::remove::RemoveArgs;

#[derive(Parser)]
#[command(name = "todo")]
#[command(about = "Priority-ordered personal task list", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Task file to use (defaults to the configured file, then ./tasks.csv)
    #[arg(long, global = true, env = "TODO_BOARD_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// Delete a task by id
    #[command(visible_alias = "rm", alias = "remove")]
    Delete(RemoveArgs),

    /// List tasks, highest priority first
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show how many tasks exist per priority
    Chart(ChartArgs),

    /// Numbered text menu
    Menu,

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from(["todo", "add", "Buy milk", "-p", "high"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Add(_))));
    }

    #[test]
    fn test_parse_global_file_after_subcommand() {
        let cli = Cli::try_parse_from(["todo", "list", "--file", "/tmp/x.csv"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/x.csv")));
    }

    #[test]
    fn test_rm_alias() {
        let cli = Cli::try_parse_from(["todo", "rm", "3"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Delete(_))));
    }

    #[test]
    fn test_no_subcommand_opens_board() {
        let cli = Cli::try_parse_from(["todo"]).unwrap();
        assert!(cli.command.is_none());
    }
}
