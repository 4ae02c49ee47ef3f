//! todo - priority-ordered personal task list

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use todo_board::cli::{self, Cli, Commands};
use todo_board::config::Config;
use todo_board::task::TaskStore;
use todo_board::tui;

fn main() -> Result<()> {
    if std::env::var("TODO_BOARD_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("todo_board=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();

    // Completions need neither config nor the task file
    if let Some(Commands::Completion { shell }) = cli.command {
        generate(shell, &mut Cli::command(), "todo", &mut std::io::stdout());
        return Ok(());
    }

    let config = Config::load()?;
    let path = config.resolve_tasks_path(cli.file.as_deref());
    let mut store = TaskStore::open(&path)
        .with_context(|| format!("Failed to load tasks from {}", path.display()))?;

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(&mut store, args),
        Some(Commands::Delete(args)) => cli::remove::run(&mut store, args),
        Some(Commands::List(args)) => cli::list::run(&store, args),
        Some(Commands::Chart(args)) => cli::chart::run(&store, args),
        Some(Commands::Menu) => cli::menu::run(&mut store),
        Some(Commands::Completion { .. }) => Ok(()),
        None => tui::run(&mut store, &config),
    }
}
