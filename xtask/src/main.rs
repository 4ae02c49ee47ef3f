//! xtask - Development tasks for todo-board

use clap::{Parser, Subcommand};
use std::fs;
use std::io;
use std::path::Path;
use std::process::ExitCode;

const REFERENCE_PATH: &str = "docs/cli/reference.md";

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for todo-board")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate CLI documentation from clap definitions
    GenDocs {
        /// Fail instead of writing when the checked-in reference is stale
        #[arg(long)]
        check: bool,
    },
}

fn main() -> io::Result<ExitCode> {
    let args = Xtask::parse();
    match args.command {
        Commands::GenDocs { check } => generate_cli_docs(check),
    }
}

fn generate_cli_docs(check: bool) -> io::Result<ExitCode> {
    let markdown = clap_markdown::help_markdown::<todo_board::cli::Cli>();
    let output_path = Path::new(REFERENCE_PATH);

    if check {
        let current = fs::read_to_string(output_path).unwrap_or_default();
        if current != markdown {
            eprintln!(
                "{} is out of date; run `cargo run -p xtask -- gen-docs`",
                output_path.display()
            );
            return Ok(ExitCode::FAILURE);
        }
        println!("{} is up to date", output_path.display());
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(dir) = output_path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(output_path, markdown)?;

    println!("Generated CLI documentation at {}", output_path.display());
    Ok(ExitCode::SUCCESS)
}
