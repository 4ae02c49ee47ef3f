//! `todo list` command implementation

use anyhow::Result;
use clap::Args;
use std::fmt::Write as _;

use super::{pad, truncate};
use crate::task::{Task, TaskStore};

const TABLE_COL_ID: usize = 6;
const TABLE_COL_TITLE: usize = 20;
const TABLE_COL_PRIORITY: usize = 8;
const TABLE_RULE_WIDTH: usize = 60;

#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(store: &TaskStore, args: ListArgs) -> Result<()> {
    let tasks = store.list_tasks();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if tasks.is_empty() {
        println!("No tasks in {}", store.path().display());
        return Ok(());
    }

    print!("{}", render_table(&tasks));
    println!("\nTotal: {} tasks", tasks.len());
    Ok(())
}

/// Render tasks as a fixed-width table, in the order given
pub fn render_table(tasks: &[&Task]) -> String {
    let mut out = String::new();
    let rule = "-".repeat(TABLE_RULE_WIDTH);

    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(
        out,
        "{} | {} | {} | DESCRIPTION",
        pad("ID", TABLE_COL_ID),
        pad("TITLE", TABLE_COL_TITLE),
        pad("PRIORITY", TABLE_COL_PRIORITY),
    );
    let _ = writeln!(out, "{}", rule);

    for task in tasks {
        let _ = writeln!(
            out,
            "{} | {} | {} | {}",
            pad(&task.id.to_string(), TABLE_COL_ID),
            pad(&truncate(&task.title, TABLE_COL_TITLE), TABLE_COL_TITLE),
            pad(task.priority.label(), TABLE_COL_PRIORITY),
            task.description,
        );
    }

    let _ = writeln!(out, "{}", rule);
    out
}
