//! `todo add` command implementation

use anyhow::{bail, Result};
use clap::Args;

use crate::task::{Priority, TaskStore};

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    title: String,

    /// Longer description
    #[arg(short, long, default_value = "")]
    description: String,

    /// Priority (high, medium, low); anything else is stored as low
    #[arg(short, long, default_value = "medium")]
    priority: String,
}

pub fn run(store: &mut TaskStore, args: AddArgs) -> Result<()> {
    let priority = Priority::normalize(&args.priority);
    let id = add_checked(store, &args.title, &args.description, priority)?;

    println!("✓ Added task {}", id);
    println!("  Title:    {}", args.title.trim());
    println!("  Priority: {}", priority);
    println!("  File:     {}", store.path().display());

    Ok(())
}

/// Add a task after rejecting a blank title
pub fn add_checked(
    store: &mut TaskStore,
    title: &str,
    description: &str,
    priority: Priority,
) -> Result<u64> {
    if title.trim().is_empty() {
        bail!("Task title cannot be empty");
    }
    Ok(store.add_task(title, description, priority)?)
}
