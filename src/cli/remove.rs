//! `todo delete` command implementation

use anyhow::Result;
use clap::Args;

use crate::task::TaskStore;

#[derive(Args)]
pub struct RemoveArgs {
    /// Id of the task to delete
    id: u64,
}

pub fn run(store: &mut TaskStore, args: RemoveArgs) -> Result<()> {
    if store.delete_task(args.id)? {
        println!("✓ Deleted task {}", args.id);
    } else {
        println!("No task with id {}", args.id);
    }
    Ok(())
}
