//! Remove command - delete a recorded expense.

use std::path::Path;

use clap::Args;
use console::style;

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Id of the expense to delete
    id: u64,
}

pub fn run(args: RemoveArgs, file: Option<&Path>) -> anyhow::Result<()> {
    let mut service = super::open_service(file)?;
    service.remove(args.id)?;

    println!("{} Deleted expense #{}", style("✓").green(), args.id);
    Ok(())
}
