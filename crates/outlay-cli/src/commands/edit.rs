//! Edit command - modify fields of a recorded expense.

use std::path::Path;

use chrono::NaiveDate;
use clap::Args;
use console::style;
use rust_decimal::Decimal;

use outlay_core::{Category, NewExpense};

/// Arguments for the edit command.
#[derive(Args)]
pub struct EditArgs {
    /// Id of the expense to modify
    id: u64,

    /// New amount
    #[arg(short, long)]
    amount: Option<Decimal>,

    /// New category
    #[arg(short, long)]
    category: Option<Category>,

    /// New description
    #[arg(short, long)]
    description: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,
}

pub fn run(args: EditArgs, file: Option<&Path>) -> anyhow::Result<()> {
    let mut service = super::open_service(file)?;

    let current = service
        .list()?
        .into_iter()
        .find(|e| e.id == args.id)
        .ok_or_else(|| anyhow::anyhow!("no expense with id {}", args.id))?;

    service.update(
        args.id,
        NewExpense {
            amount: args.amount.unwrap_or(current.amount),
            category: args.category.unwrap_or(current.category),
            description: args.description.unwrap_or(current.description),
            date: args.date.unwrap_or(current.date),
        },
    )?;

    println!("{} Updated expense #{}", style("✓").green(), args.id);
    Ok(())
}
