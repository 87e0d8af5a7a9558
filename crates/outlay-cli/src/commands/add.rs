//! Add command - record an expense from structured fields.

use std::path::Path;

use chrono::{Local, NaiveDate};
use clap::Args;
use console::style;
use rust_decimal::Decimal;

use outlay_core::{Category, NewExpense};

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Amount spent
    #[arg(short, long)]
    amount: Decimal,

    /// Expense category
    #[arg(short, long)]
    category: Category,

    /// What the expense was for
    #[arg(short, long)]
    description: String,

    /// Date of the expense (YYYY-MM-DD, default: today)
    #[arg(long)]
    date: Option<NaiveDate>,
}

pub fn run(args: AddArgs, file: Option<&Path>) -> anyhow::Result<()> {
    let mut service = super::open_service(file)?;

    let id = service.add(NewExpense {
        amount: args.amount,
        category: args.category,
        description: args.description,
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
    })?;

    println!("{} Saved as expense #{}", style("✓").green(), id);
    Ok(())
}
