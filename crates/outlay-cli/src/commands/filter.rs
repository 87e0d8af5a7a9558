//! Filter command - list expenses matching criteria.

use std::path::Path;

use chrono::NaiveDate;
use clap::Args;

use outlay_core::{Category, ExpenseFilter};

use super::list::{print_expenses, OutputFormat};

/// Arguments for the filter command.
#[derive(Args)]
pub struct FilterArgs {
    /// Only this category
    #[arg(short, long)]
    category: Option<Category>,

    /// Earliest date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Latest date, inclusive (YYYY-MM-DD)
    #[arg(long)]
    to: Option<NaiveDate>,

    /// Substring of the description, case-insensitive
    #[arg(short, long)]
    search: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

pub fn run(args: FilterArgs, file: Option<&Path>) -> anyhow::Result<()> {
    let service = super::open_service(file)?;

    let expenses = service.filter(&ExpenseFilter {
        category: args.category,
        from: args.from,
        to: args.to,
        search: args.search,
    })?;

    print_expenses(&expenses, args.format)
}
