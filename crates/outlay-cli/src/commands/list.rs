//! List command - show recorded expenses.

use std::path::Path;

use clap::Args;

use outlay_core::Expense;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Aligned table
    Table,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

pub fn run(args: ListArgs, file: Option<&Path>) -> anyhow::Result<()> {
    let service = super::open_service(file)?;
    let expenses = service.list()?;
    print_expenses(&expenses, args.format)
}

pub(crate) fn print_expenses(expenses: &[Expense], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(expenses)?),
        OutputFormat::Csv => print!("{}", format_csv(expenses)?),
        OutputFormat::Table => {
            if expenses.is_empty() {
                println!("No expenses recorded.");
                return Ok(());
            }
            println!(
                "{:>4}  {:>10}  {:<13}  {:<10}  description",
                "id", "amount", "category", "date"
            );
            for expense in expenses {
                println!(
                    "{:>4}  {:>10}  {:<13}  {}  {}",
                    expense.id,
                    expense.amount.to_string(),
                    expense.category.as_str(),
                    expense.date,
                    expense.description
                );
            }
        }
    }
    Ok(())
}

fn format_csv(expenses: &[Expense]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(["id", "amount", "category", "description", "date"])?;
    for expense in expenses {
        writer.write_record([
            expense.id.to_string(),
            expense.amount.to_string(),
            expense.category.to_string(),
            expense.description.clone(),
            expense.date.to_string(),
        ])?;
    }

    Ok(String::from_utf8(writer.into_inner()?)?)
}
