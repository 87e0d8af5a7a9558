//! Parse command - extract an expense from a plain sentence.

use std::path::Path;

use clap::Args;
use console::style;

use outlay_core::{ExpenseParser, ExtractedExpense, RuleBasedParser};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// The sentence to extract from, e.g. "spent $50 on pizza yesterday"
    #[arg(required = true)]
    text: Vec<String>,

    /// Persist the extracted expense
    #[arg(short, long)]
    save: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text summary
    Text,
    /// JSON output
    Json,
}

pub fn run(args: ParseArgs, file: Option<&Path>) -> anyhow::Result<()> {
    let text = args.text.join(" ");

    if args.save {
        let mut service = super::open_service(file)?;
        let (id, extracted) = service.add_from_text(&text)?;
        print_extracted(&extracted, args.format)?;
        println!("{} Saved as expense #{}", style("✓").green(), id);
    } else {
        let parser = RuleBasedParser::new();
        print_extracted(&parser.parse(&text), args.format)?;
    }

    Ok(())
}

fn print_extracted(extracted: &ExtractedExpense, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(extracted)?),
        OutputFormat::Text => {
            match &extracted.amount {
                Some(amount) => println!("amount:      {amount}"),
                None => println!("amount:      {}", style("not found").yellow()),
            }
            println!("category:    {}", extracted.category);
            println!("description: {}", extracted.description);
            println!("date:        {}", extracted.date);
            println!("confidence:  {:.2}", extracted.confidence);
        }
    }
    Ok(())
}
