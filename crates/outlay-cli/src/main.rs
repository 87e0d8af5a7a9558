//! CLI application for the outlay expense tracker.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{add, edit, filter, list, parse, remove};

/// Record expenses from structured fields or plain sentences
#[derive(Parser)]
#[command(name = "outlay")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to the expense CSV file
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract an expense from a plain sentence
    Parse(parse::ParseArgs),

    /// Record an expense from structured fields
    Add(add::AddArgs),

    /// List all recorded expenses
    List(list::ListArgs),

    /// Modify fields of a recorded expense
    Edit(edit::EditArgs),

    /// Delete a recorded expense
    Remove(remove::RemoveArgs),

    /// List expenses matching criteria
    Filter(filter::FilterArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Parse(args) => parse::run(args, cli.file.as_deref()),
        Commands::Add(args) => add::run(args, cli.file.as_deref()),
        Commands::List(args) => list::run(args, cli.file.as_deref()),
        Commands::Edit(args) => edit::run(args, cli.file.as_deref()),
        Commands::Remove(args) => remove::run(args, cli.file.as_deref()),
        Commands::Filter(args) => filter::run(args, cli.file.as_deref()),
    }
}
