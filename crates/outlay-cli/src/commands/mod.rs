//! CLI subcommands.

pub mod add;
pub mod edit;
pub mod filter;
pub mod list;
pub mod parse;
pub mod remove;

use std::path::{Path, PathBuf};

use outlay_core::{CsvStore, ExpenseService};

/// Default store location under the platform data directory.
fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("outlay")
        .join("expenses.csv")
}

/// Open the store at the override path or the default location.
pub(crate) fn open_service(file: Option<&Path>) -> anyhow::Result<ExpenseService<CsvStore>> {
    let path = file.map(Path::to_path_buf).unwrap_or_else(default_store_path);
    let store = CsvStore::open(path)?;
    Ok(ExpenseService::new(store))
}
