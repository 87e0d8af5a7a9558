//! CSV-file-backed expense store.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::StorageError;
use crate::models::{Expense, NewExpense};

use super::{ExpenseFilter, ExpenseStore, Result};

const HEADER: [&str; 5] = ["id", "amount", "category", "description", "date"];

/// Expense store backed by a single CSV file.
///
/// Mutations read the whole file and rewrite it; access is assumed to be
/// single-process and sequential.
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    /// Open a store at `path`, creating the file (and missing parent
    /// directories) with a header row when it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self { path: path.into() };

        if !store.path.exists() {
            if let Some(parent) = store.path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            store.write_all(&[])?;
            debug!(path = %store.path.display(), "created expense file");
        }

        Ok(store)
    }

    /// The file this store reads and writes.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn read_all(&self) -> Result<Vec<Expense>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut expenses = Vec::new();
        for record in reader.deserialize() {
            expenses.push(record?);
        }
        Ok(expenses)
    }

    fn write_all(&self, expenses: &[Expense]) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;

        writer.write_record(HEADER)?;
        for expense in expenses {
            writer.write_record([
                expense.id.to_string(),
                expense.amount.to_string(),
                expense.category.to_string(),
                expense.description.clone(),
                expense.date.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

impl ExpenseStore for CsvStore {
    fn insert(&mut self, expense: NewExpense) -> Result<u64> {
        let mut expenses = self.read_all()?;
        let id = expenses.iter().map(|e| e.id).max().unwrap_or(0) + 1;

        expenses.push(Expense::from_new(id, expense));
        self.write_all(&expenses)?;

        debug!(id, "inserted expense");
        Ok(id)
    }

    fn list_all(&self) -> Result<Vec<Expense>> {
        self.read_all()
    }

    fn delete(&mut self, id: u64) -> Result<()> {
        let mut expenses = self.read_all()?;
        let before = expenses.len();

        expenses.retain(|e| e.id != id);
        if expenses.len() == before {
            return Err(StorageError::NotFound(id));
        }

        self.write_all(&expenses)?;
        debug!(id, "deleted expense");
        Ok(())
    }

    fn update(&mut self, id: u64, expense: NewExpense) -> Result<()> {
        let mut expenses = self.read_all()?;
        let record = expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(StorageError::NotFound(id))?;

        *record = Expense::from_new(id, expense);
        self.write_all(&expenses)?;

        debug!(id, "updated expense");
        Ok(())
    }

    fn filter(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
        let mut expenses = self.read_all()?;
        expenses.retain(|e| filter.matches(e));
        Ok(expenses)
    }
}
