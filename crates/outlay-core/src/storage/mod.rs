//! Expense persistence.

mod csv;

pub use self::csv::CsvStore;

use chrono::NaiveDate;

use crate::error::StorageError;
use crate::models::{Category, Expense, NewExpense};

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Criteria for narrowing a listing; unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Exact category match.
    pub category: Option<Category>,

    /// Earliest date, inclusive.
    pub from: Option<NaiveDate>,

    /// Latest date, inclusive.
    pub to: Option<NaiveDate>,

    /// Case-insensitive substring of the description.
    pub search: Option<String>,
}

impl ExpenseFilter {
    /// Whether `expense` satisfies every set criterion.
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(category) = self.category {
            if expense.category != category {
                return false;
            }
        }
        if let Some(from) = self.from {
            if expense.date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if expense.date > to {
                return false;
            }
        }
        if let Some(search) = &self.search {
            if !expense
                .description
                .to_lowercase()
                .contains(&search.to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// Trait for id-keyed expense stores.
pub trait ExpenseStore {
    /// Persist a new expense and return its generated id.
    fn insert(&mut self, expense: NewExpense) -> Result<u64>;

    /// All stored expenses in insertion order.
    fn list_all(&self) -> Result<Vec<Expense>>;

    /// Remove the expense with the given id.
    fn delete(&mut self, id: u64) -> Result<()>;

    /// Replace the expense with the given id.
    fn update(&mut self, id: u64, expense: NewExpense) -> Result<()>;

    /// Expenses matching `filter`, in insertion order.
    fn filter(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>>;
}
