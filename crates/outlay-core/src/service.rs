//! Orchestration between the text parser and the expense store.

use tracing::info;

use crate::error::{ExtractionError, Result};
use crate::extract::{ExpenseParser, RuleBasedParser};
use crate::models::{Expense, ExtractedExpense, NewExpense};
use crate::storage::{ExpenseFilter, ExpenseStore};

/// Ties a parser and a store together behind one API.
pub struct ExpenseService<S> {
    parser: RuleBasedParser,
    store: S,
}

impl<S: ExpenseStore> ExpenseService<S> {
    pub fn new(store: S) -> Self {
        Self {
            parser: RuleBasedParser::new(),
            store,
        }
    }

    /// Parse `text` without persisting anything.
    pub fn parse(&self, text: &str) -> ExtractedExpense {
        self.parser.parse(text)
    }

    /// Parse `text` and persist the result.
    ///
    /// Fails when no amount could be extracted; every other field has a
    /// fallback and cannot block the insert.
    pub fn add_from_text(&mut self, text: &str) -> Result<(u64, ExtractedExpense)> {
        let extracted = self.parser.parse(text);
        let record = extracted.to_record().ok_or_else(|| ExtractionError::NoAmount {
            text: text.to_string(),
        })?;

        let id = self.store.insert(record)?;
        info!(id, confidence = extracted.confidence, "added expense from text");
        Ok((id, extracted))
    }

    /// Persist an expense built from structured fields.
    pub fn add(&mut self, expense: NewExpense) -> Result<u64> {
        Ok(self.store.insert(expense)?)
    }

    /// All recorded expenses.
    pub fn list(&self) -> Result<Vec<Expense>> {
        Ok(self.store.list_all()?)
    }

    /// Delete a recorded expense.
    pub fn remove(&mut self, id: u64) -> Result<()> {
        Ok(self.store.delete(id)?)
    }

    /// Replace a recorded expense.
    pub fn update(&mut self, id: u64, expense: NewExpense) -> Result<()> {
        Ok(self.store.update(id, expense)?)
    }

    /// Recorded expenses matching `filter`.
    pub fn filter(&self, filter: &ExpenseFilter) -> Result<Vec<Expense>> {
        Ok(self.store.filter(filter)?)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::error::OutlayError;
    use crate::models::Category;
    use crate::storage::CsvStore;

    fn open_service() -> (tempfile::TempDir, ExpenseService<CsvStore>) {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvStore::open(dir.path().join("expenses.csv")).unwrap();
        (dir, ExpenseService::new(store))
    }

    #[test]
    fn add_from_text_persists_the_extraction() {
        let (_dir, mut service) = open_service();

        let (id, extracted) = service.add_from_text("spent $50 on pizza yesterday").unwrap();
        assert_eq!(id, 1);
        assert_eq!(extracted.amount, Some(Decimal::from(50)));

        let stored = service.list().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].amount, Decimal::from(50));
        assert_eq!(stored[0].category, Category::Food);
    }

    #[test]
    fn add_from_text_requires_an_amount() {
        let (_dir, mut service) = open_service();

        let err = service.add_from_text("coffee with friends").unwrap_err();
        assert!(matches!(
            err,
            OutlayError::Extraction(ExtractionError::NoAmount { .. })
        ));
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn structured_add_skips_extraction() {
        let (_dir, mut service) = open_service();

        let id = service
            .add(NewExpense {
                amount: Decimal::from(30),
                category: Category::Transport,
                description: "train ticket".to_string(),
                date: chrono::NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            })
            .unwrap();

        assert_eq!(id, 1);
        assert_eq!(service.list().unwrap()[0].description, "train ticket");
    }
}
