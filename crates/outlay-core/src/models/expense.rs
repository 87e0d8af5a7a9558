//! Expense record and extraction result models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::Category;

/// A persisted expense record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Store-generated identifier.
    pub id: u64,

    /// Amount spent.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,

    /// Expense category.
    pub category: Category,

    /// What the expense was for.
    pub description: String,

    /// Date of the expense.
    pub date: NaiveDate,
}

impl Expense {
    /// Attach a store-generated id to a new expense.
    pub fn from_new(id: u64, new: NewExpense) -> Self {
        Self {
            id,
            amount: new.amount,
            category: new.category,
            description: new.description,
            date: new.date,
        }
    }
}

/// An expense that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    /// Amount spent.
    pub amount: Decimal,

    /// Expense category.
    pub category: Category,

    /// What the expense was for.
    pub description: String,

    /// Date of the expense.
    pub date: NaiveDate,
}

/// Result of extracting an expense from free-form text.
///
/// A pure transformation output: every field except `amount` is guaranteed
/// to be populated, and no identity attaches to it until a caller chooses
/// to persist it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedExpense {
    /// Extracted amount, absent when no currency pattern matched.
    pub amount: Option<Decimal>,

    /// Classified category, `miscellaneous` when no keyword matched.
    pub category: Category,

    /// Noise-stripped description, never empty.
    pub description: String,

    /// Resolved date, the call date when no temporal cue was found.
    pub date: NaiveDate,

    /// Extraction quality score in [0.0, 1.0].
    pub confidence: f32,

    /// The original untouched input.
    pub raw_text: String,
}

impl ExtractedExpense {
    /// Convert into a storable record, or `None` when no amount was found.
    pub fn to_record(&self) -> Option<NewExpense> {
        self.amount.map(|amount| NewExpense {
            amount,
            category: self.category,
            description: self.description.clone(),
            date: self.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn to_record_requires_an_amount() {
        let extracted = ExtractedExpense {
            amount: None,
            category: Category::Food,
            description: "pizza".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 15).unwrap(),
            confidence: 0.5,
            raw_text: "pizza".to_string(),
        };
        assert!(extracted.to_record().is_none());

        let extracted = ExtractedExpense {
            amount: Some(Decimal::from_str("12.50").unwrap()),
            ..extracted
        };
        let record = extracted.to_record().unwrap();
        assert_eq!(record.amount, Decimal::from_str("12.50").unwrap());
        assert_eq!(record.category, Category::Food);
    }
}
