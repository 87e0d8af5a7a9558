//! Expense text parser combining the per-field extraction rules.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::models::ExtractedExpense;

use super::rules::{confidence, AmountExtractor, CategoryClassifier, DateResolver, DescriptionBuilder};

/// Trait for expense text parsing.
pub trait ExpenseParser {
    /// Parse free-form text into a structured expense, relative to the
    /// current local date.
    fn parse(&self, text: &str) -> ExtractedExpense;

    /// Parse free-form text with an explicit reference date.
    fn parse_with_date(&self, text: &str, today: NaiveDate) -> ExtractedExpense;
}

/// Rule-based expense parser.
///
/// Holds only read-only pattern tables, so a single instance can be shared
/// across threads by reference.
pub struct RuleBasedParser {
    amounts: AmountExtractor,
    categories: CategoryClassifier,
    dates: DateResolver,
    descriptions: DescriptionBuilder,
}

impl RuleBasedParser {
    pub fn new() -> Self {
        Self {
            amounts: AmountExtractor::new(),
            categories: CategoryClassifier::new(),
            dates: DateResolver::new(),
            descriptions: DescriptionBuilder::new(),
        }
    }
}

impl Default for RuleBasedParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseParser for RuleBasedParser {
    fn parse(&self, text: &str) -> ExtractedExpense {
        self.parse_with_date(text, Local::now().date_naive())
    }

    fn parse_with_date(&self, text: &str, today: NaiveDate) -> ExtractedExpense {
        // Every field has its own fallback, so all four extractions run
        // regardless of what the others find.
        let amount = self.amounts.extract(text);
        let category = self.categories.classify(text);
        let date = self.dates.resolve(text, today);
        let description = self.descriptions.build(text, category);

        let mut extracted = ExtractedExpense {
            amount,
            category,
            description,
            date,
            confidence: 0.0,
            raw_text: text.to_string(),
        };
        extracted.confidence = confidence::score(&extracted);

        debug!(
            amount = ?extracted.amount,
            category = %extracted.category,
            confidence = extracted.confidence,
            "parsed expense text"
        );

        extracted
    }
}
