//! Expense extraction from natural-language text.

mod parser;
pub mod rules;

pub use parser::{ExpenseParser, RuleBasedParser};
