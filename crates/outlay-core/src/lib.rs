//! Core library for the outlay expense tracker.
//!
//! This crate provides:
//! - Natural-language expense extraction (amount, category, date,
//!   description, confidence)
//! - Expense data models
//! - A CSV-file-backed, id-keyed expense store
//! - A service layer wiring extraction output into storage

pub mod error;
pub mod extract;
pub mod models;
pub mod service;
pub mod storage;

pub use error::{ExtractionError, OutlayError, Result, StorageError};
pub use extract::{ExpenseParser, RuleBasedParser};
pub use models::{Category, Expense, ExtractedExpense, NewExpense};
pub use service::ExpenseService;
pub use storage::{CsvStore, ExpenseFilter, ExpenseStore};
