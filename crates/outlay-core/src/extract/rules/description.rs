//! Description cleanup for extracted expenses.

use crate::models::Category;

use super::patterns::{STOP_WORDS, STRIP_SYMBOL_AMOUNT, STRIP_WORDED_AMOUNT, WHITESPACE};

/// Builds a human-readable description from raw expense text.
pub struct DescriptionBuilder;

impl DescriptionBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Strip amounts and filler words from `text`, falling back to
    /// "`<category> expense`" when too little survives.
    pub fn build(&self, text: &str, category: Category) -> String {
        let stripped = STRIP_SYMBOL_AMOUNT.replace_all(text, "");
        let stripped = STRIP_WORDED_AMOUNT.replace_all(&stripped, "");
        let stripped = STOP_WORDS.replace_all(&stripped, "");
        let collapsed = WHITESPACE.replace_all(&stripped, " ");
        let trimmed = collapsed.trim();

        if trimmed.len() < 3 {
            return format!("{category} expense");
        }

        trimmed.to_string()
    }
}

impl Default for DescriptionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
