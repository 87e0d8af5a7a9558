//! Amount extraction from free-form expense text.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;

use super::patterns::{
    AMOUNT_CURRENCY_CODE, AMOUNT_CURRENCY_WORD, AMOUNT_QUALIFIER, AMOUNT_SPEND_VERB, AMOUNT_SYMBOL,
};

/// Rule-based monetary amount extractor.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Patterns in precedence order; the first one whose match parses wins.
    fn patterns() -> [&'static Regex; 5] {
        [
            &AMOUNT_SYMBOL,
            &AMOUNT_CURRENCY_WORD,
            &AMOUNT_CURRENCY_CODE,
            &AMOUNT_SPEND_VERB,
            &AMOUNT_QUALIFIER,
        ]
    }

    /// Extract the amount from `text`, or `None` when no pattern matches.
    ///
    /// A match whose capture fails to parse is skipped, not fatal; the next
    /// pattern gets its turn.
    pub fn extract(&self, text: &str) -> Option<Decimal> {
        let lowered = text.to_lowercase();

        for pattern in Self::patterns() {
            if let Some(caps) = pattern.captures(&lowered) {
                if let Ok(amount) = Decimal::from_str(&caps[1]) {
                    return Some(amount);
                }
            }
        }

        None
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Option<Decimal> {
        AmountExtractor::new().extract(text)
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn symbol_prefixed_amount() {
        assert_eq!(extract("spent $50 on pizza"), Some(dec("50")));
        assert_eq!(extract("₹100 for groceries"), Some(dec("100")));
        assert_eq!(extract("£30.50 on books"), Some(dec("30.50")));
        assert_eq!(extract("dinner €25"), Some(dec("25")));
    }

    #[test]
    fn currency_word_amount() {
        assert_eq!(extract("50 dollars for dinner"), Some(dec("50")));
        assert_eq!(extract("30 bucks parking"), Some(dec("30")));
        assert_eq!(extract("200 rupees metro card"), Some(dec("200")));
    }

    #[test]
    fn currency_code_amount() {
        assert_eq!(extract("500 rs groceries"), Some(dec("500")));
        assert_eq!(extract("100 INR recharge"), Some(dec("100")));
        assert_eq!(extract("40 usd software"), Some(dec("40")));
    }

    #[test]
    fn spend_verb_amount() {
        assert_eq!(extract("Paid 20 for uber"), Some(dec("20")));
        assert_eq!(extract("the movie cost 12.75"), Some(dec("12.75")));
    }

    #[test]
    fn trailing_qualifier_amount() {
        assert_eq!(extract("haircut 15 only"), Some(dec("15")));
        assert_eq!(extract("35 just for snacks"), Some(dec("35")));
    }

    #[test]
    fn symbol_outranks_spend_verb() {
        // Both patterns match; the symbol-prefixed one is less ambiguous.
        assert_eq!(extract("paid 20 but the receipt says $18"), Some(dec("18")));
    }

    #[test]
    fn no_amount() {
        assert_eq!(extract("coffee with friends"), None);
        assert_eq!(extract(""), None);
    }
}
