//! Regex patterns shared by the extraction rules.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Amount patterns. Precedence lives in AmountExtractor: symbol-prefixed
    // amounts are the least ambiguous and out-rank the keyword heuristics.
    pub static ref AMOUNT_SYMBOL: Regex = Regex::new(
        r"[$₹£€]\s*(\d+(?:\.\d{2})?)"
    ).unwrap();

    pub static ref AMOUNT_CURRENCY_WORD: Regex = Regex::new(
        r"(\d+(?:\.\d{2})?)\s*(?:dollars?|bucks?|rupees?|pounds?|euros?)"
    ).unwrap();

    pub static ref AMOUNT_CURRENCY_CODE: Regex = Regex::new(
        r"(\d+(?:\.\d{2})?)\s*(?:rs\.?|inr|usd|\$)"
    ).unwrap();

    pub static ref AMOUNT_SPEND_VERB: Regex = Regex::new(
        r"(?:spent|paid|cost|price|amount)\s*[$₹£€]?\s*(\d+(?:\.\d{2})?)"
    ).unwrap();

    pub static ref AMOUNT_QUALIFIER: Regex = Regex::new(
        r"(\d+(?:\.\d{2})?)\s*(?:only|just)"
    ).unwrap();

    // "3 days ago" style offsets.
    pub static ref DAYS_AGO: Regex = Regex::new(
        r"(\d+)\s*days?\s*ago"
    ).unwrap();

    // Description cleanup: amounts in either currency notation, then filler
    // words that carry no descriptive content.
    pub static ref STRIP_SYMBOL_AMOUNT: Regex = Regex::new(
        r"[$₹£€]\s*\d+(?:\.\d{2})?"
    ).unwrap();

    pub static ref STRIP_WORDED_AMOUNT: Regex = Regex::new(
        r"\d+(?:\.\d{2})?\s*(?:dollars?|bucks?|rupees?|pounds?|euros?|rs\.?|inr|usd)"
    ).unwrap();

    pub static ref STOP_WORDS: Regex = Regex::new(
        r"(?i)\b(?:spent|paid|cost|bought|purchase|for|on|at|in|the|a|an|today|yesterday|last|ago|days?|only|just)\b"
    ).unwrap();

    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}
