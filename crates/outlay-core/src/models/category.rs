//! Expense categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Closed set of expense categories.
///
/// Declaration order matters: the keyword classifier resolves score ties in
/// favor of the earliest declared category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Entertainment,
    Health,
    Utilities,
    Groceries,
    Education,
    Miscellaneous,
}

impl Category {
    /// All categories in declaration order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Food,
            Category::Transport,
            Category::Shopping,
            Category::Entertainment,
            Category::Health,
            Category::Utilities,
            Category::Groceries,
            Category::Education,
            Category::Miscellaneous,
        ]
    }

    /// Lowercase label, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Transport => "transport",
            Category::Shopping => "shopping",
            Category::Entertainment => "entertainment",
            Category::Health => "health",
            Category::Utilities => "utilities",
            Category::Groceries => "groceries",
            Category::Education => "education",
            Category::Miscellaneous => "miscellaneous",
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Category::Miscellaneous
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category label.
#[derive(Error, Debug)]
#[error("unknown category: {0}")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s.to_lowercase())
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_from_str_round_trip() {
        for category in Category::all() {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), *category);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("TRANSPORT".parse::<Category>().unwrap(), Category::Transport);
    }

    #[test]
    fn parse_rejects_unknown_label() {
        assert!("gambling".parse::<Category>().is_err());
    }
}
