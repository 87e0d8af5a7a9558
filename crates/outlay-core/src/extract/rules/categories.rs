//! Keyword-based category classification.

use crate::models::Category;

/// Keyword table, in declaration order.
///
/// Matching is substring containment, not word-boundary-aware; ties between
/// equal match counts resolve to the earliest entry.
const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Food,
        &[
            "food", "lunch", "dinner", "breakfast", "restaurant", "pizza", "burger", "coffee",
            "tea", "snack", "meal", "eat", "hungry", "cafe", "mcdonalds", "kfc", "subway",
            "starbucks", "dominos",
        ],
    ),
    (
        Category::Transport,
        &[
            "gas", "fuel", "uber", "taxi", "bus", "train", "metro", "parking", "toll", "car",
            "bike", "flight", "airline", "travel", "trip",
        ],
    ),
    (
        Category::Shopping,
        &[
            "shopping", "clothes", "shirt", "shoes", "dress", "jacket", "pants", "buy", "bought",
            "purchase", "store", "mall", "amazon", "flipkart",
        ],
    ),
    (
        Category::Entertainment,
        &[
            "movie", "cinema", "game", "music", "concert", "party", "fun", "entertainment",
            "netflix", "spotify", "youtube",
        ],
    ),
    (
        Category::Health,
        &[
            "doctor", "medicine", "pharmacy", "hospital", "health", "medical", "dental", "clinic",
            "pills", "treatment",
        ],
    ),
    (
        Category::Utilities,
        &[
            "electricity", "water", "internet", "phone", "mobile", "wifi", "cable", "utility",
            "bill", "rent",
        ],
    ),
    (
        Category::Groceries,
        &[
            "grocery", "groceries", "vegetables", "fruits", "milk", "bread", "eggs",
            "supermarket", "walmart", "target",
        ],
    ),
    (
        Category::Education,
        &[
            "book", "course", "class", "school", "college", "university", "education", "study",
            "learn",
        ],
    ),
    (
        Category::Miscellaneous,
        &["other", "misc", "random", "stuff", "things", "general"],
    ),
];

/// Substring-count category classifier.
pub struct CategoryClassifier;

impl CategoryClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify `text`, falling back to [`Category::Miscellaneous`] when no
    /// keyword occurs at all.
    pub fn classify(&self, text: &str) -> Category {
        let lowered = text.to_lowercase();

        let mut best = Category::Miscellaneous;
        let mut best_score = 0;
        for (category, keywords) in CATEGORY_KEYWORDS {
            let score = keywords.iter().filter(|kw| lowered.contains(**kw)).count();
            if score > best_score {
                best = *category;
                best_score = score;
            }
        }

        best
    }
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Category {
        CategoryClassifier::new().classify(text)
    }

    #[test]
    fn keyword_hits_pick_the_category() {
        assert_eq!(classify("pizza with friends"), Category::Food);
        assert_eq!(classify("Uber to the airport"), Category::Transport);
        assert_eq!(classify("new shoes from amazon"), Category::Shopping);
        assert_eq!(classify("netflix subscription"), Category::Entertainment);
        assert_eq!(classify("pharmacy run for pills"), Category::Health);
        assert_eq!(classify("internet bill"), Category::Utilities);
        assert_eq!(classify("milk and bread"), Category::Groceries);
        assert_eq!(classify("college course book"), Category::Education);
    }

    #[test]
    fn more_hits_beat_fewer() {
        // One transport keyword against three food keywords.
        assert_eq!(classify("gas station coffee snack meal"), Category::Food);
    }

    #[test]
    fn ties_resolve_to_declaration_order() {
        // "food" and "gas" score one apiece; Food is declared first.
        assert_eq!(classify("food and gas"), Category::Food);
    }

    #[test]
    fn no_keyword_falls_back_to_miscellaneous() {
        assert_eq!(classify("zzz"), Category::Miscellaneous);
        assert_eq!(classify(""), Category::Miscellaneous);
    }

    #[test]
    fn miscellaneous_has_its_own_keywords() {
        assert_eq!(classify("random stuff"), Category::Miscellaneous);
    }

    #[test]
    fn matching_is_substring_based() {
        // "carpet" contains "car".
        assert_eq!(classify("carpet cleaning"), Category::Transport);
    }
}
