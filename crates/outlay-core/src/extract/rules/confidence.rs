//! Confidence scoring for extraction results.

use crate::models::{Category, ExtractedExpense};

/// Weighted extraction-quality score in [0.0, 1.0].
///
/// Additive weights, capped at 1.0: amount 0.4; category 0.3, or 0.1 when
/// only the miscellaneous fallback applied; description 0.2, or 0.1 at five
/// characters or fewer; date 0.1. Not a probability.
pub fn score(extracted: &ExtractedExpense) -> f32 {
    let mut confidence = 0.0_f32;

    if extracted.amount.is_some() {
        confidence += 0.4;
    }

    if extracted.category != Category::Miscellaneous {
        confidence += 0.3;
    } else {
        confidence += 0.1;
    }

    if extracted.description.len() > 5 {
        confidence += 0.2;
    } else if !extracted.description.is_empty() {
        confidence += 0.1;
    }

    // The date resolver always produces a date.
    confidence += 0.1;

    confidence.min(1.0)
}
