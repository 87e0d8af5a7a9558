//! Relative date resolution for expense text.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::patterns::DAYS_AGO;

/// Fixed-phrase offsets, checked before any other rule, in table order.
const RELATIVE_KEYWORDS: &[(&str, i64)] = &[
    ("today", 0),
    ("yesterday", -1),
    ("day before yesterday", -2),
];

const WEEKDAYS: &[(&str, Weekday)] = &[
    ("last monday", Weekday::Mon),
    ("last tuesday", Weekday::Tue),
    ("last wednesday", Weekday::Wed),
    ("last thursday", Weekday::Thu),
    ("last friday", Weekday::Fri),
    ("last saturday", Weekday::Sat),
    ("last sunday", Weekday::Sun),
];

/// Resolver for temporal expressions, relative to a supplied calendar date.
pub struct DateResolver;

impl DateResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the date referenced by `text`, relative to `today`.
    ///
    /// Offsets are computed against the supplied date on every call, so a
    /// long-lived resolver stays correct across midnight rollovers.
    pub fn resolve(&self, text: &str, today: NaiveDate) -> NaiveDate {
        let lowered = text.to_lowercase();

        for (phrase, offset) in RELATIVE_KEYWORDS {
            if lowered.contains(phrase) {
                return today + Duration::days(*offset);
            }
        }

        for (phrase, weekday) in WEEKDAYS {
            if lowered.contains(phrase) {
                return today + Duration::days(last_weekday_offset(today, *weekday));
            }
        }

        if let Some(caps) = DAYS_AGO.captures(&lowered) {
            if let Ok(days) = caps[1].parse::<i64>() {
                return today - Duration::days(days);
            }
        }

        if lowered.contains("last week") {
            return today - Duration::days(7);
        }

        // Fixed approximation; "earlier this week" contains the bare phrase.
        if lowered.contains("this week") {
            return today - Duration::days(2);
        }

        today
    }
}

impl Default for DateResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Days back (always negative) to the most recent prior occurrence of
/// `weekday`; a weekday equal to today's resolves to a full week back,
/// never zero.
fn last_weekday_offset(today: NaiveDate, weekday: Weekday) -> i64 {
    let ahead =
        weekday.num_days_from_monday() as i64 - today.weekday().num_days_from_monday() as i64;
    if ahead >= 0 { ahead - 7 } else { ahead }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str, today: NaiveDate) -> NaiveDate {
        DateResolver::new().resolve(text, today)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // 2024-05-15 is a Wednesday.
    const WED: (i32, u32, u32) = (2024, 5, 15);

    fn wednesday() -> NaiveDate {
        day(WED.0, WED.1, WED.2)
    }

    #[test]
    fn plain_keywords() {
        assert_eq!(resolve("bought lunch today", wednesday()), wednesday());
        assert_eq!(resolve("pizza yesterday", wednesday()), day(2024, 5, 14));
    }

    #[test]
    fn last_weekday_before_today() {
        assert_eq!(resolve("cinema last monday", wednesday()), day(2024, 5, 13));
        assert_eq!(resolve("cinema last tuesday", wednesday()), day(2024, 5, 14));
    }

    #[test]
    fn last_weekday_after_today_wraps_back() {
        assert_eq!(resolve("cinema last friday", wednesday()), day(2024, 5, 10));
        assert_eq!(resolve("cinema last sunday", wednesday()), day(2024, 5, 12));
    }

    #[test]
    fn same_weekday_is_a_full_week_back() {
        assert_eq!(
            resolve("cinema last wednesday", wednesday()),
            day(2024, 5, 8)
        );
    }

    #[test]
    fn days_ago() {
        assert_eq!(resolve("uber 3 days ago", wednesday()), day(2024, 5, 12));
        assert_eq!(resolve("1 day ago", wednesday()), day(2024, 5, 14));
        assert_eq!(resolve("10 days ago", wednesday()), day(2024, 5, 5));
    }

    #[test]
    fn week_phrases() {
        assert_eq!(resolve("groceries last week", wednesday()), day(2024, 5, 8));
        assert_eq!(resolve("groceries this week", wednesday()), day(2024, 5, 13));
        assert_eq!(
            resolve("earlier this week", wednesday()),
            day(2024, 5, 13)
        );
    }

    #[test]
    fn keyword_outranks_days_ago() {
        assert_eq!(
            resolve("yesterday, not 3 days ago", wednesday()),
            day(2024, 5, 14)
        );
    }

    #[test]
    fn no_temporal_cue_defaults_to_today() {
        assert_eq!(resolve("pizza with friends", wednesday()), wednesday());
        assert_eq!(resolve("", wednesday()), wednesday());
    }

    #[test]
    fn offsets_follow_the_supplied_date() {
        // The same resolver serves different "today"s without staleness.
        let resolver = DateResolver::new();
        let thursday = day(2024, 5, 16);
        assert_eq!(
            resolver.resolve("lunch last wednesday", wednesday()),
            day(2024, 5, 8)
        );
        assert_eq!(
            resolver.resolve("lunch last wednesday", thursday),
            day(2024, 5, 15)
        );
    }
}
