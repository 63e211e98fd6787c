//! Business-day counting over inclusive date ranges.

use crate::core::holidays::builtin_dates;
use crate::core::portfolio::Country;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Parses a `YYYY-MM-DD` string; empty or malformed input is `None`.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Counts the business days from `start` through `end` inclusive.
///
/// A day counts when it is neither a Saturday nor a Sunday, is not in the
/// country's built-in holiday list, and is not in `extra`. Returns 0 when
/// either bound is empty or unparseable, or when `start > end`.
///
/// `extra` is the caller-resolved extra-holiday list; by convention it is
/// resolved for the current evaluation year and applied to every date in the
/// range, even across year boundaries (carried-over behavior from the
/// original planner).
///
/// Pure and read-only; safe to call repeatedly.
pub fn count_business_days(start: &str, end: &str, country: Country, extra: &[NaiveDate]) -> u32 {
    let (Some(start), Some(end)) = (parse_date(start), parse_date(end)) else {
        return 0;
    };

    let holidays: HashSet<NaiveDate> = builtin_dates(country).into_iter().collect();
    let extra: HashSet<NaiveDate> = extra.iter().copied().collect();

    let mut count = 0;
    let mut day = start;
    while day <= end {
        if !is_weekend(day) && !holidays.contains(&day) && !extra.contains(&day) {
            count += 1;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn clean_week_counts_five() {
        // 2025-06-09 .. 2025-06-13 is Mon..Fri with no US holidays
        assert_eq!(
            count_business_days("2025-06-09", "2025-06-13", Country::US, &[]),
            5
        );
    }

    #[test]
    fn builtin_holiday_is_skipped() {
        // 2025-06-19 (Thu) is a built-in US holiday
        assert_eq!(
            count_business_days("2025-06-19", "2025-06-19", Country::US, &[]),
            0
        );
        assert_eq!(
            count_business_days("2025-06-16", "2025-06-20", Country::US, &[]),
            4
        );
    }

    #[test]
    fn holiday_lists_are_per_country() {
        // 2025-05-05 (Mon) is a KR holiday but a regular US business day
        assert_eq!(
            count_business_days("2025-05-05", "2025-05-05", Country::KR, &[]),
            0
        );
        assert_eq!(
            count_business_days("2025-05-05", "2025-05-05", Country::US, &[]),
            1
        );
    }

    #[test]
    fn weekend_only_range_is_zero() {
        // 2025-06-14 .. 2025-06-15 is Sat..Sun
        assert_eq!(
            count_business_days("2025-06-14", "2025-06-15", Country::US, &[]),
            0
        );
    }

    #[test]
    fn inverted_range_is_zero() {
        assert_eq!(
            count_business_days("2025-06-13", "2025-06-09", Country::US, &[]),
            0
        );
    }

    #[test]
    fn malformed_or_missing_bounds_are_zero() {
        assert_eq!(count_business_days("", "2025-06-13", Country::US, &[]), 0);
        assert_eq!(count_business_days("2025-06-09", "", Country::US, &[]), 0);
        assert_eq!(
            count_business_days("not-a-date", "2025-06-13", Country::US, &[]),
            0
        );
        assert_eq!(count_business_days("", "", Country::KR, &[]), 0);
    }

    #[test]
    fn extra_holidays_remove_days() {
        let extra = vec![date("2025-06-11")];
        assert_eq!(
            count_business_days("2025-06-09", "2025-06-13", Country::US, &extra),
            4
        );
    }

    #[test]
    fn range_spanning_weekend() {
        // 2025-06-12 (Thu) .. 2025-06-17 (Tue): Thu, Fri, Mon, Tue
        assert_eq!(
            count_business_days("2025-06-12", "2025-06-17", Country::US, &[]),
            4
        );
    }
}
