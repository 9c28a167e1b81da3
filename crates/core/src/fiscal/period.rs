//! Fiscal period derivation and dashboard report windows.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Derives the fiscal period key ("YYYY-MM") from an entry date.
///
/// Pure and total: every date belongs to exactly one period, and the
/// period changes exactly at calendar month boundaries.
#[must_use]
pub fn fiscal_period(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// An inclusive calendar date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// First day of the range.
    pub from: NaiveDate,
    /// Last day of the range.
    pub to: NaiveDate,
}

impl DateRange {
    /// Returns true if the given date falls within this range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// Dashboard reporting window.
///
/// Quarters are fixed three-month blocks (Q1 = Jan-Mar), not rolling
/// 90-day windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
    /// Calendar month containing the anchor date.
    Month,
    /// Calendar quarter containing the anchor date.
    Quarter,
    /// Calendar year containing the anchor date.
    Year,
}

impl ReportPeriod {
    /// Parses a period keyword, falling back to `Month` for anything
    /// unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "quarter" => Self::Quarter,
            "year" => Self::Year,
            _ => Self::Month,
        }
    }

    /// Returns the period keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    /// The current window containing `today`.
    #[must_use]
    pub fn current_range(self, today: NaiveDate) -> DateRange {
        match self {
            Self::Month => month_range(today.year(), today.month(), 1),
            Self::Quarter => {
                let quarter_start = (today.month() - 1) / 3 * 3 + 1;
                month_range(today.year(), quarter_start, 3)
            }
            Self::Year => DateRange {
                from: ymd(today.year(), 1, 1),
                to: ymd(today.year(), 12, 31),
            },
        }
    }

    /// The immediately preceding window of the same length.
    #[must_use]
    pub fn previous_range(self, today: NaiveDate) -> DateRange {
        match self {
            Self::Month => {
                let (year, month) = shift_month(today.year(), today.month(), -1);
                month_range(year, month, 1)
            }
            Self::Quarter => {
                let quarter_start = (today.month() - 1) / 3 * 3 + 1;
                let (year, month) = shift_month(today.year(), quarter_start, -3);
                month_range(year, month, 3)
            }
            Self::Year => DateRange {
                from: ymd(today.year() - 1, 1, 1),
                to: ymd(today.year() - 1, 12, 31),
            },
        }
    }
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("calendar date within chrono's range")
}

/// Shifts a (year, month) pair by a number of months.
fn shift_month(year: i32, month: u32, delta: i32) -> (i32, u32) {
    let total = year * 12 + i32::try_from(month).unwrap_or(1) - 1 + delta;
    (total.div_euclid(12), u32::try_from(total.rem_euclid(12)).unwrap_or(0) + 1)
}

/// Inclusive range spanning `months` calendar months starting at the
/// first day of (year, month).
fn month_range(year: i32, month: u32, months: i32) -> DateRange {
    let from = ymd(year, month, 1);
    let (end_year, end_month) = shift_month(year, month, months);
    let to = ymd(end_year, end_month, 1) - Duration::days(1);
    DateRange { from, to }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_fiscal_period_format() {
        assert_eq!(fiscal_period(date(2025, 1, 15)), "2025-01");
        assert_eq!(fiscal_period(date(2025, 11, 1)), "2025-11");
    }

    #[test]
    fn test_fiscal_period_stable_within_month() {
        assert_eq!(
            fiscal_period(date(2025, 1, 1)),
            fiscal_period(date(2025, 1, 31))
        );
    }

    #[test]
    fn test_fiscal_period_changes_at_month_boundary() {
        assert_ne!(
            fiscal_period(date(2025, 1, 31)),
            fiscal_period(date(2025, 2, 1))
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(ReportPeriod::parse("month"), ReportPeriod::Month);
        assert_eq!(ReportPeriod::parse("QUARTER"), ReportPeriod::Quarter);
        assert_eq!(ReportPeriod::parse("Year"), ReportPeriod::Year);
        // Unknown keywords fall back to month, matching the query surface.
        assert_eq!(ReportPeriod::parse("fortnight"), ReportPeriod::Month);
    }

    #[test]
    fn test_month_range() {
        let range = ReportPeriod::Month.current_range(date(2025, 2, 14));
        assert_eq!(range.from, date(2025, 2, 1));
        assert_eq!(range.to, date(2025, 2, 28));
    }

    #[test]
    fn test_month_range_leap_february() {
        let range = ReportPeriod::Month.current_range(date(2024, 2, 14));
        assert_eq!(range.to, date(2024, 2, 29));
    }

    #[test]
    fn test_previous_month_crosses_year_boundary() {
        let range = ReportPeriod::Month.previous_range(date(2025, 1, 10));
        assert_eq!(range.from, date(2024, 12, 1));
        assert_eq!(range.to, date(2024, 12, 31));
    }

    #[rstest]
    #[case(date(2025, 1, 1), date(2025, 1, 1), date(2025, 3, 31))]
    #[case(date(2025, 3, 31), date(2025, 1, 1), date(2025, 3, 31))]
    #[case(date(2025, 5, 20), date(2025, 4, 1), date(2025, 6, 30))]
    #[case(date(2025, 12, 31), date(2025, 10, 1), date(2025, 12, 31))]
    fn test_quarter_blocks_are_fixed(
        #[case] today: NaiveDate,
        #[case] from: NaiveDate,
        #[case] to: NaiveDate,
    ) {
        let range = ReportPeriod::Quarter.current_range(today);
        assert_eq!(range.from, from);
        assert_eq!(range.to, to);
    }

    #[test]
    fn test_previous_quarter_crosses_year_boundary() {
        let range = ReportPeriod::Quarter.previous_range(date(2025, 2, 10));
        assert_eq!(range.from, date(2024, 10, 1));
        assert_eq!(range.to, date(2024, 12, 31));
    }

    #[test]
    fn test_year_ranges() {
        let current = ReportPeriod::Year.current_range(date(2025, 6, 1));
        assert_eq!(current.from, date(2025, 1, 1));
        assert_eq!(current.to, date(2025, 12, 31));

        let previous = ReportPeriod::Year.previous_range(date(2025, 6, 1));
        assert_eq!(previous.from, date(2024, 1, 1));
        assert_eq!(previous.to, date(2024, 12, 31));
    }

    #[test]
    fn test_ranges_are_adjacent_without_overlap() {
        for period in [ReportPeriod::Month, ReportPeriod::Quarter, ReportPeriod::Year] {
            let today = date(2025, 7, 15);
            let previous = period.previous_range(today);
            let current = period.current_range(today);
            assert_eq!(previous.to + Duration::days(1), current.from);
        }
    }

    #[test]
    fn test_contains() {
        let range = ReportPeriod::Month.current_range(date(2025, 2, 14));
        assert!(range.contains(date(2025, 2, 1)));
        assert!(range.contains(date(2025, 2, 28)));
        assert!(!range.contains(date(2025, 3, 1)));
    }
}
