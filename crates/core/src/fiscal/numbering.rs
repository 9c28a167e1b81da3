//! Journal entry number generation.

use chrono::{Datelike, NaiveDate};

/// Formats a journal entry number: `JE-YYYY-MM-NNNN`.
///
/// The numeric suffix is the per-period sequence, zero-padded to at
/// least four digits (a period's 10,000th entry simply widens the
/// suffix). Example: `JE-2025-01-0001`.
#[must_use]
pub fn entry_number(entry_date: NaiveDate, sequence: i64) -> String {
    format!(
        "JE-{:04}-{:02}-{:04}",
        entry_date.year(),
        entry_date.month(),
        sequence
    )
}
