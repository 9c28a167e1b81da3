//! Double-entry invariant checks.

use rust_decimal::Decimal;

use super::error::JournalError;
use super::types::DraftEntry;

/// Validates a draft entry against the double-entry invariants.
///
/// Checks, in order: the entry has lines, line numbers strictly
/// increase, every line carries exactly one non-negative side, and
/// total debits equal total credits. Equality plus the exclusive-side
/// rule guarantees the shared total is positive.
pub fn validate_entry(entry: &DraftEntry) -> Result<(), JournalError> {
    if entry.lines.is_empty() {
        return Err(JournalError::NoLines);
    }

    let mut previous_number = 0;
    for line in &entry.lines {
        if line.line_number <= previous_number {
            return Err(JournalError::LineNumbersOutOfOrder {
                line_number: line.line_number,
            });
        }
        previous_number = line.line_number;

        if line.debit_amount < Decimal::ZERO || line.credit_amount < Decimal::ZERO {
            return Err(JournalError::NegativeAmount {
                line_number: line.line_number,
            });
        }

        let has_debit = line.debit_amount > Decimal::ZERO;
        let has_credit = line.credit_amount > Decimal::ZERO;
        if has_debit == has_credit {
            return Err(JournalError::LineNotExclusive {
                line_number: line.line_number,
            });
        }
    }

    let debits = entry.total_debit();
    let credits = entry.total_credit();
    if debits != credits {
        return Err(JournalError::Unbalanced { debits, credits });
    }

    Ok(())
}
