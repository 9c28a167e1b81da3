//! The chart of accounts and account classification.

use serde::{Deserialize, Serialize};

/// Cash on hand.
pub const ACCOUNT_CASH: &str = "1111";
/// Bank deposits.
pub const ACCOUNT_BANK: &str = "1121";
/// Service revenue (maintenance fees, utilities billed through invoices).
pub const ACCOUNT_REVENUE_SERVICE: &str = "5112";
/// Amenity booking revenue. Pseudo-account used when blending booking
/// income into the income statement; no ledger lines are posted to it.
pub const ACCOUNT_REVENUE_AMENITY: &str = "5200";
/// General operating expenses.
pub const ACCOUNT_EXPENSE_GENERAL: &str = "6211";
/// Repair and maintenance expenses.
pub const ACCOUNT_EXPENSE_REPAIR: &str = "6271";

/// Account classification.
///
/// The classification drives report grouping: revenue accounts feed the
/// income statement's revenue side, expense accounts its expense side,
/// asset accounts the point-in-time balances on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountClass {
    /// Asset account (cash, bank).
    Asset,
    /// Revenue account.
    Revenue,
    /// Expense account.
    Expense,
    /// Anything else (not used by this core's reports).
    Other,
}

/// The explicit classification table.
///
/// Codes not listed here fall back to leading-digit classification, so
/// introducing a new account is a one-line addition rather than a silent
/// misclassification.
const CHART: &[(&str, &str, AccountClass)] = &[
    (ACCOUNT_CASH, "Cash on hand", AccountClass::Asset),
    (ACCOUNT_BANK, "Bank deposits", AccountClass::Asset),
    (ACCOUNT_REVENUE_SERVICE, "Service revenue", AccountClass::Revenue),
    (ACCOUNT_REVENUE_AMENITY, "Amenity booking revenue", AccountClass::Revenue),
    (ACCOUNT_EXPENSE_GENERAL, "General expenses", AccountClass::Expense),
    (ACCOUNT_EXPENSE_REPAIR, "Repair expenses", AccountClass::Expense),
    ("6421", "Repair expenses", AccountClass::Expense),
    ("6422", "Labor expenses", AccountClass::Expense),
];

/// Classifies an account code.
///
/// Looks the code up in the explicit chart first; unknown codes are
/// classified by leading digit (`1` asset, `5` revenue, `6` expense).
#[must_use]
pub fn classify(account_code: &str) -> AccountClass {
    if let Some((_, _, class)) = CHART.iter().find(|(code, _, _)| *code == account_code) {
        return *class;
    }

    match account_code.chars().next() {
        Some('1') => AccountClass::Asset,
        Some('5') => AccountClass::Revenue,
        Some('6') => AccountClass::Expense,
        _ => AccountClass::Other,
    }
}

/// Returns the human-readable name for an account code.
///
/// Unknown codes get a generic "Account NNNN" label so reports never
/// fail on an unmapped code.
#[must_use]
pub fn account_name(account_code: &str) -> String {
    CHART
        .iter()
        .find(|(code, _, _)| *code == account_code)
        .map_or_else(
            || format!("Account {account_code}"),
            |(_, name, _)| (*name).to_string(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_known_codes() {
        assert_eq!(classify(ACCOUNT_CASH), AccountClass::Asset);
        assert_eq!(classify(ACCOUNT_BANK), AccountClass::Asset);
        assert_eq!(classify(ACCOUNT_REVENUE_SERVICE), AccountClass::Revenue);
        assert_eq!(classify(ACCOUNT_EXPENSE_GENERAL), AccountClass::Expense);
        assert_eq!(classify(ACCOUNT_EXPENSE_REPAIR), AccountClass::Expense);
    }

    #[test]
    fn test_classify_falls_back_to_prefix() {
        assert_eq!(classify("1388"), AccountClass::Asset);
        assert_eq!(classify("5118"), AccountClass::Revenue);
        assert_eq!(classify("6278"), AccountClass::Expense);
        assert_eq!(classify("3311"), AccountClass::Other);
        assert_eq!(classify(""), AccountClass::Other);
    }

    #[test]
    fn test_account_name_known() {
        assert_eq!(account_name(ACCOUNT_CASH), "Cash on hand");
        assert_eq!(account_name(ACCOUNT_REVENUE_SERVICE), "Service revenue");
    }

    #[test]
    fn test_account_name_unknown_gets_generic_label() {
        assert_eq!(account_name("9999"), "Account 9999");
    }
}
