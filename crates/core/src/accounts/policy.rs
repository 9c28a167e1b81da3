//! Policy tables selecting debit/credit accounts for payment events.

use std::collections::HashMap;

use super::chart::{
    ACCOUNT_BANK, ACCOUNT_CASH, ACCOUNT_EXPENSE_GENERAL, ACCOUNT_EXPENSE_REPAIR,
};

/// Maps a payment-method code to the cash/bank account debited when a
/// receipt is posted.
///
/// Method codes are matched case-insensitively. Codes with no mapping
/// fall back to the policy's default account when one is configured.
#[derive(Debug, Clone)]
pub struct PaymentAccountPolicy {
    mappings: HashMap<String, &'static str>,
    default_account: Option<&'static str>,
}

impl Default for PaymentAccountPolicy {
    /// The standard building-management policy: cash stays in the cash
    /// account, every electronic rail lands in the bank account, and
    /// unknown methods default to cash.
    fn default() -> Self {
        let mut mappings = HashMap::new();
        mappings.insert("CASH".to_string(), ACCOUNT_CASH);
        mappings.insert("VIETQR".to_string(), ACCOUNT_BANK);
        mappings.insert("ONLINE_VIETQR".to_string(), ACCOUNT_BANK);
        mappings.insert("BANK_TRANSFER".to_string(), ACCOUNT_BANK);
        mappings.insert("MOMO".to_string(), ACCOUNT_BANK);
        mappings.insert("ZALOPAY".to_string(), ACCOUNT_BANK);

        Self {
            mappings,
            default_account: Some(ACCOUNT_CASH),
        }
    }
}

impl PaymentAccountPolicy {
    /// Creates an empty policy with no default account.
    ///
    /// Useful in tests that need unmapped methods to fail resolution.
    #[must_use]
    pub fn without_default() -> Self {
        Self {
            mappings: HashMap::new(),
            default_account: None,
        }
    }

    /// Adds or replaces a method mapping.
    pub fn insert(&mut self, method_code: &str, account_code: &'static str) {
        self.mappings
            .insert(method_code.to_uppercase(), account_code);
    }

    /// Resolves a payment-method code to an account code.
    ///
    /// Returns `None` only when the method is unmapped and no default
    /// account exists.
    #[must_use]
    pub fn resolve(&self, method_code: &str) -> Option<&'static str> {
        self.mappings
            .get(&method_code.to_uppercase())
            .copied()
            .or(self.default_account)
    }
}

/// Expense category carried by a voucher line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseCategory {
    /// General operating expense.
    #[default]
    General,
    /// Repair and maintenance.
    Repair,
}

impl ExpenseCategory {
    /// Returns the expense account debited for this category.
    #[must_use]
    pub const fn account_code(self) -> &'static str {
        match self {
            Self::General => ACCOUNT_EXPENSE_GENERAL,
            Self::Repair => ACCOUNT_EXPENSE_REPAIR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_policy_mappings() {
        let policy = PaymentAccountPolicy::default();
        assert_eq!(policy.resolve("CASH"), Some(ACCOUNT_CASH));
        assert_eq!(policy.resolve("VIETQR"), Some(ACCOUNT_BANK));
        assert_eq!(policy.resolve("ONLINE_VIETQR"), Some(ACCOUNT_BANK));
        assert_eq!(policy.resolve("BANK_TRANSFER"), Some(ACCOUNT_BANK));
        assert_eq!(policy.resolve("MOMO"), Some(ACCOUNT_BANK));
        assert_eq!(policy.resolve("ZALOPAY"), Some(ACCOUNT_BANK));
    }

    #[test]
    fn test_resolution_is_case_insensitive() {
        let policy = PaymentAccountPolicy::default();
        assert_eq!(policy.resolve("cash"), Some(ACCOUNT_CASH));
        assert_eq!(policy.resolve("Momo"), Some(ACCOUNT_BANK));
    }

    #[test]
    fn test_unknown_method_defaults_to_cash() {
        let policy = PaymentAccountPolicy::default();
        assert_eq!(policy.resolve("CRYPTO"), Some(ACCOUNT_CASH));
    }

    #[test]
    fn test_no_default_means_no_resolution() {
        let policy = PaymentAccountPolicy::without_default();
        assert_eq!(policy.resolve("CASH"), None);
    }

    #[test]
    fn test_insert_overrides() {
        let mut policy = PaymentAccountPolicy::without_default();
        policy.insert("cash", ACCOUNT_BANK);
        assert_eq!(policy.resolve("CASH"), Some(ACCOUNT_BANK));
    }

    #[test]
    fn test_expense_category_accounts() {
        assert_eq!(
            ExpenseCategory::General.account_code(),
            ACCOUNT_EXPENSE_GENERAL
        );
        assert_eq!(
            ExpenseCategory::Repair.account_code(),
            ACCOUNT_EXPENSE_REPAIR
        );
    }
}
