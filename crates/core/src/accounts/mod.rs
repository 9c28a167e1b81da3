//! Chart of accounts and account classification.
//!
//! This module provides:
//! - The fixed chart of accounts the building's books post to
//! - Account classification (asset/revenue/expense)
//! - Policy tables mapping payment methods and expense categories
//!   to account codes

pub mod chart;
pub mod policy;

pub use chart::{
    ACCOUNT_BANK, ACCOUNT_CASH, ACCOUNT_EXPENSE_GENERAL, ACCOUNT_EXPENSE_REPAIR,
    ACCOUNT_REVENUE_AMENITY, ACCOUNT_REVENUE_SERVICE, AccountClass, account_name, classify,
};
pub use policy::{ExpenseCategory, PaymentAccountPolicy};
