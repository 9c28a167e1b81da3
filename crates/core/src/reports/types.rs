//! Report output shapes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::fiscal::{DateRange, ReportPeriod};

/// A posted journal line as fetched for report aggregation.
///
/// Only the fields the reports aggregate over; lines from draft entries
/// must never reach this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostedLine {
    /// Account the line posted to.
    pub account_code: String,
    /// Debit amount.
    pub debit_amount: Decimal,
    /// Credit amount.
    pub credit_amount: Decimal,
}

/// One account's contribution to the income statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatementItem {
    /// Account code.
    pub account_code: String,
    /// Account display name.
    pub account_name: String,
    /// Absolute net amount for the period.
    pub amount: Decimal,
}

/// Income statement over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    /// First day covered, inclusive.
    pub from_date: chrono::NaiveDate,
    /// Last day covered, inclusive.
    pub to_date: chrono::NaiveDate,
    /// Revenue items, largest first.
    pub revenue: Vec<IncomeStatementItem>,
    /// Expense items, largest first.
    pub expenses: Vec<IncomeStatementItem>,
    /// Sum of revenue items.
    pub total_revenue: Decimal,
    /// Sum of expense items.
    pub total_expense: Decimal,
    /// `total_revenue - total_expense`; negative for a loss.
    pub net_income: Decimal,
}

/// An account's share of a report total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceShare {
    /// Account code.
    pub account_code: String,
    /// Account display name.
    pub account_name: String,
    /// Amount contributed.
    pub amount: Decimal,
    /// Share of the side's total, in percent.
    pub percentage: Decimal,
}

/// The management dashboard for one reporting window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialDashboard {
    /// Window length.
    pub period: ReportPeriod,
    /// The current window's date range.
    pub range: DateRange,
    /// Total revenue in the window.
    pub total_revenue: Decimal,
    /// Total expenses in the window.
    pub total_expense: Decimal,
    /// Revenue minus expenses.
    pub net_income: Decimal,
    /// Revenue change vs the previous window, in percent (2 decimals).
    pub revenue_growth: Decimal,
    /// Expense change vs the previous window, in percent (2 decimals).
    pub expense_growth: Decimal,
    /// Net income change vs the previous window, in percent (2 decimals).
    pub profit_growth: Decimal,
    /// Cash on hand as of the window's end date.
    pub cash_balance: Decimal,
    /// Bank deposits as of the window's end date.
    pub bank_balance: Decimal,
    /// Up to five largest revenue sources, percentages rounded.
    pub top_revenue_sources: Vec<SourceShare>,
    /// Up to five largest expense sources, percentages rounded.
    pub top_expense_sources: Vec<SourceShare>,
    /// Full revenue breakdown for charting, percentages unrounded.
    pub revenue_breakdown: Vec<SourceShare>,
}
