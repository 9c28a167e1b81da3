//! Income statement aggregation.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::accounts::{ACCOUNT_REVENUE_AMENITY, AccountClass, account_name, classify};

use super::types::{IncomeStatement, IncomeStatementItem, PostedLine};

/// Builds an income statement from posted lines in a date range.
///
/// Lines are grouped by account code. Revenue accounts contribute their
/// net credit, expense accounts their net debit, both as absolute
/// values. Accounts that net to zero are dropped. `amenity_revenue`
/// is blended in as a synthetic revenue item on the amenity account,
/// since bookings are collected outside the ledger.
///
/// Items are sorted largest first; equal amounts stay in account-code
/// order.
#[must_use]
pub fn build_income_statement(
    from_date: NaiveDate,
    to_date: NaiveDate,
    lines: &[PostedLine],
    amenity_revenue: Decimal,
) -> IncomeStatement {
    let mut totals: BTreeMap<&str, (Decimal, Decimal)> = BTreeMap::new();
    for line in lines {
        let entry = totals.entry(&line.account_code).or_default();
        entry.0 += line.debit_amount;
        entry.1 += line.credit_amount;
    }

    let mut revenue = Vec::new();
    let mut expenses = Vec::new();
    for (code, (debit, credit)) in &totals {
        match classify(code) {
            AccountClass::Revenue => {
                let amount = (*credit - *debit).abs();
                if amount > Decimal::ZERO {
                    revenue.push(item(code, amount));
                }
            }
            AccountClass::Expense => {
                let amount = (*debit - *credit).abs();
                if amount > Decimal::ZERO {
                    expenses.push(item(code, amount));
                }
            }
            AccountClass::Asset | AccountClass::Other => {}
        }
    }

    if amenity_revenue > Decimal::ZERO {
        revenue.push(item(ACCOUNT_REVENUE_AMENITY, amenity_revenue));
    }

    revenue.sort_by(|a, b| b.amount.cmp(&a.amount));
    expenses.sort_by(|a, b| b.amount.cmp(&a.amount));

    let total_revenue: Decimal = revenue.iter().map(|i| i.amount).sum();
    let total_expense: Decimal = expenses.iter().map(|i| i.amount).sum();

    IncomeStatement {
        from_date,
        to_date,
        revenue,
        expenses,
        total_revenue,
        total_expense,
        net_income: total_revenue - total_expense,
    }
}

fn item(account_code: &str, amount: Decimal) -> IncomeStatementItem {
    IncomeStatementItem {
        account_code: account_code.to_string(),
        account_name: account_name(account_code),
        amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn line(code: &str, debit: Decimal, credit: Decimal) -> PostedLine {
        PostedLine {
            account_code: code.to_string(),
            debit_amount: debit,
            credit_amount: credit,
        }
    }

    fn build(lines: &[PostedLine], amenity: Decimal) -> IncomeStatement {
        build_income_statement(date(2025, 1, 1), date(2025, 1, 31), lines, amenity)
    }

    #[test]
    fn test_revenue_and_expense_sides() {
        let statement = build(
            &[
                line("1111", dec!(500), Decimal::ZERO),
                line("5112", Decimal::ZERO, dec!(500)),
                line("6211", dec!(200), Decimal::ZERO),
                line("1111", Decimal::ZERO, dec!(200)),
            ],
            Decimal::ZERO,
        );

        assert_eq!(statement.revenue.len(), 1);
        assert_eq!(statement.revenue[0].account_code, "5112");
        assert_eq!(statement.revenue[0].amount, dec!(500));
        assert_eq!(statement.expenses.len(), 1);
        assert_eq!(statement.expenses[0].account_code, "6211");
        assert_eq!(statement.expenses[0].amount, dec!(200));
        assert_eq!(statement.total_revenue, dec!(500));
        assert_eq!(statement.total_expense, dec!(200));
        assert_eq!(statement.net_income, dec!(300));
    }

    #[test]
    fn test_net_income_can_be_negative() {
        let statement = build(&[line("6271", dec!(900), Decimal::ZERO)], Decimal::ZERO);
        assert_eq!(statement.net_income, dec!(-900));
    }

    #[test]
    fn test_accounts_netting_to_zero_are_dropped() {
        let statement = build(
            &[
                line("5112", Decimal::ZERO, dec!(100)),
                line("5112", dec!(100), Decimal::ZERO),
            ],
            Decimal::ZERO,
        );
        assert!(statement.revenue.is_empty());
        assert_eq!(statement.total_revenue, Decimal::ZERO);
    }

    #[test]
    fn test_items_sorted_largest_first() {
        let statement = build(
            &[
                line("6211", dec!(100), Decimal::ZERO),
                line("6271", dec!(300), Decimal::ZERO),
                line("6421", dec!(200), Decimal::ZERO),
            ],
            Decimal::ZERO,
        );
        let codes: Vec<&str> = statement.expenses.iter().map(|i| i.account_code.as_str()).collect();
        assert_eq!(codes, vec!["6271", "6421", "6211"]);
    }

    #[test]
    fn test_amenity_revenue_blended_and_sorted() {
        let statement = build(
            &[line("5112", Decimal::ZERO, dec!(100))],
            dec!(250),
        );
        let codes: Vec<&str> = statement.revenue.iter().map(|i| i.account_code.as_str()).collect();
        assert_eq!(codes, vec!["5200", "5112"]);
        assert_eq!(statement.revenue[0].account_name, "Amenity booking revenue");
        assert_eq!(statement.total_revenue, dec!(350));
    }

    #[test]
    fn test_zero_amenity_revenue_adds_no_item() {
        let statement = build(&[line("5112", Decimal::ZERO, dec!(100))], Decimal::ZERO);
        assert_eq!(statement.revenue.len(), 1);
    }

    #[test]
    fn test_empty_range_is_all_zero() {
        let statement = build(&[], Decimal::ZERO);
        assert!(statement.revenue.is_empty());
        assert!(statement.expenses.is_empty());
        assert_eq!(statement.net_income, Decimal::ZERO);
    }

    #[test]
    fn test_contra_postings_use_absolute_net() {
        // A refund posted as a debit against revenue shrinks the item
        // rather than flipping its sign.
        let statement = build(
            &[
                line("5112", Decimal::ZERO, dec!(500)),
                line("5112", dec!(120), Decimal::ZERO),
            ],
            Decimal::ZERO,
        );
        assert_eq!(statement.revenue[0].amount, dec!(380));
    }
}
