//! Dashboard growth and revenue-mix computations.

use rust_decimal::Decimal;

use super::types::{IncomeStatementItem, SourceShare};

/// Number of sources shown on each of the dashboard's top panels.
pub const TOP_SOURCES_LIMIT: usize = 5;

/// Percent change from `previous` to `current`, rounded to 2 decimals.
///
/// A zero baseline reports 100% when anything grew from nothing and 0%
/// when both windows are empty, keeping the dashboard free of division
/// blowups. The denominator is `|previous|` so a negative baseline
/// (a loss-making period) still yields a signed change in the right
/// direction.
#[must_use]
pub fn growth(previous: Decimal, current: Decimal) -> Decimal {
    if previous == Decimal::ZERO {
        if current > Decimal::ZERO {
            return Decimal::ONE_HUNDRED;
        }
        return Decimal::ZERO;
    }
    ((current - previous) / previous.abs() * Decimal::ONE_HUNDRED).round_dp(2)
}

/// The largest sources of one income-statement side with their rounded
/// share of that side's total.
///
/// Expects `items` already sorted largest first, as the income
/// statement produces them.
#[must_use]
pub fn top_sources(items: &[IncomeStatementItem], total: Decimal) -> Vec<SourceShare> {
    items
        .iter()
        .take(TOP_SOURCES_LIMIT)
        .map(|item| SourceShare {
            account_code: item.account_code.clone(),
            account_name: item.account_name.clone(),
            amount: item.amount,
            percentage: share(item.amount, total).round_dp(2),
        })
        .collect()
}

/// The full revenue mix for charting, with exact (unrounded) shares.
#[must_use]
pub fn revenue_breakdown(revenue: &[IncomeStatementItem], total: Decimal) -> Vec<SourceShare> {
    revenue
        .iter()
        .map(|item| SourceShare {
            account_code: item.account_code.clone(),
            account_name: item.account_name.clone(),
            amount: item.amount,
            percentage: share(item.amount, total),
        })
        .collect()
}

fn share(amount: Decimal, total: Decimal) -> Decimal {
    if total == Decimal::ZERO {
        return Decimal::ZERO;
    }
    amount / total * Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(100), dec!(150), dec!(50))]
    #[case(dec!(100), dec!(50), dec!(-50))]
    #[case(dec!(100), dec!(100), dec!(0))]
    #[case(dec!(0), dec!(100), dec!(100))]
    #[case(dec!(0), dec!(0), dec!(0))]
    fn test_growth(#[case] previous: Decimal, #[case] current: Decimal, #[case] expected: Decimal) {
        assert_eq!(growth(previous, current), expected);
    }

    #[rstest]
    #[case(dec!(-100), dec!(-50), dec!(50))]
    #[case(dec!(-100), dec!(50), dec!(150))]
    #[case(dec!(-100), dec!(-200), dec!(-100))]
    fn test_growth_from_a_loss_baseline(
        #[case] previous: Decimal,
        #[case] current: Decimal,
        #[case] expected: Decimal,
    ) {
        // Net profit can be negative; a shrinking loss is positive growth.
        assert_eq!(growth(previous, current), expected);
    }

    #[test]
    fn test_growth_rounds_to_two_decimals() {
        assert_eq!(growth(dec!(300), dec!(100)), dec!(-66.67));
        assert_eq!(growth(dec!(3), dec!(1)), dec!(-66.67));
    }

    fn item(code: &str, amount: Decimal) -> IncomeStatementItem {
        IncomeStatementItem {
            account_code: code.to_string(),
            account_name: format!("Account {code}"),
            amount,
        }
    }

    #[test]
    fn test_top_sources_limited_to_five() {
        let revenue: Vec<IncomeStatementItem> = (1..=7)
            .map(|i| item(&format!("51{i:02}"), Decimal::from(800 - i)))
            .collect();
        let top = top_sources(&revenue, dec!(1000));
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].account_code, "5101");
    }

    #[test]
    fn test_top_source_percentages_are_rounded() {
        let revenue = vec![item("5112", dec!(1)), item("5200", dec!(2))];
        let top = top_sources(&revenue, dec!(3));
        assert_eq!(top[0].percentage, dec!(33.33));
        assert_eq!(top[1].percentage, dec!(66.67));
    }

    #[test]
    fn test_breakdown_keeps_exact_shares() {
        let revenue = vec![item("5112", dec!(1)), item("5200", dec!(2))];
        let breakdown = revenue_breakdown(&revenue, dec!(3));
        assert_eq!(breakdown.len(), 2);
        assert_ne!(breakdown[0].percentage, dec!(33.33));
        let sum: Decimal = breakdown.iter().map(|s| s.percentage).sum();
        assert!((sum - Decimal::ONE_HUNDRED).abs() < dec!(0.0001));
    }

    #[test]
    fn test_zero_total_gives_zero_shares() {
        let revenue = vec![item("5112", dec!(0))];
        let top = top_sources(&revenue, Decimal::ZERO);
        assert_eq!(top[0].percentage, Decimal::ZERO);
    }
}
