//! Report repository for financial report database operations.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

use strata_core::accounts::{ACCOUNT_BANK, ACCOUNT_CASH};
use strata_core::fiscal::ReportPeriod;
use strata_core::journal::EntryStatus;
use strata_core::reports::{
    FinancialDashboard, IncomeStatement, PostedLine, build_income_statement, growth,
    revenue_breakdown, top_sources,
};

use crate::entities::{amenity_bookings, journal_entries, journal_entry_lines};

/// Error types for report operations.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Invalid date range.
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidDateRange {
        /// Start date.
        start: NaiveDate,
        /// End date.
        end: NaiveDate,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ReportError> for strata_shared::AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::InvalidDateRange { .. } => Self::Validation(err.to_string()),
            ReportError::Database(inner) => Self::Database(inner.to_string()),
        }
    }
}

/// Report repository for income statements and the dashboard.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Income statement over an inclusive date range.
    ///
    /// Aggregates posted journal lines by account and blends in paid
    /// amenity bookings as a synthetic revenue item.
    pub async fn income_statement(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<IncomeStatement, ReportError> {
        if start > end {
            return Err(ReportError::InvalidDateRange { start, end });
        }

        let lines = self.posted_lines(start, end).await?;
        let amenity_revenue = self.amenity_revenue(start, end).await?;
        Ok(build_income_statement(start, end, &lines, amenity_revenue))
    }

    /// Net balance of an account (debits minus credits) across all
    /// posted entries dated up to and including `as_of`.
    pub async fn account_balance(
        &self,
        account_code: &str,
        as_of: NaiveDate,
    ) -> Result<Decimal, ReportError> {
        let totals: Option<(Option<Decimal>, Option<Decimal>)> = journal_entry_lines::Entity::find()
            .inner_join(journal_entries::Entity)
            .select_only()
            .column_as(journal_entry_lines::Column::DebitAmount.sum(), "debit_total")
            .column_as(journal_entry_lines::Column::CreditAmount.sum(), "credit_total")
            .filter(journal_entry_lines::Column::AccountCode.eq(account_code))
            .filter(journal_entries::Column::Status.eq(EntryStatus::Posted.as_str()))
            .filter(journal_entries::Column::EntryDate.lte(as_of))
            .into_tuple()
            .one(&self.db)
            .await?;

        let (debit, credit) = totals.unwrap_or((None, None));
        Ok(debit.unwrap_or(Decimal::ZERO) - credit.unwrap_or(Decimal::ZERO))
    }

    /// The management dashboard for the window containing `today`.
    ///
    /// Compares the current window against the immediately preceding
    /// one for growth, and reports cash and bank balances as of the
    /// window's end date.
    pub async fn financial_dashboard(
        &self,
        period: ReportPeriod,
        today: NaiveDate,
    ) -> Result<FinancialDashboard, ReportError> {
        let current = period.current_range(today);
        let previous = period.previous_range(today);

        let current_statement = self.income_statement(current.from, current.to).await?;
        let previous_statement = self.income_statement(previous.from, previous.to).await?;

        let cash_balance = self.account_balance(ACCOUNT_CASH, current.to).await?;
        let bank_balance = self.account_balance(ACCOUNT_BANK, current.to).await?;

        Ok(FinancialDashboard {
            period,
            range: current,
            total_revenue: current_statement.total_revenue,
            total_expense: current_statement.total_expense,
            net_income: current_statement.net_income,
            revenue_growth: growth(
                previous_statement.total_revenue,
                current_statement.total_revenue,
            ),
            expense_growth: growth(
                previous_statement.total_expense,
                current_statement.total_expense,
            ),
            profit_growth: growth(
                previous_statement.net_income,
                current_statement.net_income,
            ),
            cash_balance,
            bank_balance,
            top_revenue_sources: top_sources(
                &current_statement.revenue,
                current_statement.total_revenue,
            ),
            top_expense_sources: top_sources(
                &current_statement.expenses,
                current_statement.total_expense,
            ),
            revenue_breakdown: revenue_breakdown(
                &current_statement.revenue,
                current_statement.total_revenue,
            ),
        })
    }

    /// Fetches posted lines dated within the inclusive range.
    async fn posted_lines(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PostedLine>, ReportError> {
        let models = journal_entry_lines::Entity::find()
            .inner_join(journal_entries::Entity)
            .filter(journal_entries::Column::Status.eq(EntryStatus::Posted.as_str()))
            .filter(journal_entries::Column::EntryDate.between(start, end))
            .all(&self.db)
            .await?;

        Ok(models
            .into_iter()
            .map(|m| PostedLine {
                account_code: m.account_code,
                debit_amount: m.debit_amount,
                credit_amount: m.credit_amount,
            })
            .collect())
    }

    /// Total price of paid, non-cancelled amenity bookings starting in
    /// the inclusive range.
    async fn amenity_revenue(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Decimal, ReportError> {
        let total: Option<Option<Decimal>> = amenity_bookings::Entity::find()
            .select_only()
            .column_as(amenity_bookings::Column::TotalPrice.sum(), "total")
            .filter(amenity_bookings::Column::PaymentStatus.eq("PAID"))
            .filter(amenity_bookings::Column::Status.is_in(["CONFIRMED", "COMPLETED"]))
            .filter(amenity_bookings::Column::IsDeleted.eq(false))
            .filter(amenity_bookings::Column::StartDate.between(start, end))
            .into_tuple()
            .one(&self.db)
            .await?;

        Ok(total.flatten().unwrap_or(Decimal::ZERO))
    }
}
