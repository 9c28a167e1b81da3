//! Financial report computation.
//!
//! These functions are pure: the storage layer fetches posted lines and
//! balances, and the report shapes are computed here so they can be
//! tested without a database.

pub mod dashboard;
pub mod income;
pub mod types;

pub use dashboard::{growth, revenue_breakdown, top_sources};
pub use income::build_income_statement;
pub use types::{
    FinancialDashboard, IncomeStatement, IncomeStatementItem, PostedLine, SourceShare,
};
