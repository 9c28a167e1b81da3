//! Fiscal periods, entry numbering, and report period windows.

pub mod numbering;
pub mod period;

pub use numbering::entry_number;
pub use period::{DateRange, ReportPeriod, fiscal_period};
