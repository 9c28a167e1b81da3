//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod journal;
pub mod report;

pub use journal::{
    GeneralJournalEntry, JournalFilter, JournalRepository, JournalSort, PostedEntry, PostingError,
};
pub use report::{ReportError, ReportRepository};
