//! Journal entry construction and validation.
//!
//! This module implements the double-entry core:
//! - Domain types for entries, lines, and triggering payment events
//! - The entry builder turning receipts and vouchers into balanced drafts
//! - Balance and line-level invariant validation
//! - Error types for journal operations

pub mod builder;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod builder_props;

pub use builder::EntryBuilder;
pub use error::JournalError;
pub use types::{
    DraftEntry, DraftLine, EntryStatus, EntryType, LedgerOutcome, ReceiptEvent, ReferenceType,
    VoucherEvent, VoucherItem,
};
pub use validation::validate_entry;
