//! Journal domain errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building or validating a journal entry.
///
/// All variants are detected before any write happens, so a failed
/// build or validation never leaves partial state behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JournalError {
    #[error("no ledger account mapped for payment method '{method_code}'")]
    PaymentMethodUnmapped { method_code: String },

    #[error("voucher '{voucher_number}' has no line items")]
    EmptyVoucher { voucher_number: String },

    #[error("voucher item total {items_total} does not match voucher total {voucher_total}")]
    ItemTotalMismatch {
        items_total: Decimal,
        voucher_total: Decimal,
    },

    #[error("journal entry has no lines")]
    NoLines,

    #[error("line {line_number} must carry exactly one of debit or credit")]
    LineNotExclusive { line_number: i32 },

    #[error("line {line_number} carries a negative amount")]
    NegativeAmount { line_number: i32 },

    #[error("line numbers are not strictly increasing at line {line_number}")]
    LineNumbersOutOfOrder { line_number: i32 },

    #[error("entry is unbalanced: debits {debits} != credits {credits}")]
    Unbalanced { debits: Decimal, credits: Decimal },
}

impl JournalError {
    /// Stable machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::PaymentMethodUnmapped { .. } => "PAYMENT_METHOD_UNMAPPED",
            Self::EmptyVoucher { .. } => "EMPTY_VOUCHER",
            Self::ItemTotalMismatch { .. } => "ITEM_TOTAL_MISMATCH",
            Self::NoLines => "NO_LINES",
            Self::LineNotExclusive { .. } => "LINE_NOT_EXCLUSIVE",
            Self::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            Self::LineNumbersOutOfOrder { .. } => "LINE_NUMBERS_OUT_OF_ORDER",
            Self::Unbalanced { .. } => "UNBALANCED",
        }
    }
}
