//! Journal entry domain types and triggering payment events.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strata_shared::types::{
    ApartmentId, EntryId, InvoiceId, LineId, ReceiptId, StaffId, UserId, VoucherId,
};
use uuid::Uuid;

use crate::accounts::ExpenseCategory;

/// Lifecycle status of a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryStatus {
    /// Not yet posted; excluded from all reports.
    Draft,
    /// Posted and immutable.
    Posted,
}

impl EntryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Posted => "POSTED",
        }
    }

    /// Parses a stored status string.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "DRAFT" => Some(Self::Draft),
            "POSTED" => Some(Self::Posted),
            _ => None,
        }
    }
}

/// Business classification of an entry.
///
/// Receipts post as `RECEIPT`; vouchers post as `PAYMENT` (the voucher
/// itself is identified by the entry's reference, not its type).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryType {
    /// Money received.
    Receipt,
    /// Money paid out.
    Payment,
}

impl EntryType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Receipt => "RECEIPT",
            Self::Payment => "PAYMENT",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "RECEIPT" => Some(Self::Receipt),
            "PAYMENT" => Some(Self::Payment),
            _ => None,
        }
    }
}

/// Kind of source document an entry references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReferenceType {
    /// A cash receipt.
    Receipt,
    /// An expense voucher.
    Voucher,
}

impl ReferenceType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Receipt => "RECEIPT",
            Self::Voucher => "VOUCHER",
        }
    }

    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "RECEIPT" => Some(Self::Receipt),
            "VOUCHER" => Some(Self::Voucher),
            _ => None,
        }
    }
}

/// A single debit-or-credit line of a draft entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftLine {
    /// Line ID.
    pub line_id: LineId,
    /// 1-based position within the entry.
    pub line_number: i32,
    /// Account the line posts to.
    pub account_code: String,
    /// Line description.
    pub description: String,
    /// Debit amount; zero when the line is a credit.
    pub debit_amount: Decimal,
    /// Credit amount; zero when the line is a debit.
    pub credit_amount: Decimal,
    /// Apartment the amount is attributed to, if any.
    pub apartment_id: Option<ApartmentId>,
}

/// A fully-built journal entry awaiting its entry number.
///
/// The entry number is assigned by the posting writer inside the same
/// transaction that persists the entry, so drafts never carry one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftEntry {
    /// Entry ID.
    pub entry_id: EntryId,
    /// Business classification.
    pub entry_type: EntryType,
    /// Date the underlying payment happened.
    pub entry_date: NaiveDate,
    /// Derived from `entry_date`, format "YYYY-MM".
    pub fiscal_period: String,
    /// Kind of source document.
    pub reference_type: ReferenceType,
    /// ID of the source document.
    pub reference_id: Uuid,
    /// Header description.
    pub description: String,
    /// Lifecycle status.
    pub status: EntryStatus,
    /// Staff who created the entry, when attributable.
    pub created_by: Option<StaffId>,
    /// Staff who posted the entry, when attributable.
    pub posted_by: Option<StaffId>,
    /// Ordered lines.
    pub lines: Vec<DraftLine>,
}

impl DraftEntry {
    /// Sum of all debit amounts.
    #[must_use]
    pub fn total_debit(&self) -> Decimal {
        self.lines.iter().map(|l| l.debit_amount).sum()
    }

    /// Sum of all credit amounts.
    #[must_use]
    pub fn total_credit(&self) -> Decimal {
        self.lines.iter().map(|l| l.credit_amount).sum()
    }
}

/// A confirmed payment against an invoice, ready for ledger posting.
#[derive(Debug, Clone)]
pub struct ReceiptEvent {
    /// Receipt ID.
    pub receipt_id: ReceiptId,
    /// Receipt document number.
    pub receipt_no: String,
    /// Amount received.
    pub amount: Decimal,
    /// Date the payment was received.
    pub received_date: NaiveDate,
    /// Payment rail code, e.g. "CASH" or "VIETQR".
    pub method_code: String,
    /// Human-readable rail name used in line descriptions.
    pub method_name: String,
    /// Invoice the payment settles.
    pub invoice_id: InvoiceId,
    /// Invoice document number.
    pub invoice_no: String,
    /// Apartment the invoice bills, if any.
    pub apartment_id: Option<ApartmentId>,
    /// Apartment display number for the header description.
    pub apartment_number: Option<String>,
    /// Account of the operator who confirmed the payment.
    pub created_by: Option<UserId>,
}

/// One expense item on a disbursement voucher.
#[derive(Debug, Clone)]
pub struct VoucherItem {
    /// Item amount.
    pub amount: Decimal,
    /// Item description; falls back to the account name when absent.
    pub description: Option<String>,
    /// Expense category selecting the debit account.
    pub category: ExpenseCategory,
    /// Apartment the expense is attributed to, if any.
    pub apartment_id: Option<ApartmentId>,
}

/// An approved cash disbursement, ready for ledger posting.
#[derive(Debug, Clone)]
pub struct VoucherEvent {
    /// Voucher ID.
    pub voucher_id: VoucherId,
    /// Voucher document number.
    pub voucher_number: String,
    /// Disbursement date.
    pub date: NaiveDate,
    /// Voucher description.
    pub description: String,
    /// Voucher total; must equal the sum of item amounts.
    pub total_amount: Decimal,
    /// Expense items.
    pub items: Vec<VoucherItem>,
    /// Account of the operator who approved the voucher.
    pub created_by: Option<UserId>,
}

/// Outcome of a ledger posting attempt.
///
/// Posting runs after the triggering payment is already durable, so a
/// journal failure must never unwind the payment. Callers receive the
/// failure as data instead of an error.
#[derive(Debug, Clone)]
pub enum LedgerOutcome<T> {
    /// The entry was posted.
    Posted(T),
    /// Accounting integration is disabled; nothing was written.
    Skipped,
    /// The entry could not be posted; the payment stands regardless.
    Failed { reason: String },
}

impl<T> LedgerOutcome<T> {
    #[must_use]
    pub const fn is_posted(&self) -> bool {
        matches!(self, Self::Posted(_))
    }
}
