//! Journal repository for posting and querying the general journal.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, DbBackend, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set, SqlErr, Statement, TransactionTrait,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use strata_core::fiscal::entry_number;
use strata_core::journal::{
    DraftEntry, EntryBuilder, EntryStatus, EntryType, JournalError, LedgerOutcome, ReceiptEvent,
    VoucherEvent, validate_entry,
};
use strata_shared::types::{EntryId, PageRequest, PageResponse, StaffId, UserId};

use crate::entities::{journal_entries, journal_entry_lines, staff_profiles};

/// Attempts at allocating an entry number before giving up.
const MAX_NUMBERING_ATTEMPTS: u32 = 3;

/// Error types for journal posting and query operations.
#[derive(Debug, thiserror::Error)]
pub enum PostingError {
    /// Journal entry not found.
    #[error("Journal entry not found: {0}")]
    NotFound(Uuid),

    /// The entry violates a double-entry invariant.
    #[error(transparent)]
    Invalid(#[from] JournalError),

    /// Entry numbering kept colliding under concurrent posting.
    #[error("Could not allocate an entry number for period {fiscal_period} after {attempts} attempts")]
    NumberingConflict {
        /// Fiscal period the allocation was for.
        fiscal_period: String,
        /// Number of attempts made.
        attempts: u32,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<PostingError> for strata_shared::AppError {
    fn from(err: PostingError) -> Self {
        match err {
            PostingError::NotFound(id) => Self::NotFound(id.to_string()),
            PostingError::Invalid(inner) => Self::BusinessRule(inner.to_string()),
            PostingError::NumberingConflict { .. } => Self::Conflict(err.to_string()),
            PostingError::Database(inner) => Self::Database(inner.to_string()),
        }
    }
}

/// Sort order for general journal listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JournalSort {
    /// Newest entries first (the default).
    #[default]
    EntryDateDesc,
    /// By entry number, ascending.
    EntryNumber,
    /// By entry type, ascending.
    EntryType,
}

impl JournalSort {
    /// Parses a sort keyword, falling back to the date ordering.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "entrynumber" => Self::EntryNumber,
            "entrytype" => Self::EntryType,
            _ => Self::EntryDateDesc,
        }
    }
}

/// Filter options for general journal listings.
#[derive(Debug, Clone, Default)]
pub struct JournalFilter {
    /// Earliest entry date, inclusive.
    pub date_from: Option<NaiveDate>,
    /// Latest entry date, inclusive.
    pub date_to: Option<NaiveDate>,
    /// Filter by entry type.
    pub entry_type: Option<EntryType>,
    /// Filter by status.
    pub status: Option<EntryStatus>,
    /// Filter by fiscal period ("YYYY-MM").
    pub fiscal_period: Option<String>,
    /// Case-insensitive substring match on entry number or description.
    pub search: Option<String>,
    /// Sort order.
    pub sort: JournalSort,
}

/// A journal entry with its lines and computed totals, as listed in
/// the general journal.
#[derive(Debug, Clone, Serialize)]
pub struct GeneralJournalEntry {
    /// Entry header.
    pub entry: journal_entries::Model,
    /// Lines in line-number order.
    pub lines: Vec<journal_entry_lines::Model>,
    /// Sum of debit amounts.
    pub total_debit: Decimal,
    /// Sum of credit amounts.
    pub total_credit: Decimal,
    /// Whether the entry balances to a positive total.
    pub is_balanced: bool,
}

impl GeneralJournalEntry {
    fn assemble(entry: journal_entries::Model, lines: Vec<journal_entry_lines::Model>) -> Self {
        let total_debit: Decimal = lines.iter().map(|l| l.debit_amount).sum();
        let total_credit: Decimal = lines.iter().map(|l| l.credit_amount).sum();
        let is_balanced = total_debit == total_credit && total_debit > Decimal::ZERO;
        Self {
            entry,
            lines,
            total_debit,
            total_credit,
            is_balanced,
        }
    }
}

/// A successfully posted entry, as stored.
#[derive(Debug, Clone)]
pub struct PostedEntry {
    /// Entry header, including the allocated entry number.
    pub entry: journal_entries::Model,
    /// Lines in line-number order.
    pub lines: Vec<journal_entry_lines::Model>,
}

/// Journal repository for posting and listing entries.
#[derive(Debug, Clone)]
pub struct JournalRepository {
    db: DatabaseConnection,
    builder: EntryBuilder,
}

impl JournalRepository {
    /// Creates a new journal repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection, builder: EntryBuilder) -> Self {
        Self { db, builder }
    }

    /// Posts the ledger entry for a confirmed payment receipt.
    ///
    /// Called after the payment is already durable, so failures are
    /// returned as data and never unwind the payment. Every failure is
    /// logged with the receipt number.
    pub async fn post_from_receipt(&self, event: &ReceiptEvent) -> LedgerOutcome<PostedEntry> {
        if !self.builder.is_enabled() {
            return LedgerOutcome::Skipped;
        }

        let operator = self.staff_for_user(event.created_by).await;
        let draft = match self.builder.build_from_receipt(event, operator) {
            Ok(Some(draft)) => draft,
            Ok(None) => return LedgerOutcome::Skipped,
            Err(err) => {
                warn!(
                    receipt_no = %event.receipt_no,
                    error = %err,
                    "journal entry not built for receipt"
                );
                return LedgerOutcome::Failed {
                    reason: err.to_string(),
                };
            }
        };

        match self.post_entry(&draft).await {
            Ok(posted) => LedgerOutcome::Posted(posted),
            Err(err) => {
                warn!(
                    receipt_no = %event.receipt_no,
                    error = %err,
                    "journal posting failed; payment remains recorded"
                );
                LedgerOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Posts the ledger entry for an approved disbursement voucher.
    ///
    /// Same contract as [`Self::post_from_receipt`]: the voucher stays
    /// approved whatever happens to the journal.
    pub async fn post_from_voucher(&self, event: &VoucherEvent) -> LedgerOutcome<PostedEntry> {
        if !self.builder.is_enabled() {
            return LedgerOutcome::Skipped;
        }

        let operator = self.staff_for_user(event.created_by).await;
        let draft = match self.builder.build_from_voucher(event, operator) {
            Ok(Some(draft)) => draft,
            Ok(None) => return LedgerOutcome::Skipped,
            Err(err) => {
                warn!(
                    voucher_number = %event.voucher_number,
                    error = %err,
                    "journal entry not built for voucher"
                );
                return LedgerOutcome::Failed {
                    reason: err.to_string(),
                };
            }
        };

        match self.post_entry(&draft).await {
            Ok(posted) => LedgerOutcome::Posted(posted),
            Err(err) => {
                warn!(
                    voucher_number = %event.voucher_number,
                    error = %err,
                    "journal posting failed; voucher remains approved"
                );
                LedgerOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }

    /// Validates and persists a draft entry, allocating its number.
    ///
    /// The per-period counter upsert, the header insert, and the line
    /// inserts share one database transaction, so a failure at any step
    /// leaves no trace (including no burned sequence numbers). A unique
    /// violation on the entry number is retried up to
    /// [`MAX_NUMBERING_ATTEMPTS`] times before reporting a conflict.
    pub async fn post_entry(&self, draft: &DraftEntry) -> Result<PostedEntry, PostingError> {
        validate_entry(draft)?;

        for attempt in 1..=MAX_NUMBERING_ATTEMPTS {
            match self.try_post(draft).await {
                Ok(posted) => {
                    info!(
                        entry_number = %posted.entry.entry_number,
                        fiscal_period = %posted.entry.fiscal_period,
                        "journal entry posted"
                    );
                    return Ok(posted);
                }
                Err(PostingError::Database(err)) if is_unique_violation(&err) => {
                    warn!(
                        fiscal_period = %draft.fiscal_period,
                        attempt,
                        "entry number collision, retrying"
                    );
                }
                Err(err) => return Err(err),
            }
        }

        Err(PostingError::NumberingConflict {
            fiscal_period: draft.fiscal_period.clone(),
            attempts: MAX_NUMBERING_ATTEMPTS,
        })
    }

    async fn try_post(&self, draft: &DraftEntry) -> Result<PostedEntry, PostingError> {
        let txn = self.db.begin().await?;

        let sequence = reserve_sequence(&txn, &draft.fiscal_period).await?;
        let number = entry_number(draft.entry_date, sequence);
        let now = Utc::now().into();

        let entry = journal_entries::ActiveModel {
            id: Set(draft.entry_id.into_inner()),
            entry_number: Set(number),
            entry_type: Set(draft.entry_type.as_str().to_string()),
            entry_date: Set(draft.entry_date),
            fiscal_period: Set(draft.fiscal_period.clone()),
            reference_type: Set(draft.reference_type.as_str().to_string()),
            reference_id: Set(draft.reference_id),
            description: Set(draft.description.clone()),
            status: Set(draft.status.as_str().to_string()),
            created_by: Set(draft.created_by.map(StaffId::into_inner)),
            posted_by: Set(draft.posted_by.map(StaffId::into_inner)),
            posted_at: Set(Some(now)),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&txn)
        .await?;

        // The inserted rows are fully known here; keep the models so
        // the posted entry needs no read after the commit.
        let lines = line_models(draft, entry.id, now);
        journal_entry_lines::Entity::insert_many(
            lines.iter().cloned().map(IntoActiveModel::into_active_model),
        )
        .exec(&txn)
        .await?;

        txn.commit().await?;

        Ok(PostedEntry { entry, lines })
    }

    /// Lists general journal entries matching the filter, newest first
    /// unless the filter picks another sort.
    pub async fn list_general_journal(
        &self,
        filter: &JournalFilter,
        page: PageRequest,
    ) -> Result<PageResponse<GeneralJournalEntry>, PostingError> {
        let mut query = journal_entries::Entity::find();

        if let Some(from) = filter.date_from {
            query = query.filter(journal_entries::Column::EntryDate.gte(from));
        }
        if let Some(to) = filter.date_to {
            query = query.filter(journal_entries::Column::EntryDate.lte(to));
        }
        if let Some(entry_type) = filter.entry_type {
            query = query.filter(journal_entries::Column::EntryType.eq(entry_type.as_str()));
        }
        if let Some(status) = filter.status {
            query = query.filter(journal_entries::Column::Status.eq(status.as_str()));
        }
        if let Some(fiscal_period) = &filter.fiscal_period {
            query = query.filter(journal_entries::Column::FiscalPeriod.eq(fiscal_period));
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search.to_lowercase());
            query = query.filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(
                            journal_entries::Column::EntryNumber,
                        )))
                        .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(
                            journal_entries::Column::Description,
                        )))
                        .like(pattern),
                    ),
            );
        }

        let total = query.clone().count(&self.db).await?;

        let query = match filter.sort {
            JournalSort::EntryDateDesc => query.order_by_desc(journal_entries::Column::EntryDate),
            JournalSort::EntryNumber => query.order_by_asc(journal_entries::Column::EntryNumber),
            JournalSort::EntryType => query.order_by_asc(journal_entries::Column::EntryType),
        };
        let entries = query
            .order_by_asc(journal_entries::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        let ids: Vec<Uuid> = entries.iter().map(|e| e.id).collect();
        let lines = journal_entry_lines::Entity::find()
            .filter(journal_entry_lines::Column::JournalEntryId.is_in(ids))
            .order_by_asc(journal_entry_lines::Column::LineNumber)
            .all(&self.db)
            .await?;

        let mut by_entry: std::collections::HashMap<Uuid, Vec<journal_entry_lines::Model>> =
            std::collections::HashMap::new();
        for line in lines {
            by_entry.entry(line.journal_entry_id).or_default().push(line);
        }

        let data = entries
            .into_iter()
            .map(|entry| {
                let entry_lines = by_entry.remove(&entry.id).unwrap_or_default();
                GeneralJournalEntry::assemble(entry, entry_lines)
            })
            .collect();

        Ok(PageResponse::new(data, page, total))
    }

    /// Fetches a single entry with its lines.
    pub async fn get_entry(&self, id: EntryId) -> Result<GeneralJournalEntry, PostingError> {
        let entry = journal_entries::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(PostingError::NotFound(id.into_inner()))?;

        let lines = journal_entry_lines::Entity::find()
            .filter(journal_entry_lines::Column::JournalEntryId.eq(entry.id))
            .order_by_asc(journal_entry_lines::Column::LineNumber)
            .all(&self.db)
            .await?;

        Ok(GeneralJournalEntry::assemble(entry, lines))
    }

    /// Resolves the staff profile for a user account.
    ///
    /// Attribution is best-effort: a missing profile or a lookup error
    /// is logged and the entry posts without an operator.
    async fn staff_for_user(&self, user_id: Option<UserId>) -> Option<StaffId> {
        let user_id = user_id?;
        match staff_profiles::Entity::find()
            .filter(staff_profiles::Column::UserId.eq(user_id.into_inner()))
            .one(&self.db)
            .await
        {
            Ok(Some(profile)) => Some(StaffId::from_uuid(profile.id)),
            Ok(None) => {
                warn!(%user_id, "no staff profile for user; posting without attribution");
                None
            }
            Err(err) => {
                warn!(%user_id, error = %err, "staff profile lookup failed; posting without attribution");
                None
            }
        }
    }
}

/// Materializes a draft's lines as the row models to insert.
fn line_models(
    draft: &DraftEntry,
    entry_id: Uuid,
    now: DateTimeWithTimeZone,
) -> Vec<journal_entry_lines::Model> {
    draft
        .lines
        .iter()
        .map(|line| journal_entry_lines::Model {
            id: line.line_id.into_inner(),
            journal_entry_id: entry_id,
            line_number: line.line_number,
            account_code: line.account_code.clone(),
            description: line.description.clone(),
            debit_amount: line.debit_amount,
            credit_amount: line.credit_amount,
            apartment_id: line.apartment_id.map(strata_shared::types::ApartmentId::into_inner),
            created_at: now,
        })
        .collect()
}

/// Atomically advances the fiscal period's sequence counter.
///
/// The upsert takes a row lock, so concurrent posters serialize here
/// and each receives a distinct sequence.
async fn reserve_sequence(
    txn: &DatabaseTransaction,
    fiscal_period: &str,
) -> Result<i64, DbErr> {
    let statement = Statement::from_sql_and_values(
        DbBackend::Postgres,
        "INSERT INTO period_counters (fiscal_period, last_seq) VALUES ($1, 1) \
         ON CONFLICT (fiscal_period) DO UPDATE \
         SET last_seq = period_counters.last_seq + 1, updated_at = now() \
         RETURNING last_seq",
        [fiscal_period.into()],
    );

    let row = txn
        .query_one(statement)
        .await?
        .ok_or_else(|| DbErr::Custom("period counter upsert returned no row".to_string()))?;
    row.try_get("", "last_seq")
}

fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}
