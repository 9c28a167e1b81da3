//! Initial database migration.
//!
//! Creates the ledger tables, the per-period numbering counters, and
//! the operational tables reports read from.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: LEDGER TABLES
        // ============================================================
        db.execute_unprepared(JOURNAL_ENTRIES_SQL).await?;
        db.execute_unprepared(JOURNAL_ENTRY_LINES_SQL).await?;

        // ============================================================
        // PART 2: ENTRY NUMBERING
        // ============================================================
        db.execute_unprepared(PERIOD_COUNTERS_SQL).await?;

        // ============================================================
        // PART 3: OPERATIONAL TABLES READ BY REPORTS
        // ============================================================
        db.execute_unprepared(AMENITY_BOOKINGS_SQL).await?;
        db.execute_unprepared(STAFF_PROFILES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const JOURNAL_ENTRIES_SQL: &str = r"
CREATE TABLE journal_entries (
    id UUID PRIMARY KEY,
    entry_number VARCHAR(30) NOT NULL UNIQUE,
    entry_type VARCHAR(20) NOT NULL,
    entry_date DATE NOT NULL,
    fiscal_period VARCHAR(7) NOT NULL,
    reference_type VARCHAR(20) NOT NULL,
    reference_id UUID NOT NULL,
    description TEXT NOT NULL,
    status VARCHAR(10) NOT NULL,
    created_by UUID,
    posted_by UUID,
    posted_at TIMESTAMPTZ,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT chk_entry_type CHECK (entry_type IN ('RECEIPT', 'PAYMENT')),
    CONSTRAINT chk_reference_type CHECK (reference_type IN ('RECEIPT', 'VOUCHER')),
    CONSTRAINT chk_status CHECK (status IN ('DRAFT', 'POSTED'))
);

CREATE INDEX idx_journal_entries_entry_date ON journal_entries(entry_date);
CREATE INDEX idx_journal_entries_fiscal_period ON journal_entries(fiscal_period);
CREATE INDEX idx_journal_entries_reference ON journal_entries(reference_type, reference_id);
CREATE INDEX idx_journal_entries_status ON journal_entries(status);
";

const JOURNAL_ENTRY_LINES_SQL: &str = r"
CREATE TABLE journal_entry_lines (
    id UUID PRIMARY KEY,
    journal_entry_id UUID NOT NULL REFERENCES journal_entries(id) ON DELETE CASCADE,
    line_number INTEGER NOT NULL,
    account_code VARCHAR(10) NOT NULL,
    description TEXT NOT NULL,
    debit_amount NUMERIC(18, 2) NOT NULL DEFAULT 0,
    credit_amount NUMERIC(18, 2) NOT NULL DEFAULT 0,
    apartment_id UUID,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),

    CONSTRAINT uq_journal_entry_lines_position UNIQUE (journal_entry_id, line_number),
    CONSTRAINT chk_amounts_non_negative CHECK (debit_amount >= 0 AND credit_amount >= 0),
    CONSTRAINT chk_exactly_one_side CHECK (
        (debit_amount > 0 AND credit_amount = 0)
        OR (credit_amount > 0 AND debit_amount = 0)
    )
);

CREATE INDEX idx_journal_entry_lines_entry ON journal_entry_lines(journal_entry_id);
CREATE INDEX idx_journal_entry_lines_account ON journal_entry_lines(account_code);
";

const PERIOD_COUNTERS_SQL: &str = r"
CREATE TABLE period_counters (
    fiscal_period VARCHAR(7) PRIMARY KEY,
    last_seq BIGINT NOT NULL DEFAULT 0,
    updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const AMENITY_BOOKINGS_SQL: &str = r"
CREATE TABLE amenity_bookings (
    id UUID PRIMARY KEY,
    amenity_name VARCHAR(255) NOT NULL,
    apartment_id UUID,
    start_date DATE NOT NULL,
    total_price NUMERIC(18, 2) NOT NULL,
    status VARCHAR(20) NOT NULL,
    payment_status VARCHAR(20) NOT NULL,
    is_deleted BOOLEAN NOT NULL DEFAULT false,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE INDEX idx_amenity_bookings_start_date ON amenity_bookings(start_date);
";

const STAFF_PROFILES_SQL: &str = r"
CREATE TABLE staff_profiles (
    id UUID PRIMARY KEY,
    user_id UUID NOT NULL UNIQUE,
    full_name VARCHAR(255) NOT NULL,
    is_active BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS staff_profiles CASCADE;
DROP TABLE IF EXISTS amenity_bookings CASCADE;
DROP TABLE IF EXISTS period_counters CASCADE;
DROP TABLE IF EXISTS journal_entry_lines CASCADE;
DROP TABLE IF EXISTS journal_entries CASCADE;
";
