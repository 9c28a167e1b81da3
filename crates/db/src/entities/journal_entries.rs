//! `SeaORM` Entity for journal_entries table.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "journal_entries")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Human-readable number, e.g. `JE-2025-01-0001`. Unique.
    pub entry_number: String,
    /// `RECEIPT` or `PAYMENT`.
    pub entry_type: String,
    pub entry_date: Date,
    /// `YYYY-MM`, derived from `entry_date`.
    pub fiscal_period: String,
    /// `RECEIPT` or `VOUCHER`.
    pub reference_type: String,
    pub reference_id: Uuid,
    pub description: String,
    /// `DRAFT` or `POSTED`.
    pub status: String,
    pub created_by: Option<Uuid>,
    pub posted_by: Option<Uuid>,
    pub posted_at: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::journal_entry_lines::Entity")]
    JournalEntryLines,
}

impl Related<super::journal_entry_lines::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JournalEntryLines.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
