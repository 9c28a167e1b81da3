//! `SeaORM` Entity for period_counters table.
//!
//! One row per fiscal period, holding the last allocated entry
//! sequence. Rows are only ever touched through the atomic upsert in
//! the journal repository.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "period_counters")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub fiscal_period: String,
    pub last_seq: i64,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
