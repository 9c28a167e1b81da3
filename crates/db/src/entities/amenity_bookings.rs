//! `SeaORM` Entity for amenity_bookings table.
//!
//! Bookings are collected outside the ledger; reports read them to
//! blend amenity income into revenue figures.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "amenity_bookings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub amenity_name: String,
    pub apartment_id: Option<Uuid>,
    pub start_date: Date,
    pub total_price: Decimal,
    /// `CONFIRMED`, `COMPLETED`, or `CANCELLED`.
    pub status: String,
    /// `PAID` or `UNPAID`.
    pub payment_status: String,
    pub is_deleted: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
