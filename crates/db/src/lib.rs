//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the ledger tables
//! - Repository abstractions for posting and querying the journal
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{JournalRepository, ReportRepository};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use strata_shared::config::DatabaseConfig;

/// Establishes a connection pool to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(&config.url);
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections);
    Database::connect(options).await
}
