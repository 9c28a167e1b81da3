//! Shared types, errors, and configuration for Strata.
//!
//! This crate holds the pieces every other crate needs:
//! - Typed IDs for entity references
//! - Pagination types for list queries
//! - The application-wide error taxonomy
//! - Configuration loading

pub mod config;
pub mod error;
pub mod types;

pub use config::{AccountingConfig, AppConfig, DatabaseConfig};
pub use error::{AppError, AppResult};
