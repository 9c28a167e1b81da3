//! Core accounting logic for Strata.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, validation rules, and report
//! calculations live here.
//!
//! # Modules
//!
//! - `accounts` - Chart of accounts and account classification
//! - `fiscal` - Fiscal periods, entry numbering, report period windows
//! - `journal` - Journal entry construction and validation
//! - `reports` - Income statement and financial dashboard computation

pub mod accounts;
pub mod fiscal;
pub mod journal;
pub mod reports;
