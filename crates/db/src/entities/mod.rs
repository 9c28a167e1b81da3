//! `SeaORM` entity definitions.

pub mod amenity_bookings;
pub mod journal_entries;
pub mod journal_entry_lines;
pub mod period_counters;
pub mod staff_profiles;
