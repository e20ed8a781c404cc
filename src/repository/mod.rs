//! Repository layer for database persistence.
//!
//! All database access uses Diesel ORM with compile-time query checking.
//! SQLite is the default backend; MySQL is available behind the `mysql`
//! feature for the `identity_card_db` deployment.

pub mod card;
pub mod context;
pub mod models;
pub mod pool;
pub mod util;

pub use card::CardRepository;
pub use context::DbContext;
pub use pool::{DbError, DbPool};

use chrono::{DateTime, Utc};

/// Parse a datetime string from the database, defaulting to Unix epoch on error.
pub fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Parse an optional datetime string from the database.
pub fn parse_datetime_opt(s: Option<String>) -> Option<DateTime<Utc>> {
    s.map(|s| parse_datetime(&s))
}
