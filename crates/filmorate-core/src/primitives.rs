//! # Catalog Primitives
//!
//! Hardcoded business constants for the Filmorate catalog.
//!
//! These values are compiled into the binary and are immutable at runtime.

use chrono::NaiveDate;

/// Year of the first public film screening (Lumière, Paris).
pub const CINEMA_BIRTH_YEAR: i32 = 1895;

/// Month of the first public film screening.
pub const CINEMA_BIRTH_MONTH: u32 = 12;

/// Day of the first public film screening.
pub const CINEMA_BIRTH_DAY: u32 = 28;

/// Earliest release date a film may carry (inclusive).
///
/// - A release on exactly this date is accepted.
/// - Anything strictly before it is rejected.
#[must_use]
pub fn earliest_release_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(CINEMA_BIRTH_YEAR, CINEMA_BIRTH_MONTH, CINEMA_BIRTH_DAY)
        .unwrap_or(NaiveDate::MIN)
}

/// Maximum film description length, in characters (not bytes).
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Number of films returned by the popularity ranking when the caller
/// does not ask for a specific count.
pub const DEFAULT_POPULAR_COUNT: i64 = 10;

/// First identifier handed out by an empty store.
pub const FIRST_ID: u64 = 1;
