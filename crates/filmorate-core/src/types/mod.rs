//! # Core Type Definitions
//!
//! This module contains the identifier and error types shared by every
//! part of the catalog:
//! - Record identifiers (`FilmId`, `UserId`)
//! - Error types (`FilmorateError`, `ErrorKind`)
//!
//! ## Identifier Guarantees
//!
//! Identifiers:
//! - Are plain integers assigned by the owning store, starting at 1
//! - Implement `Ord` so they key `BTreeMap`/`BTreeSet` deterministically
//! - Are weak references: holding one never keeps a record alive

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// RECORD IDENTIFIERS
// =============================================================================

/// Identifier of a film in the film store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct FilmId(pub u64);

/// Identifier of a user in the user store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl FilmId {
    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl UserId {
    /// Get the raw identifier value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FilmId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors returned by catalog operations.
///
/// - No silent failures
/// - Every error is terminal for the call that produced it
/// - The catalog never panics; callers map these to protocol status codes
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilmorateError {
    /// The input broke a business rule (dates, blank fields, duplicate email,
    /// missing identifier on update).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The requested film does not exist.
    #[error("Film with id {0} not found")]
    FilmNotFound(FilmId),

    /// The requested user does not exist.
    #[error("User with id {0} not found")]
    UserNotFound(UserId),
}

/// Coarse classification of a [`FilmorateError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
}

impl FilmorateError {
    /// Shorthand for a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// The kind of failure, for callers that only care about the category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            Self::FilmNotFound(_) | Self::UserNotFound(_) => ErrorKind::NotFound,
        }
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

// =============================================================================
// TESTS
// =============================================================================
