//! # API Request/Response Types
//!
//! This module defines the JSON structures for the HTTP API.
//!
//! Responses reuse the core `Film` and `User` records directly. Requests go
//! through DTOs whose fields are all optional, so a missing required field
//! becomes a validation error with a readable message instead of a
//! deserialization failure.

use chrono::NaiveDate;
use filmorate_core::{CatalogStats, Film, FilmId, FilmorateError, User, UserId};
use serde::{Deserialize, Serialize};

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

// =============================================================================
// STATUS RESPONSE
// =============================================================================

/// Catalog status response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub film_count: usize,
    pub user_count: usize,
    pub like_count: usize,
    pub friendship_count: usize,
}

impl From<CatalogStats> for StatusResponse {
    fn from(stats: CatalogStats) -> Self {
        Self {
            film_count: stats.film_count,
            user_count: stats.user_count,
            like_count: stats.like_count,
            friendship_count: stats.friendship_count,
        }
    }
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Body of every 4xx response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// =============================================================================
// FILM REQUEST
// =============================================================================

/// Film create/update body.
///
/// `likes` is never read from a request; like edges change only through
/// `PUT`/`DELETE /films/{id}/like/{userId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilmRequest {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<i64>,
}

impl FilmRequest {
    /// Convert to a core `Film`, rejecting missing required fields.
    ///
    /// Content rules (blank name, description length, release date,
    /// duration) are left to the catalog.
    pub fn into_film(self) -> Result<Film, FilmorateError> {
        let name = self
            .name
            .ok_or_else(|| FilmorateError::validation("Film name is required"))?;
        let release_date = self
            .release_date
            .ok_or_else(|| FilmorateError::validation("Film release date is required"))?;
        let duration = self
            .duration
            .ok_or_else(|| FilmorateError::validation("Film duration is required"))?;

        let mut film = Film::new(name, release_date, duration);
        film.description = self.description;
        film.id = self.id.map(FilmId);
        Ok(film)
    }
}

// =============================================================================
// USER REQUEST
// =============================================================================

/// User create/update body.
///
/// `friends` is never read from a request; friendship changes only through
/// `PUT`/`DELETE /users/{id}/friends/{friendId}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub login: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
}

impl UserRequest {
    /// Convert to a core `User`, rejecting missing required fields.
    pub fn into_user(self) -> Result<User, FilmorateError> {
        let email = self
            .email
            .ok_or_else(|| FilmorateError::validation("User email is required"))?;
        let login = self
            .login
            .ok_or_else(|| FilmorateError::validation("User login is required"))?;

        let mut user = User::new(email, login);
        user.name = self.name;
        user.birthday = self.birthday;
        user.id = self.id.map(UserId);
        Ok(user)
    }
}

// =============================================================================
// QUERY PARAMETERS
// =============================================================================

/// Query string of `GET /films/popular`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PopularQuery {
    pub count: Option<i64>,
}
