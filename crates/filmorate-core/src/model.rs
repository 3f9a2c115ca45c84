//! # Catalog Records
//!
//! The two record types held by the catalog: [`Film`] and [`User`].
//!
//! Both are plain mutable value records keyed by an integer identifier.
//! Their relationship fields (`likes`, `friends`) are views: the catalog
//! fills them from the relationship engine when a record is returned, and
//! ignores whatever a caller puts there on create or update.

use crate::store::Entity;
use crate::types::{FilmId, FilmorateError, UserId};
use crate::validation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// FILM
// =============================================================================

/// A film in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Film {
    /// Assigned by the store on create; required on update.
    #[serde(default)]
    pub id: Option<FilmId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub release_date: NaiveDate,
    /// Running time in minutes.
    pub duration: i64,
    /// Users who liked this film.
    #[serde(default)]
    pub likes: BTreeSet<UserId>,
}

impl Film {
    /// Create a film record without an identifier.
    pub fn new(name: impl Into<String>, release_date: NaiveDate, duration: i64) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: None,
            release_date,
            duration,
            likes: BTreeSet::new(),
        }
    }

    /// Builder-style description setter.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Builder-style identifier setter, for update requests.
    #[must_use]
    pub fn with_id(mut self, id: FilmId) -> Self {
        self.id = Some(id);
        self
    }

    /// Number of users who liked this film.
    #[must_use]
    pub fn like_count(&self) -> usize {
        self.likes.len()
    }
}

impl Entity for Film {
    type Id = FilmId;

    const KIND: &'static str = "film";

    fn id(&self) -> Option<FilmId> {
        self.id
    }

    fn set_id(&mut self, id: FilmId) {
        self.id = Some(id);
    }

    fn prepare(&mut self, _today: NaiveDate) -> Result<(), FilmorateError> {
        validation::check_film(self)
    }

    fn not_found(id: FilmId) -> FilmorateError {
        FilmorateError::FilmNotFound(id)
    }
}

// =============================================================================
// USER
// =============================================================================

/// A user of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Assigned by the store on create; required on update.
    #[serde(default)]
    pub id: Option<UserId>,
    pub email: String,
    pub login: String,
    /// Display name. Falls back to `login` when absent or blank.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    /// Mutual friends of this user.
    #[serde(default)]
    pub friends: BTreeSet<UserId>,
}

impl User {
    /// Create a user record without an identifier.
    pub fn new(email: impl Into<String>, login: impl Into<String>) -> Self {
        Self {
            id: None,
            email: email.into(),
            login: login.into(),
            name: None,
            birthday: None,
            friends: BTreeSet::new(),
        }
    }

    /// Builder-style display name setter.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Builder-style birthday setter.
    #[must_use]
    pub fn with_birthday(mut self, birthday: NaiveDate) -> Self {
        self.birthday = Some(birthday);
        self
    }

    /// Builder-style identifier setter, for update requests.
    #[must_use]
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    /// The name shown for this user.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(self.login.as_str())
    }
}

impl Entity for User {
    type Id = UserId;

    const KIND: &'static str = "user";

    fn id(&self) -> Option<UserId> {
        self.id
    }

    fn set_id(&mut self, id: UserId) {
        self.id = Some(id);
    }

    fn prepare(&mut self, today: NaiveDate) -> Result<(), FilmorateError> {
        validation::check_user(self, today)?;
        validation::default_name_to_login(self);
        Ok(())
    }

    fn unique_key(&self) -> Option<&str> {
        Some(&self.email)
    }

    fn not_found(id: UserId) -> FilmorateError {
        FilmorateError::UserNotFound(id)
    }
}

// =============================================================================
// TESTS
// =============================================================================
