//! # Catalog
//!
//! The single entry point to the core: two entity stores, the relationship
//! engine and the ranking, behind one owned value.
//!
//! ## Consistency
//!
//! - Mutators take `&mut self` and finish before returning; wrap the catalog
//!   in a lock to share it and no reader sees a half-applied change.
//! - Existence of every referenced record is checked first, so "not found"
//!   beats any other error.
//! - Returned records carry their `likes`/`friends` views as of the call.

use crate::clock::{Clock, SystemClock};
use crate::model::{Film, User};
use crate::ranking::Ranking;
use crate::relation::{Friendships, LikeIndex};
use crate::store::EntityStore;
use crate::types::{FilmId, FilmorateError, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Record and edge counts for status reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub film_count: usize,
    pub user_count: usize,
    pub like_count: usize,
    pub friendship_count: usize,
}

/// The in-memory film catalog.
#[derive(Debug)]
pub struct Catalog {
    films: EntityStore<Film>,
    users: EntityStore<User>,
    likes: LikeIndex,
    friendships: Friendships,
    clock: Box<dyn Clock>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Catalog {
    /// Create an empty catalog on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty catalog with a custom clock.
    #[must_use]
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            films: EntityStore::new(),
            users: EntityStore::new(),
            likes: LikeIndex::new(),
            friendships: Friendships::new(),
            clock: Box::new(clock),
        }
    }

    // =========================================================================
    // FILMS
    // =========================================================================

    pub fn create_film(&mut self, mut film: Film) -> Result<Film, FilmorateError> {
        film.likes = BTreeSet::new();
        let stored = self.films.create(film, self.clock.today())?;
        Ok(self.film_view(stored))
    }

    /// Replace a film's profile fields.
    ///
    /// Unlike a plain record swap, likes recorded through `add_like` survive
    /// the update; any `likes` on the incoming record are ignored.
    pub fn update_film(&mut self, mut film: Film) -> Result<Film, FilmorateError> {
        film.likes = BTreeSet::new();
        let stored = self.films.update(film, self.clock.today())?;
        Ok(self.film_view(stored))
    }

    /// All films, ascending by id.
    #[must_use]
    pub fn films(&self) -> Vec<Film> {
        self.films
            .iter()
            .map(|film| self.film_view(film.clone()))
            .collect()
    }

    pub fn film(&self, id: FilmId) -> Result<Film, FilmorateError> {
        let film = self.films.get(id)?;
        Ok(self.film_view(film.clone()))
    }

    /// Remove a film together with its likes.
    pub fn remove_film(&mut self, id: FilmId) -> Result<Film, FilmorateError> {
        let film = self.films.remove(id)?;
        let view = self.film_view(film);
        self.likes.forget_film(id);
        Ok(view)
    }

    // =========================================================================
    // USERS
    // =========================================================================

    pub fn create_user(&mut self, mut user: User) -> Result<User, FilmorateError> {
        user.friends = BTreeSet::new();
        let stored = self.users.create(user, self.clock.today())?;
        Ok(self.user_view(stored))
    }

    pub fn update_user(&mut self, mut user: User) -> Result<User, FilmorateError> {
        user.friends = BTreeSet::new();
        let stored = self.users.update(user, self.clock.today())?;
        Ok(self.user_view(stored))
    }

    /// All users, ascending by id.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.users
            .iter()
            .map(|user| self.user_view(user.clone()))
            .collect()
    }

    pub fn user(&self, id: UserId) -> Result<User, FilmorateError> {
        let user = self.users.get(id)?;
        Ok(self.user_view(user.clone()))
    }

    /// Remove a user record.
    ///
    /// Nothing cascades: likes and friendships that mention the user stay
    /// as dangling identifiers, which the friend listings skip.
    pub fn remove_user(&mut self, id: UserId) -> Result<User, FilmorateError> {
        let user = self.users.remove(id)?;
        Ok(self.user_view(user))
    }

    // =========================================================================
    // LIKES
    // =========================================================================

    /// Record that a user likes a film. Liking twice changes nothing.
    pub fn add_like(&mut self, film_id: FilmId, user_id: UserId) -> Result<Film, FilmorateError> {
        self.films.require(film_id)?;
        self.users.require(user_id)?;
        self.likes.add(film_id, user_id);
        self.film(film_id)
    }

    /// Withdraw a like. Removing an absent like changes nothing.
    pub fn remove_like(
        &mut self,
        film_id: FilmId,
        user_id: UserId,
    ) -> Result<Film, FilmorateError> {
        self.films.require(film_id)?;
        self.users.require(user_id)?;
        self.likes.remove(film_id, user_id);
        self.film(film_id)
    }

    // =========================================================================
    // FRIENDSHIP
    // =========================================================================

    /// Make two users mutual friends. Befriending twice changes nothing;
    /// `user_id == friend_id` is accepted and stored as a self-loop.
    pub fn add_friend(&mut self, user_id: UserId, friend_id: UserId) -> Result<(), FilmorateError> {
        self.require_pair(user_id, friend_id)?;
        self.friendships.link(user_id, friend_id);
        Ok(())
    }

    /// End a friendship on both sides.
    pub fn remove_friend(
        &mut self,
        user_id: UserId,
        friend_id: UserId,
    ) -> Result<(), FilmorateError> {
        self.require_pair(user_id, friend_id)?;
        self.friendships.unlink(user_id, friend_id);
        Ok(())
    }

    /// Friends of a user, ascending by id. Ids that no longer resolve are skipped.
    pub fn friends(&self, user_id: UserId) -> Result<Vec<User>, FilmorateError> {
        self.users.require(user_id)?;
        Ok(self.resolve_users(self.friendships.neighbours(user_id)))
    }

    /// Users who are friends of both, ascending by id. Ids that no longer
    /// resolve are skipped.
    pub fn common_friends(
        &self,
        user_id: UserId,
        other_id: UserId,
    ) -> Result<Vec<User>, FilmorateError> {
        self.require_pair(user_id, other_id)?;
        Ok(self.resolve_users(self.friendships.common(user_id, other_id)))
    }

    // =========================================================================
    // RANKING
    // =========================================================================

    /// Up to `count` films, most-liked first, ties by ascending id.
    #[must_use]
    pub fn popular(&self, count: i64) -> Vec<Film> {
        Ranking::popular(&self.films, &self.likes, count)
            .into_iter()
            .filter_map(|id| self.film(id).ok())
            .collect()
    }

    // =========================================================================
    // STATUS
    // =========================================================================

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            film_count: self.films.len(),
            user_count: self.users.len(),
            like_count: self.likes.total(),
            friendship_count: self.friendships.edge_count(),
        }
    }

    /// Check the friendship invariant. Always true for a catalog built
    /// through its public operations.
    #[must_use]
    pub fn friendships_are_symmetric(&self) -> bool {
        self.friendships.is_symmetric()
    }

    // =========================================================================
    // HELPERS
    // =========================================================================

    fn require_pair(&self, a: UserId, b: UserId) -> Result<(), FilmorateError> {
        self.users.require(a)?;
        self.users.require(b)
    }

    fn resolve_users(&self, ids: impl IntoIterator<Item = UserId>) -> Vec<User> {
        ids.into_iter()
            .filter_map(|id| self.users.get(id).ok())
            .map(|user| self.user_view(user.clone()))
            .collect()
    }

    fn film_view(&self, mut film: Film) -> Film {
        if let Some(id) = film.id {
            film.likes = self.likes.likes_of(id);
        }
        film
    }

    fn user_view(&self, mut user: User) -> User {
        if let Some(id) = user.id {
            user.friends = self.friendships.neighbours(id);
        }
        user
    }
}

// =============================================================================
// TESTS
// =============================================================================
