//! # Relationship Engine
//!
//! Edges between record identifiers:
//! - [`LikeIndex`]: "user likes film", many-to-many
//! - [`SymmetricRelation`]: "user is friend of user", mutual
//!
//! Both hold identifiers only. They never check that an identifier resolves;
//! the catalog checks existence before touching an edge.

use crate::types::{FilmId, UserId};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// LIKE INDEX
// =============================================================================

/// Which users liked which film.
#[derive(Debug, Clone, Default)]
pub struct LikeIndex {
    by_film: BTreeMap<FilmId, BTreeSet<UserId>>,
}

impl LikeIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a like. Returns `false` if it was already present.
    pub fn add(&mut self, film: FilmId, user: UserId) -> bool {
        self.by_film.entry(film).or_default().insert(user)
    }

    /// Drop a like. Returns `false` if there was none.
    pub fn remove(&mut self, film: FilmId, user: UserId) -> bool {
        let Some(users) = self.by_film.get_mut(&film) else {
            return false;
        };
        let removed = users.remove(&user);
        if users.is_empty() {
            self.by_film.remove(&film);
        }
        removed
    }

    /// Users who liked a film, ascending.
    #[must_use]
    pub fn likes_of(&self, film: FilmId) -> BTreeSet<UserId> {
        self.by_film.get(&film).cloned().unwrap_or_default()
    }

    /// Number of likes on a film.
    #[must_use]
    pub fn count(&self, film: FilmId) -> usize {
        self.by_film.get(&film).map_or(0, BTreeSet::len)
    }

    #[must_use]
    pub fn contains(&self, film: FilmId, user: UserId) -> bool {
        self.by_film
            .get(&film)
            .is_some_and(|users| users.contains(&user))
    }

    /// Drop every like on a film.
    pub fn forget_film(&mut self, film: FilmId) {
        self.by_film.remove(&film);
    }

    /// Total number of likes across all films.
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_film.values().map(BTreeSet::len).sum()
    }
}

// =============================================================================
// SYMMETRIC RELATION
// =============================================================================

/// An undirected relation: `(a, b)` is present iff `(b, a)` is.
///
/// `link` and `unlink` are the only mutators and each updates
/// both sides before returning, so no caller can observe a one-sided edge.
#[derive(Debug, Clone)]
pub struct SymmetricRelation<K: Ord + Copy> {
    adjacency: BTreeMap<K, BTreeSet<K>>,
}

impl<K: Ord + Copy> Default for SymmetricRelation<K> {
    fn default() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }
}

impl<K: Ord + Copy> SymmetricRelation<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Connect `a` and `b`. Returns `false` if they were already connected.
    pub fn link(&mut self, a: K, b: K) -> bool {
        let added = self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
        added
    }

    /// Disconnect `a` and `b`. Returns `false` if they were not connected.
    pub fn unlink(&mut self, a: K, b: K) -> bool {
        let removed = self.remove_half(a, b);
        self.remove_half(b, a);
        removed
    }

    #[must_use]
    pub fn contains(&self, a: K, b: K) -> bool {
        self.adjacency.get(&a).is_some_and(|set| set.contains(&b))
    }

    /// Everything connected to `a`, ascending.
    #[must_use]
    pub fn neighbours(&self, a: K) -> BTreeSet<K> {
        self.adjacency.get(&a).cloned().unwrap_or_default()
    }

    /// Everything connected to both `a` and `b`, ascending.
    #[must_use]
    pub fn common(&self, a: K, b: K) -> Vec<K> {
        match (self.adjacency.get(&a), self.adjacency.get(&b)) {
            (Some(left), Some(right)) => left.intersection(right).copied().collect(),
            _ => Vec::new(),
        }
    }

    /// Number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let halves: usize = self.adjacency.values().map(BTreeSet::len).sum();
        let loops = self
            .adjacency
            .iter()
            .filter(|(k, set)| set.contains(*k))
            .count();
        (halves + loops) / 2
    }

    /// Check that every edge has its mirror.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.adjacency
            .iter()
            .all(|(a, set)| set.iter().all(|b| self.contains(*b, *a)))
    }

    fn remove_half(&mut self, from: K, to: K) -> bool {
        let Some(set) = self.adjacency.get_mut(&from) else {
            return false;
        };
        let removed = set.remove(&to);
        if set.is_empty() {
            self.adjacency.remove(&from);
        }
        removed
    }
}

/// Friendship between users.
pub type Friendships = SymmetricRelation<UserId>;

// =============================================================================
// TESTS
// =============================================================================
