//! # Popularity Ranking
//!
//! Orders films by how many users liked them.
//!
//! There is no persisted index: every call walks the full film set and the
//! like index. Ties on like-count are broken by ascending film id, so the
//! order is fully determined by the catalog state.

use crate::model::Film;
use crate::relation::LikeIndex;
use crate::store::EntityStore;
use crate::types::FilmId;
use std::cmp::Reverse;

/// Stateless ranking over a film store and its likes.
pub struct Ranking;

impl Ranking {
    /// Identifiers of the `count` most-liked films, most-liked first.
    ///
    /// - `count <= 0` yields nothing
    /// - `count` above the number of films yields every film
    #[must_use]
    pub fn popular(films: &EntityStore<Film>, likes: &LikeIndex, count: i64) -> Vec<FilmId> {
        let Ok(limit) = usize::try_from(count) else {
            return Vec::new();
        };
        if limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(Reverse<usize>, FilmId)> = films
            .iter()
            .filter_map(|film| film.id)
            .map(|id| (Reverse(likes.count(id)), id))
            .collect();
        scored.sort_unstable();
        scored.truncate(limit);
        scored.into_iter().map(|(_, id)| id).collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
