//! # Seed Files
//!
//! JSON documents that pre-load a catalog at startup:
//!
//! ```json
//! {
//!   "users": [{"email": "ann@example.com", "login": "ann"}],
//!   "films": [{"name": "Arrival", "releaseDate": "2016-11-11", "duration": 116}],
//!   "likes": [[1, 1]],
//!   "friends": []
//! }
//! ```
//!
//! Records are created in file order through the normal catalog operations,
//! so every rule applies and ids are assigned from 1. `likes` pairs are
//! `[filmId, userId]`, `friends` pairs are `[userId, userId]`, both using the
//! assigned ids.

use crate::api::{FilmRequest, UserRequest};
use crate::error::AppError;
use filmorate_core::{Catalog, CatalogStats, FilmId, UserId};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Maximum seed file size (10 MB).
pub const MAX_SEED_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Parsed seed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SeedFile {
    pub users: Vec<UserRequest>,
    pub films: Vec<FilmRequest>,
    pub likes: Vec<(u64, u64)>,
    pub friends: Vec<(u64, u64)>,
}

impl SeedFile {
    /// Read and parse a seed file after checking its path and size.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let canonical = validate_file_path(path)?;
        validate_file_size(&canonical, MAX_SEED_FILE_SIZE)?;

        let text = std::fs::read_to_string(&canonical).map_err(|e| {
            AppError::Io(format!("Cannot read seed '{}': {}", path.display(), e))
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, AppError> {
        serde_json::from_str(text).map_err(|e| AppError::Seed(format!("Invalid JSON: {}", e)))
    }

    /// Apply every entry to `catalog`, stopping at the first rejection.
    pub fn apply(self, catalog: &mut Catalog) -> Result<CatalogStats, AppError> {
        for (i, request) in self.users.into_iter().enumerate() {
            request
                .into_user()
                .and_then(|user| catalog.create_user(user))
                .map_err(|e| AppError::Seed(format!("users[{}]: {}", i, e)))?;
        }

        for (i, request) in self.films.into_iter().enumerate() {
            request
                .into_film()
                .and_then(|film| catalog.create_film(film))
                .map_err(|e| AppError::Seed(format!("films[{}]: {}", i, e)))?;
        }

        for (i, (film, user)) in self.likes.into_iter().enumerate() {
            catalog
                .add_like(FilmId(film), UserId(user))
                .map_err(|e| AppError::Seed(format!("likes[{}]: {}", i, e)))?;
        }

        for (i, (a, b)) in self.friends.into_iter().enumerate() {
            catalog
                .add_friend(UserId(a), UserId(b))
                .map_err(|e| AppError::Seed(format!("friends[{}]: {}", i, e)))?;
        }

        Ok(catalog.stats())
    }
}

// =============================================================================
// FILE CHECKS
// =============================================================================

/// Resolve symlinks and `..`, and require a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, AppError> {
    let canonical = path.canonicalize().map_err(|e| {
        AppError::Io(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(AppError::Io(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

fn validate_file_size(path: &Path, max_size: u64) -> Result<(), AppError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| AppError::Io(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(AppError::Seed(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use filmorate_core::FixedClock;

    const SEED: &str = r#"{
        "users": [
            {"email": "ann@example.com", "login": "ann"},
            {"email": "bob@example.com", "login": "bob", "name": "Bob"}
        ],
        "films": [
            {"name": "Arrival", "releaseDate": "2016-11-11", "duration": 116}
        ],
        "likes": [[1, 2]],
        "friends": [[1, 2]]
    }"#;

    fn catalog() -> Catalog {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");
        Catalog::with_clock(FixedClock(today))
    }

    #[test]
    fn applies_in_order() {
        let mut catalog = catalog();
        let stats = SeedFile::from_json(SEED)
            .expect("parse")
            .apply(&mut catalog)
            .expect("apply");

        assert_eq!(stats.user_count, 2);
        assert_eq!(stats.film_count, 1);
        assert_eq!(stats.like_count, 1);
        assert_eq!(stats.friendship_count, 1);
        assert_eq!(catalog.user(UserId(1)).expect("user").name.as_deref(), Some("ann"));
    }

    #[test]
    fn demo_seed_applies() {
        let mut catalog = catalog();
        let stats = SeedFile::from_json(include_str!("../../../demos/seed.json"))
            .expect("parse")
            .apply(&mut catalog)
            .expect("apply");

        assert_eq!(stats.user_count, 3);
        assert_eq!(stats.friendship_count, 2);
        assert_eq!(catalog.popular(1)[0].name, "Arrival");
    }

    #[test]
    fn empty_document_is_valid() {
        let stats = SeedFile::from_json("{}")
            .expect("parse")
            .apply(&mut catalog())
            .expect("apply");
        assert_eq!(stats.user_count, 0);
    }

    #[test]
    fn rule_violation_names_the_entry() {
        let seed = r#"{"films": [{"name": "Old", "releaseDate": "1890-01-01", "duration": 1}]}"#;
        let err = SeedFile::from_json(seed)
            .expect("parse")
            .apply(&mut catalog())
            .expect_err("too early");
        assert!(err.to_string().contains("films[0]"));
    }

    #[test]
    fn dangling_like_rejected() {
        let seed = r#"{"likes": [[1, 1]]}"#;
        let err = SeedFile::from_json(seed)
            .expect("parse")
            .apply(&mut catalog())
            .expect_err("no such film");
        assert!(matches!(err, AppError::Seed(_)));
    }

    #[test]
    fn unknown_key_rejected() {
        assert!(SeedFile::from_json(r#"{"movies": []}"#).is_err());
    }

    #[test]
    fn load_from_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("seed.json");
        std::fs::write(&path, SEED).expect("write");

        let seed = SeedFile::load(&path).expect("load");
        assert_eq!(seed.users.len(), 2);
    }

    #[test]
    fn directory_is_not_a_seed() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert!(matches!(SeedFile::load(dir.path()), Err(AppError::Io(_))));
    }
}
