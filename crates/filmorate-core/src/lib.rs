//! # filmorate-core
//!
//! The in-memory catalog for Filmorate - THE LOGIC.
//!
//! This crate tracks films and users, lets users like films and befriend
//! each other, and ranks films by popularity.
//!
//! ## Layers (leaves first)
//!
//! - `store`: one [`EntityStore`] per record type; ids, domain rules, uniqueness
//! - `relation`: likes ([`LikeIndex`]) and friendship ([`SymmetricRelation`])
//! - `ranking`: most-liked films, recomputed on every call
//! - `catalog`: the [`Catalog`] facade tying them together
//!
//! ## Architectural Constraints
//!
//! - Synchronous and single-owner: sharing is the caller's job (one lock)
//! - Deterministic: `BTreeMap`/`BTreeSet` only, ties broken by id
//! - Volatile: nothing is written to disk
//! - Has NO async, NO network dependencies (pure Rust)

// =============================================================================
// MODULES
// =============================================================================

pub mod catalog;
pub mod clock;
pub mod model;
pub mod primitives;
pub mod ranking;
pub mod relation;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// RE-EXPORTS: Core Types
// =============================================================================

pub use types::{ErrorKind, FilmId, FilmorateError, UserId};

// =============================================================================
// RE-EXPORTS: Catalog
// =============================================================================

pub use catalog::{Catalog, CatalogStats};
pub use clock::{Clock, FixedClock, SystemClock};
pub use model::{Film, User};
pub use ranking::Ranking;
pub use relation::{Friendships, LikeIndex, SymmetricRelation};
pub use store::{Entity, EntityStore};
