//! # Entity Store
//!
//! The authoritative in-memory collection for one record type.
//!
//! `EntityStore<E>` is shared by films and users. Each record type plugs in
//! through the [`Entity`] trait:
//! - its identifier type
//! - its write-time domain rules (`prepare`)
//! - an optional unique key (users: email)
//!
//! ## Identifier Assignment
//!
//! Identifiers come from a counter owned by the store, starting at
//! `FIRST_ID`. The counter only moves forward, so an identifier is never
//! handed out twice, even after the record holding it is removed.

use crate::primitives::FIRST_ID;
use crate::types::FilmorateError;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// ENTITY TRAIT
// =============================================================================

/// A record type that can live in an [`EntityStore`].
pub trait Entity: Clone {
    /// Identifier type for this record.
    type Id: Copy + Ord + From<u64> + fmt::Display + fmt::Debug;

    /// Lower-case record name used in error messages.
    const KIND: &'static str;

    /// The record's identifier, if one has been assigned or supplied.
    fn id(&self) -> Option<Self::Id>;

    /// Overwrite the record's identifier.
    fn set_id(&mut self, id: Self::Id);

    /// Normalize the record and check its domain rules.
    ///
    /// May mutate the record (e.g. default a display name) before it is stored.
    fn prepare(&mut self, today: NaiveDate) -> Result<(), FilmorateError>;

    /// Key that must be unique across the store, if any.
    fn unique_key(&self) -> Option<&str> {
        None
    }

    /// The not-found error for this record type.
    fn not_found(id: Self::Id) -> FilmorateError;
}

// =============================================================================
// ENTITY STORE
// =============================================================================

/// In-memory store for one record type.
///
/// Uses `BTreeMap` so iteration order is ascending by identifier.
#[derive(Debug, Clone)]
pub struct EntityStore<E: Entity> {
    records: BTreeMap<E::Id, E>,
    /// Unique key -> owning record.
    unique_index: BTreeMap<String, E::Id>,
    next_id: u64,
}

impl<E: Entity> Default for EntityStore<E> {
    fn default() -> Self {
        Self {
            records: BTreeMap::new(),
            unique_index: BTreeMap::new(),
            next_id: FIRST_ID,
        }
    }
}

impl<E: Entity> EntityStore<E> {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record and return it as stored.
    ///
    /// Any identifier on the incoming record is ignored. A rejected record
    /// does not consume an identifier.
    pub fn create(&mut self, mut record: E, today: NaiveDate) -> Result<E, FilmorateError> {
        record.prepare(today)?;

        if let Some(key) = record.unique_key()
            && self.unique_index.contains_key(key)
        {
            return Err(Self::duplicate(key));
        }

        let id = E::Id::from(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        record.set_id(id);

        if let Some(key) = record.unique_key() {
            self.unique_index.insert(key.to_string(), id);
        }
        self.records.insert(id, record.clone());
        Ok(record)
    }

    /// Replace an existing record wholesale and return it as stored.
    ///
    /// Check order: missing id, unknown id, domain rules, uniqueness.
    pub fn update(&mut self, mut record: E, today: NaiveDate) -> Result<E, FilmorateError> {
        let Some(id) = record.id() else {
            return Err(FilmorateError::Validation(format!(
                "{} id must be specified",
                E::KIND
            )));
        };

        let old_key = self
            .records
            .get(&id)
            .ok_or_else(|| E::not_found(id))?
            .unique_key()
            .map(str::to_string);

        record.prepare(today)?;

        let new_key = record.unique_key().map(str::to_string);
        if new_key != old_key
            && let Some(key) = &new_key
            && self.unique_index.get(key).is_some_and(|owner| *owner != id)
        {
            return Err(Self::duplicate(key));
        }

        if let Some(key) = old_key {
            self.unique_index.remove(&key);
        }
        if let Some(key) = new_key {
            self.unique_index.insert(key, id);
        }
        self.records.insert(id, record.clone());
        Ok(record)
    }

    /// All records, ascending by identifier.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.records.values()
    }

    /// All records, cloned, ascending by identifier.
    #[must_use]
    pub fn find_all(&self) -> Vec<E> {
        self.records.values().cloned().collect()
    }

    /// Look up a record.
    pub fn get(&self, id: E::Id) -> Result<&E, FilmorateError> {
        self.records.get(&id).ok_or_else(|| E::not_found(id))
    }

    /// Remove a record and return it.
    pub fn remove(&mut self, id: E::Id) -> Result<E, FilmorateError> {
        let record = self.records.remove(&id).ok_or_else(|| E::not_found(id))?;
        if let Some(key) = record.unique_key() {
            self.unique_index.remove(key);
        }
        Ok(record)
    }

    /// Check whether a record exists.
    #[must_use]
    pub fn contains(&self, id: E::Id) -> bool {
        self.records.contains_key(&id)
    }

    /// Ensure a record exists, returning its not-found error otherwise.
    pub fn require(&self, id: E::Id) -> Result<(), FilmorateError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(E::not_found(id))
        }
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn duplicate(key: &str) -> FilmorateError {
        FilmorateError::Validation(format!("{} '{}' is already in use", E::KIND, key))
    }
}

// =============================================================================
// TESTS
// =============================================================================
