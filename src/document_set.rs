//! Insertion-ordered person record set keyed by canonical email.

use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

use crate::types::{CanonicalEmail, PersonRecord};

/// The keyed record set produced by the build phase.
///
/// Explicit ordered-map semantics: records iterate in the order their email
/// key was first established, and inserting a record under an existing key
/// replaces the value while keeping the original position. Serializes as a
/// JSON array of records in set order.
#[derive(Debug, Clone, Default)]
pub struct DocumentSet {
    records: IndexMap<CanonicalEmail, PersonRecord>,
}

impl DocumentSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record keyed by its resolved email.
    ///
    /// A colliding email replaces the earlier record's content but keeps
    /// its position (last-write-wins).
    pub fn insert(&mut self, record: PersonRecord) {
        self.records.insert(record.email.clone(), record);
    }

    /// Whether a record exists for this email.
    pub fn contains(&self, email: &CanonicalEmail) -> bool {
        self.records.contains_key(email)
    }

    /// Borrow a record by email.
    pub fn get(&self, email: &CanonicalEmail) -> Option<&PersonRecord> {
        self.records.get(email)
    }

    /// Mutably borrow a record by email.
    pub fn get_mut(&mut self, email: &CanonicalEmail) -> Option<&mut PersonRecord> {
        self.records.get_mut(email)
    }

    /// Iterate records in set order.
    pub fn iter(&self) -> impl Iterator<Item = &PersonRecord> {
        self.records.values()
    }

    /// Iterate records mutably in set order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PersonRecord> {
        self.records.values_mut()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the set, yielding records in set order.
    pub fn into_records(self) -> Vec<PersonRecord> {
        self.records.into_values().collect()
    }
}

impl Serialize for DocumentSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
