//! Core types for the roster normalizer.

pub mod identity;
pub mod person;
pub mod row;

pub use identity::{CanonicalEmail, IdentityMap, NameKey};
pub use person::{
    Awareness, ContactType, LogEntry, ObjectIdRef, PersonRecord, RecordTemplate, Sentiment,
    UtcDateRef, ZERO_COST,
};
pub use row::RosterRow;
