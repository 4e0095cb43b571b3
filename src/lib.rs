//! # roster-normalizer
//!
//! Name-based reporting-hierarchy resolution for organization contact
//! rosters.
//!
//! The normalizer answers one question:
//!
//! > Given a roster keyed by display names, what is each person's stable
//! > email identity, and who reports to whom?
//!
//! ## Core Contract
//!
//! 1. Derive a canonical email identity per row (supplied, synthesized, or
//!    placeholder)
//! 2. Rewrite manager-by-name references into manager-by-email references
//! 3. Derive the inverse reports-by-email relation in one pass
//!
//! ## Architecture
//!
//! ```text
//! CSV roster → Ingest → IdentityResolver → DocumentBuilder → HierarchyInverter → JSON
//!                            ↓
//!                       IdentityMap (built once, read-only after)
//! ```
//!
//! ## Determinism Guarantees
//!
//! - Email synthesis is a pure function of the display name
//! - Records serialize in first-established email key order
//! - Duplicate identities resolve by last-write-wins, keeping position

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod config;
pub mod document_set;
pub mod ingest;
pub mod inversion;
pub mod pipeline;
pub mod resolver;
pub mod serialize;
pub mod synthesis;
pub mod types;

// Re-exports
pub use builder::DocumentBuilder;
pub use config::{RunConfig, ACCOUNT_OBJECT_ID, EMAIL_DOMAIN};
pub use document_set::DocumentSet;
pub use ingest::{read_rows, read_rows_from_reader, IngestError};
pub use inversion::invert_hierarchy;
pub use pipeline::{run, PipelineError, RunReport};
pub use resolver::IdentityResolver;
pub use serialize::{write_documents, SerializeError};
pub use synthesis::synthesize_email;
pub use types::{
    Awareness, CanonicalEmail, ContactType, IdentityMap, NameKey, ObjectIdRef, PersonRecord,
    RecordTemplate, RosterRow, Sentiment, UtcDateRef,
};
