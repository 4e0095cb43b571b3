//! End-to-end pipeline orchestration.
//!
//! Phases run strictly in sequence, each over the complete output of its
//! predecessor: ingest → resolve identities → build documents → invert
//! hierarchy → serialize. There is no partial-success mode; a run either
//! completes deterministically or aborts before producing output.

use chrono::Utc;
use tracing::info;

use crate::builder::DocumentBuilder;
use crate::config::RunConfig;
use crate::document_set::DocumentSet;
use crate::ingest::{self, IngestError};
use crate::inversion::invert_hierarchy;
use crate::resolver::IdentityResolver;
use crate::serialize::{self, SerializeError};
use crate::types::{ObjectIdRef, RecordTemplate};

/// Error type for a pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// The roster input could not be read.
    #[error(transparent)]
    Ingest(#[from] IngestError),
    /// The document collection could not be written.
    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

/// Summary counts for a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Rows read from the roster input.
    pub rows: usize,
    /// Unique records in the output collection.
    pub records: usize,
    /// Manager → report edges materialized by the inversion.
    pub report_edges: usize,
}

/// Run the full pipeline for one configuration.
pub fn run(config: &RunConfig) -> Result<RunReport, PipelineError> {
    let rows = ingest::read_rows(&config.input)?;
    info!(rows = rows.len(), input = %config.input.display(), "roster ingested");

    let resolver = IdentityResolver::new(&config.domain);
    let identities = resolver.resolve_all(&rows);
    info!(identities = identities.len(), "identity map resolved");

    let template = RecordTemplate::new(ObjectIdRef::new(&config.account_id), Utc::now());
    let builder = DocumentBuilder::new(&resolver, &identities, &template);

    let mut documents = DocumentSet::new();
    for row in &rows {
        documents.insert(builder.build(row));
    }
    info!(records = documents.len(), "documents built");

    invert_hierarchy(&mut documents);
    let report_edges: usize = documents.iter().map(|r| r.reportees.len()).sum();
    info!(report_edges, "hierarchy inverted");

    serialize::write_documents(&config.output, &documents)?;
    info!(output = %config.output.display(), "document collection written");

    Ok(RunReport {
        rows: rows.len(),
        records: documents.len(),
        report_edges,
    })
}
