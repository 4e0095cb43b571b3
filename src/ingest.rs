//! Row ingestion from the delimited roster source.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::RosterRow;

/// Error type for roster ingestion.
///
/// Any variant is fatal: the pipeline aborts before producing output.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The input file could not be opened.
    #[error("failed to open roster input {path}: {source}")]
    Open {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// A row could not be read or decoded.
    #[error("failed to read roster rows: {0}")]
    Read(#[from] csv::Error),
}

/// Read the full roster into an ordered row sequence.
///
/// The file is held open only for the duration of the read. The header row
/// is required; recognized columns are matched by name, unrecognized
/// columns are ignored, and missing recognized columns leave the field
/// absent for every row.
pub fn read_rows(path: &Path) -> Result<Vec<RosterRow>, IngestError> {
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    read_rows_from_reader(file)
}

/// Read roster rows from any reader.
///
/// Split out from [`read_rows`] so tests can ingest in-memory CSV text.
pub fn read_rows_from_reader<R: io::Read>(reader: R) -> Result<Vec<RosterRow>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        let row: RosterRow = result?;
        rows.push(row);
    }
    Ok(rows)
}
