//! Output serialization for the document collection.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::document_set::DocumentSet;

/// Error type for output serialization.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// The output file could not be created or flushed.
    #[error("failed to write output {path}: {source}")]
    Write {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The record collection could not be encoded.
    #[error("failed to encode document collection: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Write the document collection as a pretty-printed JSON array.
///
/// Records appear in set order (first-established email key order). The
/// file is held open only for the duration of the write and flushed before
/// returning.
pub fn write_documents(path: &Path, documents: &DocumentSet) -> Result<(), SerializeError> {
    let file = File::create(path).map_err(|source| SerializeError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, documents)?;
    writer.flush().map_err(|source| SerializeError::Write {
        path: path.to_path_buf(),
        source,
    })
}
