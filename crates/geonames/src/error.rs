use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures that stop a run before any row is read.
///
/// The parser facade folds these into a single-error
/// [`RunSummary`](line_ingest::RunSummary); they are public so adapters
/// built on [`EntryProvider`](crate::EntryProvider) can report them too.
#[derive(Debug, Error)]
pub enum GeonamesError {
    #[error("Invalid ISO code: {code}, only ISO 2-alpha or 'ALL'")]
    InvalidIsoCode { code: String },
    #[error("No .txt file found for ISO code: {key}")]
    MissingEntry { key: String },
    #[error("failed to open `{path}`: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to open entry `{key}`: {source}")]
    Entry {
        key: String,
        #[source]
        source: io::Error,
    },
}
