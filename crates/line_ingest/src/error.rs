use thiserror::Error;

/// Failure reported by a sink implementation.
pub type SinkError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that abort a whole run.
///
/// Data-quality problems never show up here; they are recorded as
/// diagnostics on the [`crate::RunSummary`] instead.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed reading input stream: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },
    #[error("sink rejected records: {source}")]
    Sink {
        #[source]
        source: SinkError,
    },
    #[error("ingestion cancelled")]
    Cancelled,
}

impl From<std::io::Error> for IngestError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { source }
    }
}

impl IngestError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Why a single row could not be turned into a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("expected {expected} fields, found {found}")]
    Malformed { expected: usize, found: usize },
    #[error("field `{field}` has invalid value {value:?}: {reason}")]
    Coerce {
        field: &'static str,
        value: String,
        reason: String,
    },
}

impl RowError {
    pub fn coerce(field: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::Coerce {
            field,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}
