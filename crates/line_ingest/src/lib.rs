#![forbid(unsafe_code)]
//! Streaming line decoder and batching engine for large delimiter-separated files.
//!
//! The crate knows nothing about any particular file layout. It provides:
//! - A pull-based line reconstructor over any [`tokio::io::AsyncRead`] that
//!   handles lines straddling read chunks.
//! - Pooled scratch buffers that grow by doubling, rented once per run.
//! - The [`RowDecoder`] seam where a format plugs in its column coercions.
//! - Batch and per-record sink dispatch with a single [`RunSummary`] per run.
//!
//! Bad rows never fail a run: they are counted and described in
//! [`RunSummary::error_messages`]. Only stream failures, sink failures and
//! cancellation surface as [`IngestError`].

mod config;
mod decode;
mod defaults;
mod error;
mod ingest;
mod intern;
mod pool;
mod reader;
mod row;
mod sink;
mod summary;

pub use config::IngestConfig;
pub use decode::decode_line;
pub use defaults::{
    DEFAULT_BATCH_SIZE, DEFAULT_COMMENT_MARKER, DEFAULT_INITIAL_BUFFER_BYTES,
    DEFAULT_MAX_ERROR_MESSAGES, DEFAULT_READ_CHUNK_BYTES, FIELD_DELIMITER,
};
pub use error::{IngestError, RowError, SinkError};
pub use ingest::{RecordFilter, StreamIngestor};
pub use intern::{Interner, NoInterning, StringPool, DEFAULT_STRING_POOL_SLOTS};
pub use pool::{BufferPool, ScratchBuffers};
pub use reader::{LineReader, LineSpan};
pub use row::{parse_date, Fields, RowDecoder};
pub use sink::{BatchSink, CollectSink, JsonlSink, RecordSink, SinkMode};
pub use summary::RunSummary;

pub use tokio_util::sync::CancellationToken;
