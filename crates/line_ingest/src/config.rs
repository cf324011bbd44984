use std::sync::Arc;

use crate::defaults::{
    DEFAULT_BATCH_SIZE, DEFAULT_INITIAL_BUFFER_BYTES, DEFAULT_MAX_ERROR_MESSAGES,
    DEFAULT_READ_CHUNK_BYTES,
};
use crate::pool::BufferPool;

/// Settings for one [`crate::StreamIngestor`] run.
///
/// Every field has a sensible default; the `with_*` setters exist so call sites
/// can chain the few they care about.
#[derive(Debug, Clone)]
pub struct IngestConfig {
    /// Number of records accumulated before a batch sink is called.
    /// Zero falls back to [`DEFAULT_BATCH_SIZE`].
    pub batch_size: usize,
    /// Starting capacity of the pooled scratch buffers, rounded up to a power of two.
    pub initial_buffer_bytes: usize,
    /// Size of a single pull from the underlying byte stream.
    pub read_chunk_bytes: usize,
    /// Lines longer than this are dropped with a diagnostic. `None` means unbounded.
    pub max_line_bytes: Option<usize>,
    /// Diagnostics retained in the summary before further ones are only counted.
    pub max_error_messages: Option<usize>,
    /// Backing store for scratch buffers. `None` uses [`BufferPool::global`].
    pub pool: Option<Arc<BufferPool>>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            initial_buffer_bytes: DEFAULT_INITIAL_BUFFER_BYTES,
            read_chunk_bytes: DEFAULT_READ_CHUNK_BYTES,
            max_line_bytes: None,
            max_error_messages: Some(DEFAULT_MAX_ERROR_MESSAGES),
            pool: None,
        }
    }
}

impl IngestConfig {
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_read_chunk_bytes(mut self, bytes: usize) -> Self {
        self.read_chunk_bytes = bytes;
        self
    }

    pub fn with_initial_buffer_bytes(mut self, bytes: usize) -> Self {
        self.initial_buffer_bytes = bytes;
        self
    }

    pub fn with_max_line_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_line_bytes = limit;
        self
    }

    pub fn with_max_error_messages(mut self, limit: Option<usize>) -> Self {
        self.max_error_messages = limit;
        self
    }

    pub fn with_pool(mut self, pool: Arc<BufferPool>) -> Self {
        self.pool = Some(pool);
        self
    }

    /// Batch threshold actually used by a run.
    pub fn effective_batch_size(&self) -> usize {
        if self.batch_size == 0 {
            DEFAULT_BATCH_SIZE
        } else {
            self.batch_size
        }
    }

    pub(crate) fn effective_read_chunk_bytes(&self) -> usize {
        self.read_chunk_bytes.max(1)
    }

    pub(crate) fn resolved_pool(&self) -> Arc<BufferPool> {
        self.pool.clone().unwrap_or_else(BufferPool::global)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_batch_size_falls_back_to_default() {
        let config = IngestConfig::default().with_batch_size(0);
        assert_eq!(config.effective_batch_size(), DEFAULT_BATCH_SIZE);

        let config = IngestConfig::default().with_batch_size(7);
        assert_eq!(config.effective_batch_size(), 7);
    }

    #[test]
    fn read_chunk_is_never_zero() {
        let config = IngestConfig::default().with_read_chunk_bytes(0);
        assert_eq!(config.effective_read_chunk_bytes(), 1);
    }
}
