use std::future::Future;

use tokio::io::AsyncRead;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::config::IngestConfig;
use crate::decode::decode_line;
use crate::error::{IngestError, SinkError};
use crate::pool::ScratchBuffers;
use crate::reader::{LineReader, LineSpan};
use crate::row::RowDecoder;
use crate::sink::SinkMode;
use crate::summary::RunSummary;

/// Predicate deciding whether a decoded record is kept.
pub type RecordFilter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Upper bound on the capacity reserved up front for a batch.
const MAX_BATCH_PREALLOCATION: usize = 4096;

/// One forward-only pass over a byte stream.
///
/// Lines flow reader → text decoder → [`RowDecoder`] → filter → sink, in
/// input order, and every stage updates the same [`RunSummary`].
pub struct StreamIngestor<R, D: RowDecoder> {
    reader: R,
    decoder: D,
    config: IngestConfig,
    filter: Option<RecordFilter<D::Record>>,
}

impl<R, D> StreamIngestor<R, D>
where
    R: AsyncRead + Unpin,
    D: RowDecoder,
{
    pub fn new(reader: R, decoder: D, config: IngestConfig) -> Self {
        Self {
            reader,
            decoder,
            config,
            filter: None,
        }
    }

    pub fn with_filter(
        mut self,
        filter: impl Fn(&D::Record) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    pub fn with_optional_filter(mut self, filter: Option<RecordFilter<D::Record>>) -> Self {
        self.filter = filter;
        self
    }

    /// Consumes the stream and returns the run's summary.
    ///
    /// Only stream read failures, sink failures and cancellation end a run
    /// early; bad rows are reported in the summary instead.
    pub async fn run(
        self,
        sink: SinkMode<'_, D::Record>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        let outcome = self.run_inner(sink, cancel).await;
        match &outcome {
            Ok(summary) => info!(
                records_total = summary.records_total,
                records_found = summary.records_found,
                records_processed = summary.records_processed,
                records_added = summary.records_added,
                errors = summary.error_messages.len(),
                "ingestion run finished"
            ),
            Err(IngestError::Cancelled) => warn!("ingestion run cancelled"),
            Err(err) => warn!("ingestion run aborted: {err}"),
        }
        outcome
    }

    async fn run_inner(
        self,
        sink: SinkMode<'_, D::Record>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        let Self {
            reader,
            decoder,
            config,
            filter,
        } = self;

        let batch_size = config.effective_batch_size();
        let max_line_bytes = config.max_line_bytes.unwrap_or(usize::MAX);
        let mut scratch = ScratchBuffers::rent(config.resolved_pool(), config.initial_buffer_bytes);
        let mut lines = LineReader::new(
            reader,
            config.effective_read_chunk_bytes(),
            config.max_line_bytes,
        );
        let mut summary = RunSummary::with_error_cap(config.max_error_messages);
        let mut dispatcher = Dispatcher::new(sink, batch_size);

        debug!(batch_size, "starting ingestion run");

        while let Some(span) = lines.next_line(&mut scratch, cancel).await? {
            let record = match span {
                LineSpan::Oversized { observed_bytes } => {
                    summary.record_oversized(observed_bytes, max_line_bytes);
                    continue;
                }
                LineSpan::Chunk { start, end } => {
                    scratch.ensure_capacity(end - start);
                    let text = decode_line(lines.chunk_bytes(start, end), scratch.chars_mut());
                    decoder.decode(text, &mut summary)
                }
                LineSpan::Spliced { len } => {
                    let (bytes, chars) = scratch.spliced_line(len);
                    let text = decode_line(bytes, chars);
                    decoder.decode(text, &mut summary)
                }
            };

            let Some(record) = record else {
                continue;
            };
            if let Some(keep) = filter.as_ref() {
                if !keep(&record) {
                    continue;
                }
            }
            dispatcher.push(record, &mut summary, cancel).await?;
        }

        dispatcher.finish(&mut summary, cancel).await?;
        debug!(
            growth_events = scratch.growth_events(),
            byte_capacity = scratch.byte_capacity(),
            "releasing scratch buffers"
        );
        Ok(summary)
    }
}

/// Batch accumulator and sink dispatch.
struct Dispatcher<'s, T: Send + 'static> {
    sink: SinkMode<'s, T>,
    batch: Vec<T>,
    batch_size: usize,
}

impl<'s, T: Send + 'static> Dispatcher<'s, T> {
    fn new(sink: SinkMode<'s, T>, batch_size: usize) -> Self {
        let batch = match sink {
            SinkMode::Batch(_) => Vec::with_capacity(batch_size.min(MAX_BATCH_PREALLOCATION)),
            SinkMode::PerRecord(_) => Vec::new(),
        };
        Self {
            sink,
            batch,
            batch_size,
        }
    }

    async fn push(
        &mut self,
        record: T,
        summary: &mut RunSummary,
        cancel: &CancellationToken,
    ) -> Result<(), IngestError> {
        match self.sink {
            SinkMode::Batch(_) => {
                self.batch.push(record);
                if self.batch.len() >= self.batch_size {
                    self.flush(summary, cancel).await?;
                }
            }
            SinkMode::PerRecord(sink) => {
                let added = guarded(cancel, sink.process_record(record, cancel)).await?;
                summary.records_processed += 1;
                summary.records_added += added as u64;
            }
        }
        Ok(())
    }

    async fn flush(
        &mut self,
        summary: &mut RunSummary,
        cancel: &CancellationToken,
    ) -> Result<(), IngestError> {
        let SinkMode::Batch(sink) = self.sink else {
            return Ok(());
        };
        if self.batch.is_empty() {
            return Ok(());
        }

        let next = Vec::with_capacity(self.batch_size.min(MAX_BATCH_PREALLOCATION));
        let batch = std::mem::replace(&mut self.batch, next);
        let handed = batch.len();
        let added = guarded(cancel, sink.process_batch(batch, cancel)).await?;
        summary.records_processed += handed as u64;
        summary.records_added += added as u64;
        debug!(batch_len = handed, added, "flushed batch");
        Ok(())
    }

    async fn finish(
        &mut self,
        summary: &mut RunSummary,
        cancel: &CancellationToken,
    ) -> Result<(), IngestError> {
        match self.sink {
            SinkMode::Batch(_) => self.flush(summary, cancel).await,
            SinkMode::PerRecord(sink) => {
                let added = guarded(cancel, sink.finalize(cancel)).await?;
                summary.records_added += added as u64;
                Ok(())
            }
        }
    }
}

/// Races a sink call against cancellation.
async fn guarded<F>(cancel: &CancellationToken, call: F) -> Result<usize, IngestError>
where
    F: Future<Output = Result<usize, SinkError>>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(IngestError::Cancelled),
        outcome = call => outcome.map_err(|source| IngestError::Sink { source }),
    }
}
