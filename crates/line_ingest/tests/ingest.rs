use std::collections::VecDeque;
use std::io;
use std::pin::Pin;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use line_ingest::{
    BatchSink, BufferPool, CancellationToken, CollectSink, Fields, IngestConfig, IngestError,
    RecordSink, RowDecoder, RowError, RunSummary, SinkError, SinkMode, StreamIngestor,
};
use tokio::io::{AsyncRead, ReadBuf};

/// Hands out the input in caller-chosen pieces, one piece per read.
struct ChunkedReader {
    chunks: VecDeque<Vec<u8>>,
}

impl ChunkedReader {
    fn new(chunks: Vec<Vec<u8>>) -> Self {
        Self {
            chunks: chunks.into(),
        }
    }

    fn split_at(input: &[u8], offset: usize) -> Self {
        let (head, tail) = input.split_at(offset);
        Self::new(vec![head.to_vec(), tail.to_vec()])
    }
}

impl AsyncRead for ChunkedReader {
    fn poll_read(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let chunks = &mut self.get_mut().chunks;
        while chunks.front().is_some_and(Vec::is_empty) {
            chunks.pop_front();
        }
        if let Some(front) = chunks.front_mut() {
            let n = front.len().min(buf.remaining());
            buf.put_slice(&front[..n]);
            front.drain(..n);
        }
        Poll::Ready(Ok(()))
    }
}

#[derive(Debug, Clone, PartialEq)]
struct City {
    code: String,
    name: String,
    population: Option<u64>,
}

struct CityDecoder;

impl RowDecoder for CityDecoder {
    type Record = City;

    fn arity(&self) -> usize {
        3
    }

    fn build(&self, fields: &mut Fields<'_>) -> Result<City, RowError> {
        Ok(City {
            code: fields.owned("code")?,
            name: fields.owned("name")?,
            population: fields.optional("population")?,
        })
    }
}

fn rows(n: usize) -> String {
    (0..n)
        .map(|i| format!("C{i}\tCity {i}\t{}\n", i * 10))
        .collect()
}

async fn run_batches(
    input: impl AsyncRead + Unpin,
    config: IngestConfig,
) -> (RunSummary, CollectSink<City>) {
    let sink = CollectSink::new();
    let summary = StreamIngestor::new(input, CityDecoder, config)
        .run(SinkMode::Batch(&sink), &CancellationToken::new())
        .await
        .unwrap();
    (summary, sink)
}

#[tokio::test]
async fn batch_sink_is_called_ceil_m_over_n_times() {
    let input = rows(25);
    let config = IngestConfig::default().with_batch_size(10);
    let (summary, sink) = run_batches(input.as_bytes(), config).await;

    assert_eq!(sink.batch_sizes(), vec![10, 10, 5]);
    assert_eq!(summary.records_total, 25);
    assert_eq!(summary.records_found, 25);
    assert_eq!(summary.records_processed, 25);
    assert_eq!(summary.records_added, 25);
    assert!(summary.is_clean());
}

#[tokio::test]
async fn exact_multiple_of_batch_size_has_no_empty_flush() {
    let input = rows(20);
    let config = IngestConfig::default().with_batch_size(10);
    let (_, sink) = run_batches(input.as_bytes(), config).await;
    assert_eq!(sink.batch_sizes(), vec![10, 10]);
}

#[tokio::test]
async fn records_arrive_in_input_order() {
    let input = rows(7);
    let config = IngestConfig::default().with_batch_size(3);
    let (_, sink) = run_batches(input.as_bytes(), config).await;
    let codes: Vec<_> = sink.into_records().into_iter().map(|c| c.code).collect();
    assert_eq!(codes, vec!["C0", "C1", "C2", "C3", "C4", "C5", "C6"]);
}

#[tokio::test]
async fn splitting_a_line_at_any_offset_decodes_the_same_record() {
    let input = "# comment\r\nIT\tMünchen an der Küste\t1234\r\nFR\tParis\t\r\n";
    let bytes = input.as_bytes();
    let (reference, whole) = run_batches(bytes, IngestConfig::default()).await;
    let expected = whole.into_records();
    assert_eq!(expected.len(), 2);
    assert_eq!(expected[1].population, None);

    for offset in 0..=bytes.len() {
        let config = IngestConfig::default()
            .with_initial_buffer_bytes(1)
            .with_read_chunk_bytes(5);
        let (summary, sink) = run_batches(ChunkedReader::split_at(bytes, offset), config).await;
        assert_eq!(sink.into_records(), expected, "split at {offset}");
        assert_eq!(summary, reference, "split at {offset}");
    }
}

#[tokio::test]
async fn comments_and_blanks_only() {
    let input = "# one\n\n   \n# two\n#three";
    let (summary, sink) = run_batches(input.as_bytes(), IngestConfig::default()).await;
    assert_eq!(summary.records_total, 3);
    assert_eq!(summary.records_found, 0);
    assert_eq!(summary.records_processed, 0);
    assert!(sink.batch_sizes().is_empty());
}

#[tokio::test]
async fn bad_rows_are_reported_and_skipped() {
    let input = "A\tAlpha\t1\nB\tBeta\nC\tGamma\tlots\nD\tDelta\t4\n";
    let (summary, sink) = run_batches(input.as_bytes(), IngestConfig::default()).await;

    assert_eq!(summary.records_total, 4);
    assert_eq!(summary.records_found, 4);
    assert_eq!(summary.records_processed, 2);
    assert_eq!(summary.error_messages.len(), 2);
    assert!(summary.error_messages[0].contains("malformed"));
    assert!(summary.error_messages[0].contains("B\tBeta"));
    assert!(summary.error_messages[1].starts_with("Skipping error parsing row: 3"));
    assert_eq!(sink.len(), 2);
}

#[tokio::test]
async fn invalid_utf8_is_replaced_not_fatal() {
    let input = b"X\tBad\xffName\t5\n".to_vec();
    let (summary, sink) = run_batches(&input[..], IngestConfig::default()).await;
    assert!(summary.is_clean());
    assert_eq!(sink.into_records()[0].name, "Bad\u{FFFD}Name");
}

#[tokio::test]
async fn oversized_lines_are_dropped_with_a_diagnostic() {
    let long_name = "n".repeat(200);
    let input = format!("A\tShort\t1\nB\t{long_name}\t2\nC\tAlso short\t3\n");
    let config = IngestConfig::default()
        .with_read_chunk_bytes(16)
        .with_max_line_bytes(Some(64));
    let (summary, sink) = run_batches(input.as_bytes(), config).await;

    assert_eq!(summary.records_total, 3);
    assert_eq!(summary.records_processed, 2);
    assert_eq!(summary.error_messages.len(), 1);
    assert!(summary.error_messages[0].contains("oversized"));
    assert_eq!(sink.len(), 2);
}

#[tokio::test]
async fn diagnostics_respect_the_cap() {
    let input = "bad\n".repeat(5);
    let config = IngestConfig::default().with_max_error_messages(Some(2));
    let (summary, _) = run_batches(input.as_bytes(), config).await;
    assert_eq!(summary.error_messages.len(), 2);
    assert_eq!(summary.errors_suppressed, 3);
}

#[tokio::test]
async fn filter_limits_what_reaches_the_sink() {
    let input = rows(6);
    let sink = CollectSink::new();
    let summary = StreamIngestor::new(input.as_bytes(), CityDecoder, IngestConfig::default())
        .with_filter(|city: &City| city.population.unwrap_or_default() >= 30)
        .run(SinkMode::Batch(&sink), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(summary.records_found, 6);
    assert_eq!(summary.records_processed, 3);
    assert_eq!(sink.len(), 3);
}

#[tokio::test]
async fn added_count_comes_from_the_sink() {
    let input = rows(4);
    let sink = CollectSink::accepting(|city: &City| city.code != "C1");
    let summary = StreamIngestor::new(input.as_bytes(), CityDecoder, IngestConfig::default())
        .run(SinkMode::Batch(&sink), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(summary.records_processed, 4);
    assert_eq!(summary.records_added, 3);
}

/// Buffers records internally and only reports them on finalize.
#[derive(Default)]
struct DeferredSink {
    pending: AtomicUsize,
    finalized: AtomicUsize,
}

#[async_trait]
impl RecordSink<City> for DeferredSink {
    async fn process_record(
        &self,
        _record: City,
        _cancel: &CancellationToken,
    ) -> Result<usize, SinkError> {
        self.pending.fetch_add(1, Ordering::SeqCst);
        Ok(0)
    }

    async fn finalize(&self, _cancel: &CancellationToken) -> Result<usize, SinkError> {
        self.finalized.fetch_add(1, Ordering::SeqCst);
        Ok(self.pending.swap(0, Ordering::SeqCst))
    }
}

#[tokio::test]
async fn per_record_mode_finalizes_exactly_once() {
    let input = rows(5);
    let sink = DeferredSink::default();
    let summary = StreamIngestor::new(input.as_bytes(), CityDecoder, IngestConfig::default())
        .run(SinkMode::PerRecord(&sink), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(summary.records_processed, 5);
    assert_eq!(summary.records_added, 5);
    assert_eq!(sink.finalized.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn per_record_mode_with_collect_sink() {
    let input = rows(3);
    let sink = CollectSink::new();
    let summary = StreamIngestor::new(input.as_bytes(), CityDecoder, IngestConfig::default())
        .run(SinkMode::PerRecord(&sink), &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(summary.records_added, 3);
    assert_eq!(sink.finalize_calls(), 1);
    assert!(sink.batch_sizes().is_empty());
}

/// Cancels the run from inside the first batch call.
struct CancellingSink {
    cancel: CancellationToken,
    calls: AtomicUsize,
}

#[async_trait]
impl BatchSink<City> for CancellingSink {
    async fn process_batch(
        &self,
        batch: Vec<City>,
        _cancel: &CancellationToken,
    ) -> Result<usize, SinkError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.cancel.cancel();
        Ok(batch.len())
    }
}

#[tokio::test]
async fn cancellation_aborts_and_returns_buffers() {
    let pool = Arc::new(BufferPool::new());
    let cancel = CancellationToken::new();
    let sink = CancellingSink {
        cancel: cancel.clone(),
        calls: AtomicUsize::new(0),
    };
    let input = rows(50);
    let config = IngestConfig::default()
        .with_batch_size(5)
        .with_read_chunk_bytes(32)
        .with_pool(pool.clone());

    let err = StreamIngestor::new(input.as_bytes(), CityDecoder, config)
        .run(SinkMode::Batch(&sink), &cancel)
        .await
        .unwrap_err();

    assert!(err.is_cancelled());
    assert_eq!(sink.calls.load(Ordering::SeqCst), 1);
    assert_eq!(pool.idle_buffers(), 2);
}

struct FailingSink;

#[async_trait]
impl BatchSink<City> for FailingSink {
    async fn process_batch(
        &self,
        _batch: Vec<City>,
        _cancel: &CancellationToken,
    ) -> Result<usize, SinkError> {
        Err("database unavailable".into())
    }
}

#[tokio::test]
async fn sink_failure_aborts_the_run() {
    let input = rows(2);
    let err = StreamIngestor::new(input.as_bytes(), CityDecoder, IngestConfig::default())
        .run(SinkMode::Batch(&FailingSink), &CancellationToken::new())
        .await
        .unwrap_err();
    assert!(matches!(err, IngestError::Sink { .. }));
    assert!(err.to_string().contains("database unavailable"));
}

#[tokio::test]
async fn very_long_lines_are_reassembled() {
    let pool = Arc::new(BufferPool::new());
    let long_name = "x".repeat(100_000);
    let input = format!("A\t{long_name}\t1\nB\tshort\t2\n");
    let config = IngestConfig::default()
        .with_initial_buffer_bytes(16)
        .with_read_chunk_bytes(1024)
        .with_pool(pool);
    let (summary, sink) = run_batches(input.as_bytes(), config).await;
    assert!(summary.is_clean());
    assert_eq!(sink.into_records()[0].name.len(), 100_000);
}
