//! Destinations for decoded records.
//!
//! A sink reports how many of the records it was handed were accepted; the
//! engine never assumes that equals the number it handed over.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use serde::Serialize;
use tokio::{
    fs::{self, File, OpenOptions},
    io::{AsyncWriteExt, BufWriter},
};
use tokio_util::sync::CancellationToken;

use crate::error::SinkError;

/// Receives records a batch at a time.
#[async_trait]
pub trait BatchSink<T: Send + 'static>: Send + Sync {
    async fn process_batch(
        &self,
        batch: Vec<T>,
        cancel: &CancellationToken,
    ) -> Result<usize, SinkError>;
}

/// Receives records one at a time, with a single `finalize` at end of stream.
#[async_trait]
pub trait RecordSink<T: Send + 'static>: Send + Sync {
    async fn process_record(&self, record: T, cancel: &CancellationToken)
        -> Result<usize, SinkError>;

    /// Flushes anything the sink buffered internally. Its count is added to
    /// `records_added` exactly once per run.
    async fn finalize(&self, _cancel: &CancellationToken) -> Result<usize, SinkError> {
        Ok(0)
    }
}

/// How a run hands records over.
pub enum SinkMode<'s, T: Send + 'static> {
    /// Accumulate up to the configured batch size, then call the sink once.
    Batch(&'s dyn BatchSink<T>),
    /// Call the sink for every record, then `finalize` once.
    PerRecord(&'s dyn RecordSink<T>),
}

impl<T: Send + 'static> Clone for SinkMode<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + 'static> Copy for SinkMode<'_, T> {}

type AcceptFn<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// In-memory sink that keeps every accepted record.
///
/// Implements both sink shapes. An optional predicate can reject records,
/// which are then neither stored nor reported as added.
pub struct CollectSink<T> {
    records: Mutex<Vec<T>>,
    batch_sizes: Mutex<Vec<usize>>,
    finalize_calls: AtomicUsize,
    accept: Option<AcceptFn<T>>,
}

impl<T> Default for CollectSink<T> {
    fn default() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            batch_sizes: Mutex::new(Vec::new()),
            finalize_calls: AtomicUsize::new(0),
            accept: None,
        }
    }
}

impl<T> CollectSink<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepting(accept: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        Self {
            accept: Some(Box::new(accept)),
            ..Self::default()
        }
    }

    /// Sizes of the batches received so far, in call order.
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.batch_sizes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn finalize_calls(&self) -> usize {
        self.finalize_calls.load(Ordering::Relaxed)
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_records(self) -> Vec<T> {
        self.records
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn store(&self, incoming: impl IntoIterator<Item = T>) -> usize {
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        let before = records.len();
        match &self.accept {
            Some(accept) => records.extend(incoming.into_iter().filter(|r| accept(r))),
            None => records.extend(incoming),
        }
        records.len() - before
    }
}

impl<T: Clone> CollectSink<T> {
    pub fn records(&self) -> Vec<T> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl<T: Send + 'static> BatchSink<T> for CollectSink<T> {
    async fn process_batch(
        &self,
        batch: Vec<T>,
        _cancel: &CancellationToken,
    ) -> Result<usize, SinkError> {
        self.batch_sizes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(batch.len());
        Ok(self.store(batch))
    }
}

#[async_trait]
impl<T: Send + 'static> RecordSink<T> for CollectSink<T> {
    async fn process_record(
        &self,
        record: T,
        _cancel: &CancellationToken,
    ) -> Result<usize, SinkError> {
        Ok(self.store(std::iter::once(record)))
    }

    async fn finalize(&self, _cancel: &CancellationToken) -> Result<usize, SinkError> {
        self.finalize_calls.fetch_add(1, Ordering::Relaxed);
        Ok(0)
    }
}

#[derive(Debug)]
struct JsonlWriter {
    writer: BufWriter<File>,
    line: Vec<u8>,
}

impl JsonlWriter {
    async fn write_record<T: Serialize>(&mut self, record: T) -> Result<(), SinkError> {
        self.line.clear();
        serde_json::to_writer(&mut self.line, &record)?;
        self.line.push(b'\n');
        self.writer.write_all(&self.line).await?;
        Ok(())
    }
}

/// Appends each record as one JSON object per line.
///
/// Batches are flushed after every call; per-record output is flushed by
/// `finalize`.
#[derive(Debug)]
pub struct JsonlSink {
    path: PathBuf,
    inner: tokio::sync::Mutex<JsonlWriter>,
}

impl JsonlSink {
    pub async fn create(path: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        Ok(Self {
            path,
            inner: tokio::sync::Mutex::new(JsonlWriter {
                writer: BufWriter::new(file),
                line: Vec::new(),
            }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl<T> BatchSink<T> for JsonlSink
where
    T: Serialize + Send + 'static,
{
    async fn process_batch(
        &self,
        batch: Vec<T>,
        _cancel: &CancellationToken,
    ) -> Result<usize, SinkError> {
        let written = batch.len();
        let mut inner = self.inner.lock().await;
        for record in batch {
            inner.write_record(record).await?;
        }
        inner.writer.flush().await?;
        Ok(written)
    }
}

#[async_trait]
impl<T> RecordSink<T> for JsonlSink
where
    T: Serialize + Send + 'static,
{
    async fn process_record(
        &self,
        record: T,
        _cancel: &CancellationToken,
    ) -> Result<usize, SinkError> {
        self.inner.lock().await.write_record(record).await?;
        Ok(1)
    }

    async fn finalize(&self, _cancel: &CancellationToken) -> Result<usize, SinkError> {
        self.inner.lock().await.writer.flush().await?;
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn collect_sink_reports_only_accepted_records() {
        let sink = CollectSink::accepting(|n: &u32| n % 2 == 0);
        let cancel = CancellationToken::new();
        let added = BatchSink::process_batch(&sink, vec![1, 2, 3, 4], &cancel)
            .await
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(sink.batch_sizes(), vec![4]);
        assert_eq!(sink.into_records(), vec![2, 4]);
    }

    #[tokio::test]
    async fn jsonl_sink_writes_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.jsonl");
        let sink = JsonlSink::create(&path).await.unwrap();
        let cancel = CancellationToken::new();

        let added = BatchSink::process_batch(&sink, vec!["a", "b"], &cancel)
            .await
            .unwrap();
        assert_eq!(added, 2);
        RecordSink::process_record(&sink, "c", &cancel).await.unwrap();
        RecordSink::<&'static str>::finalize(&sink, &cancel)
            .await
            .unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "\"a\"\n\"b\"\n\"c\"\n");
    }
}
