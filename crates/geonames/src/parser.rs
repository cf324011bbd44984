use std::sync::Arc;

use line_ingest::{
    BufferPool, CancellationToken, IngestConfig, IngestError, Interner, NoInterning,
    RecordFilter, RowDecoder, RunSummary, SinkMode, StreamIngestor,
};
use tokio::io::AsyncRead;
use tracing::{debug, warn};

use crate::catalog::{normalize_iso_code, Dataset};
use crate::decoders::{
    AdminCodeDecoder, AlternateNameDecoder, CountryInfoDecoder, GeonameDecoder,
    PostalCodeDecoder, TimeZoneDecoder,
};
use crate::enums::AdminLevel;
use crate::error::GeonamesError;
use crate::records::{
    AdminCodeRecord, AlternateNameRecord, CountryInfoRecord, GeonameRecord, PostalCodeRecord,
    TimeZoneRecord,
};
use crate::source::EntryProvider;

/// Builder for [`GeonamesParser`].
#[derive(Clone)]
pub struct GeonamesParserBuilder {
    config: IngestConfig,
    interner: Arc<dyn Interner>,
}

impl Default for GeonamesParserBuilder {
    fn default() -> Self {
        Self {
            config: IngestConfig::default(),
            interner: Arc::new(NoInterning),
        }
    }
}

impl GeonamesParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records per batch-sink call. Defaults to [`line_ingest::DEFAULT_BATCH_SIZE`]; zero
    /// falls back to the default.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.config.batch_size = batch_size;
        self
    }

    /// Shares repeated code columns between records. Defaults to no interning.
    pub fn interner(mut self, interner: Arc<dyn Interner>) -> Self {
        self.interner = interner;
        self
    }

    /// Diagnostics kept per run before the rest are only counted.
    ///
    /// Defaults to [`line_ingest::DEFAULT_MAX_ERROR_MESSAGES`]; `None` keeps every message.
    pub fn max_error_messages(mut self, limit: Option<usize>) -> Self {
        self.config.max_error_messages = limit;
        self
    }

    /// Lines longer than this are skipped with a diagnostic.
    pub fn max_line_bytes(mut self, limit: Option<usize>) -> Self {
        self.config.max_line_bytes = limit;
        self
    }

    pub fn read_chunk_bytes(mut self, bytes: usize) -> Self {
        self.config.read_chunk_bytes = bytes;
        self
    }

    pub fn initial_buffer_bytes(mut self, bytes: usize) -> Self {
        self.config.initial_buffer_bytes = bytes;
        self
    }

    /// Rents scratch buffers from `pool` instead of the process-wide one.
    pub fn buffer_pool(mut self, pool: Arc<BufferPool>) -> Self {
        self.config.pool = Some(pool);
        self
    }

    pub fn build(self) -> GeonamesParser {
        GeonamesParser {
            config: self.config,
            interner: self.interner,
        }
    }
}

/// Entry point for parsing GeoNames exports.
///
/// Every method runs one pass over one stream and returns its
/// [`RunSummary`]. Bad rows end up in [`RunSummary::error_messages`];
/// failures to find or open the input produce a summary holding a single
/// message. Only sink failures, stream read errors and cancellation are
/// returned as [`IngestError`].
///
/// ```no_run
/// use geonames::{GeonamesParser, LocalDirectory};
/// use line_ingest::{CancellationToken, CollectSink, SinkMode};
///
/// # async fn demo() -> Result<(), line_ingest::IngestError> {
/// let parser = GeonamesParser::builder().batch_size(500).build();
/// let sink = CollectSink::new();
/// let summary = parser
///     .parse_entry_geonames(
///         &LocalDirectory::new("dumps"),
///         "it",
///         SinkMode::Batch(&sink),
///         None,
///         &CancellationToken::new(),
///     )
///     .await?;
/// println!("{} places", summary.records_added);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct GeonamesParser {
    config: IngestConfig,
    interner: Arc<dyn Interner>,
}

impl Default for GeonamesParser {
    fn default() -> Self {
        GeonamesParserBuilder::default().build()
    }
}

impl GeonamesParser {
    pub fn builder() -> GeonamesParserBuilder {
        GeonamesParserBuilder::default()
    }

    pub fn config(&self) -> &IngestConfig {
        &self.config
    }

    pub async fn parse_country_info<R: AsyncRead + Unpin>(
        &self,
        reader: R,
        sink: SinkMode<'_, CountryInfoRecord>,
        filter: Option<RecordFilter<CountryInfoRecord>>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        let decoder = CountryInfoDecoder::new(self.interner.clone());
        self.run(reader, decoder, sink, filter, cancel).await
    }

    pub async fn parse_admin_codes<R: AsyncRead + Unpin>(
        &self,
        level: AdminLevel,
        reader: R,
        sink: SinkMode<'_, AdminCodeRecord>,
        filter: Option<RecordFilter<AdminCodeRecord>>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        let decoder = AdminCodeDecoder::new(level, self.interner.clone());
        self.run(reader, decoder, sink, filter, cancel).await
    }

    pub async fn parse_geonames<R: AsyncRead + Unpin>(
        &self,
        reader: R,
        sink: SinkMode<'_, GeonameRecord>,
        filter: Option<RecordFilter<GeonameRecord>>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        let decoder = GeonameDecoder::new(self.interner.clone());
        self.run(reader, decoder, sink, filter, cancel).await
    }

    pub async fn parse_alternate_names<R: AsyncRead + Unpin>(
        &self,
        reader: R,
        sink: SinkMode<'_, AlternateNameRecord>,
        filter: Option<RecordFilter<AlternateNameRecord>>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        let decoder = AlternateNameDecoder::new(self.interner.clone());
        self.run(reader, decoder, sink, filter, cancel).await
    }

    pub async fn parse_time_zones<R: AsyncRead + Unpin>(
        &self,
        reader: R,
        sink: SinkMode<'_, TimeZoneRecord>,
        filter: Option<RecordFilter<TimeZoneRecord>>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        let decoder = TimeZoneDecoder::new(self.interner.clone());
        self.run(reader, decoder, sink, filter, cancel).await
    }

    pub async fn parse_postal_codes<R: AsyncRead + Unpin>(
        &self,
        reader: R,
        sink: SinkMode<'_, PostalCodeRecord>,
        filter: Option<RecordFilter<PostalCodeRecord>>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        let decoder = PostalCodeDecoder::new(self.interner.clone());
        self.run(reader, decoder, sink, filter, cancel).await
    }

    pub async fn parse_entry_country_info(
        &self,
        provider: &dyn EntryProvider,
        sink: SinkMode<'_, CountryInfoRecord>,
        filter: Option<RecordFilter<CountryInfoRecord>>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        let decoder = CountryInfoDecoder::new(self.interner.clone());
        self.run_entry(provider, Ok(Dataset::CountryInfo), decoder, sink, filter, cancel)
            .await
    }

    pub async fn parse_entry_admin_codes(
        &self,
        provider: &dyn EntryProvider,
        level: AdminLevel,
        sink: SinkMode<'_, AdminCodeRecord>,
        filter: Option<RecordFilter<AdminCodeRecord>>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        let dataset = match level {
            AdminLevel::Admin1 => Dataset::Admin1Codes,
            AdminLevel::Admin2 => Dataset::Admin2Codes,
        };
        let decoder = AdminCodeDecoder::new(level, self.interner.clone());
        self.run_entry(provider, Ok(dataset), decoder, sink, filter, cancel)
            .await
    }

    pub async fn parse_entry_time_zones(
        &self,
        provider: &dyn EntryProvider,
        sink: SinkMode<'_, TimeZoneRecord>,
        filter: Option<RecordFilter<TimeZoneRecord>>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        let decoder = TimeZoneDecoder::new(self.interner.clone());
        self.run_entry(provider, Ok(Dataset::TimeZones), decoder, sink, filter, cancel)
            .await
    }

    /// Parses the per-country dump for `iso_code`, or `allCountries` for `ALL`.
    pub async fn parse_entry_geonames(
        &self,
        provider: &dyn EntryProvider,
        iso_code: &str,
        sink: SinkMode<'_, GeonameRecord>,
        filter: Option<RecordFilter<GeonameRecord>>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        let dataset = normalize_iso_code(iso_code).map(Dataset::Geonames);
        let decoder = GeonameDecoder::new(self.interner.clone());
        self.run_entry(provider, dataset, decoder, sink, filter, cancel)
            .await
    }

    pub async fn parse_entry_alternate_names(
        &self,
        provider: &dyn EntryProvider,
        iso_code: &str,
        sink: SinkMode<'_, AlternateNameRecord>,
        filter: Option<RecordFilter<AlternateNameRecord>>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        let dataset = normalize_iso_code(iso_code).map(Dataset::AlternateNames);
        let decoder = AlternateNameDecoder::new(self.interner.clone());
        self.run_entry(provider, dataset, decoder, sink, filter, cancel)
            .await
    }

    /// `full` selects the full-resolution export for the countries that have one.
    pub async fn parse_entry_postal_codes(
        &self,
        provider: &dyn EntryProvider,
        iso_code: &str,
        full: bool,
        sink: SinkMode<'_, PostalCodeRecord>,
        filter: Option<RecordFilter<PostalCodeRecord>>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        let dataset = normalize_iso_code(iso_code)
            .map(|selection| Dataset::PostalCodes { selection, full });
        let decoder = PostalCodeDecoder::new(self.interner.clone());
        self.run_entry(provider, dataset, decoder, sink, filter, cancel)
            .await
    }

    async fn run<R, D>(
        &self,
        reader: R,
        decoder: D,
        sink: SinkMode<'_, D::Record>,
        filter: Option<RecordFilter<D::Record>>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError>
    where
        R: AsyncRead + Unpin,
        D: RowDecoder,
    {
        StreamIngestor::new(reader, decoder, self.config.clone())
            .with_optional_filter(filter)
            .run(sink, cancel)
            .await
    }

    async fn run_entry<D: RowDecoder>(
        &self,
        provider: &dyn EntryProvider,
        dataset: Result<Dataset, GeonamesError>,
        decoder: D,
        sink: SinkMode<'_, D::Record>,
        filter: Option<RecordFilter<D::Record>>,
        cancel: &CancellationToken,
    ) -> Result<RunSummary, IngestError> {
        if cancel.is_cancelled() {
            return Err(IngestError::Cancelled);
        }

        let dataset = match dataset {
            Ok(dataset) => dataset,
            Err(err) => return Ok(acquisition_failure(err)),
        };
        let key = dataset.entry_key();
        debug!(entry = %key, url = %dataset.url(), "opening dataset entry");

        let reader = match provider.open_entry(&key).await {
            Ok(Some(reader)) => reader,
            Ok(None) => return Ok(acquisition_failure(GeonamesError::MissingEntry { key })),
            Err(source) => return Ok(acquisition_failure(GeonamesError::Entry { key, source })),
        };

        self.run(reader, decoder, sink, filter, cancel).await
    }
}

fn acquisition_failure(err: GeonamesError) -> RunSummary {
    warn!("{err}");
    RunSummary::error(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use line_ingest::{DEFAULT_BATCH_SIZE, DEFAULT_MAX_ERROR_MESSAGES};

    #[test]
    fn builder_carries_settings_into_the_config() {
        let parser = GeonamesParser::builder()
            .batch_size(0)
            .max_error_messages(None)
            .max_line_bytes(Some(1024))
            .build();
        assert_eq!(parser.config().effective_batch_size(), DEFAULT_BATCH_SIZE);
        assert_eq!(parser.config().max_error_messages, None);
        assert_eq!(parser.config().max_line_bytes, Some(1024));

        let parser = GeonamesParser::default();
        assert_eq!(
            parser.config().max_error_messages,
            Some(DEFAULT_MAX_ERROR_MESSAGES)
        );
    }
}
