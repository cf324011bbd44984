#![forbid(unsafe_code)]
//! Typed, bounded-memory parsers for the GeoNames export files.
//!
//! Built on [`line_ingest`]: every file kind is a [`line_ingest::RowDecoder`]
//! and every parse is one [`line_ingest::StreamIngestor`] run, so the
//! all-countries dump streams through a fixed pair of scratch buffers no
//! matter how large it is.
//!
//! ## Supported files
//! | File | Decoder | Record |
//! |---|---|---|
//! | `countryInfo.txt` | [`CountryInfoDecoder`] | [`CountryInfoRecord`] |
//! | `admin1CodesASCII.txt`, `admin2Codes.txt` | [`AdminCodeDecoder`] | [`AdminCodeRecord`] |
//! | `{ISO}.txt`, `allCountries.txt` | [`GeonameDecoder`] | [`GeonameRecord`] |
//! | `alternateNamesV2` | [`AlternateNameDecoder`] | [`AlternateNameRecord`] |
//! | `timeZones.txt` | [`TimeZoneDecoder`] | [`TimeZoneRecord`] |
//! | postal `{ISO}.txt` | [`PostalCodeDecoder`] | [`PostalCodeRecord`] |
//!
//! ## Acquisition
//! - Pass any [`tokio::io::AsyncRead`] to the `parse_*` methods of [`GeonamesParser`].
//! - Or implement [`EntryProvider`] (HTTP + unzip, object storage, ...) and use the
//!   `parse_entry_*` methods, which resolve the entry through [`Dataset`] and turn a
//!   missing entry or invalid ISO code into a single-error [`line_ingest::RunSummary`].
//!   [`LocalDirectory`] serves already extracted files from disk.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use geonames::{groups, GeonameRecord, GeonamesParser};
//! use line_ingest::{CancellationToken, JsonlSink, SinkMode, StringPool};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let parser = GeonamesParser::builder()
//!     .batch_size(5_000)
//!     .interner(Arc::new(StringPool::default()))
//!     .build();
//! let sink = JsonlSink::create("out/places.jsonl").await?;
//! let file = geonames::open_file("dumps/IT.txt").await?;
//!
//! let summary = parser
//!     .parse_geonames(
//!         file,
//!         SinkMode::Batch(&sink),
//!         Some(Box::new(|place: &GeonameRecord| {
//!             place.feature_code.is_some_and(groups::is_populated_place)
//!         })),
//!         &CancellationToken::new(),
//!     )
//!     .await?;
//! println!(
//!     "{} rows, {} places written, {} problems",
//!     summary.records_total,
//!     summary.records_added,
//!     summary.error_messages.len()
//! );
//! # Ok(()) }
//! ```
//!
//! Logging goes through `tracing`; install a subscriber to see per-run and per-batch events.

mod catalog;
mod decoders;
mod enums;
mod error;
mod feature_code;
mod parser;
mod records;
mod source;

pub use catalog::{
    normalize_iso_code, CountrySelection, Dataset, ALL_COUNTRIES, DUMP_BASE_URL,
    FULL_POSTAL_COUNTRIES, POSTAL_BASE_URL,
};
pub use decoders::{
    AdminCodeDecoder, AlternateNameDecoder, CountryInfoDecoder, GeonameDecoder,
    PostalCodeDecoder, TimeZoneDecoder, TIME_ZONE_HEADER,
};
pub use enums::{groups, AdminLevel, FeatureClass};
pub use error::GeonamesError;
pub use feature_code::FeatureCode;
pub use parser::{GeonamesParser, GeonamesParserBuilder};
pub use records::{
    AdminCodeRecord, AlternateNameRecord, CountryInfoRecord, GeonameRecord, PostalCodeRecord,
    TimeZoneRecord,
};
pub use source::{open_file, EntryProvider, EntryReader, LocalDirectory};
