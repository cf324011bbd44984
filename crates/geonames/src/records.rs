//! Typed rows for each GeoNames export file.
//!
//! Every record owns all of its columns. Text columns that are absent in the
//! file are kept as empty strings so that [`to_row`](GeonameRecord::to_row)
//! writes back exactly what was read; numeric and date columns that may be
//! absent are `Option`s.
//!
//! Columns that repeat across millions of rows (country, admin and language
//! codes, time-zone ids) are `Arc<str>` so a decoder can share one allocation
//! per distinct value.

use std::fmt::{Display, Write as _};
use std::sync::Arc;

use serde::Serialize;
use time::Date;

use crate::enums::{AdminLevel, FeatureClass};
use crate::feature_code::FeatureCode;

/// One row of `countryInfo.txt`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryInfoRecord {
    pub iso: Arc<str>,
    pub iso3: String,
    pub iso_numeric: String,
    pub fips: String,
    pub country: String,
    pub capital: String,
    /// Square kilometres. [`to_row`](Self::to_row) writes the shortest decimal
    /// form, so an exponent such as `1.4E7` comes back as `14000000`.
    pub area: f64,
    pub population: i64,
    pub continent: Arc<str>,
    pub tld: String,
    pub currency_code: Arc<str>,
    pub currency_name: String,
    pub phone: String,
    pub postal_code_format: String,
    pub postal_code_regex: String,
    /// Comma-separated language tags, e.g. `en-US,es-US`.
    pub languages: String,
    pub geoname_id: u32,
    /// Comma-separated ISO codes of bordering countries.
    pub neighbours: String,
    pub equivalent_fips_code: String,
}

impl CountryInfoRecord {
    pub const COLUMNS: usize = 19;

    pub fn to_row(&self) -> String {
        RowWriter::default()
            .text(&self.iso)
            .text(&self.iso3)
            .text(&self.iso_numeric)
            .text(&self.fips)
            .text(&self.country)
            .text(&self.capital)
            .value(self.area)
            .value(self.population)
            .text(&self.continent)
            .text(&self.tld)
            .text(&self.currency_code)
            .text(&self.currency_name)
            .text(&self.phone)
            .text(&self.postal_code_format)
            .text(&self.postal_code_regex)
            .text(&self.languages)
            .value(self.geoname_id)
            .text(&self.neighbours)
            .text(&self.equivalent_fips_code)
            .finish()
    }
}

/// One row of `admin1CodesASCII.txt` or `admin2Codes.txt`.
///
/// The composite `code` is split into its parts when the row is decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminCodeRecord {
    pub level: AdminLevel,
    /// Full dotted code, e.g. `US.CA` or `US.CA.037`.
    pub code: String,
    pub country_code: Arc<str>,
    pub admin1_code: Arc<str>,
    /// Present only for [`AdminLevel::Admin2`].
    pub admin2_code: Option<Arc<str>>,
    pub name: String,
    pub name_ascii: String,
    pub geoname_id: u32,
}

impl AdminCodeRecord {
    pub const COLUMNS: usize = 4;

    pub fn to_row(&self) -> String {
        RowWriter::default()
            .text(&self.code)
            .text(&self.name)
            .text(&self.name_ascii)
            .value(self.geoname_id)
            .finish()
    }
}

/// One row of a per-country dump or `allCountries.txt`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeonameRecord {
    pub geoname_id: u32,
    pub name: String,
    pub ascii_name: String,
    /// Comma-separated; the full set lives in the alternate-names export.
    pub alternate_names: String,
    pub latitude: f64,
    pub longitude: f64,
    pub feature_class: Option<FeatureClass>,
    pub feature_code: Option<FeatureCode>,
    pub country_code: Arc<str>,
    pub cc2: String,
    pub admin1_code: Arc<str>,
    pub admin2_code: Arc<str>,
    pub admin3_code: Arc<str>,
    pub admin4_code: Arc<str>,
    pub population: Option<i64>,
    /// Metres.
    pub elevation: Option<i32>,
    /// Digital elevation model value, metres.
    pub dem: Option<i32>,
    pub timezone: Arc<str>,
    pub modification_date: Option<Date>,
}

impl GeonameRecord {
    pub const COLUMNS: usize = 19;

    pub fn to_row(&self) -> String {
        RowWriter::default()
            .value(self.geoname_id)
            .text(&self.name)
            .text(&self.ascii_name)
            .text(&self.alternate_names)
            .value(self.latitude)
            .value(self.longitude)
            .optional(self.feature_class)
            .optional(self.feature_code)
            .text(&self.country_code)
            .text(&self.cc2)
            .text(&self.admin1_code)
            .text(&self.admin2_code)
            .text(&self.admin3_code)
            .text(&self.admin4_code)
            .optional(self.population)
            .optional(self.elevation)
            .optional(self.dem)
            .text(&self.timezone)
            .optional(self.modification_date)
            .finish()
    }
}

/// One row of `alternateNamesV2`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlternateNameRecord {
    pub alternate_name_id: u32,
    pub geoname_id: u32,
    /// ISO 639 language code, or a pseudo code such as `post`, `link` or `iata`.
    pub iso_language: Arc<str>,
    pub alternate_name: String,
    pub is_preferred_name: bool,
    pub is_short_name: bool,
    pub is_colloquial: bool,
    pub is_historic: bool,
    pub from: Option<Date>,
    pub to: Option<Date>,
}

impl AlternateNameRecord {
    pub const COLUMNS: usize = 10;

    pub fn to_row(&self) -> String {
        RowWriter::default()
            .value(self.alternate_name_id)
            .value(self.geoname_id)
            .text(&self.iso_language)
            .text(&self.alternate_name)
            .flag(self.is_preferred_name)
            .flag(self.is_short_name)
            .flag(self.is_colloquial)
            .flag(self.is_historic)
            .optional(self.from)
            .optional(self.to)
            .finish()
    }
}

/// One row of `timeZones.txt`. Offsets are hours from GMT.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeZoneRecord {
    pub country_code: Arc<str>,
    pub timezone_id: Arc<str>,
    pub gmt_offset: f64,
    pub dst_offset: f64,
    pub raw_offset: f64,
}

impl TimeZoneRecord {
    pub const COLUMNS: usize = 5;

    pub fn to_row(&self) -> String {
        RowWriter::default()
            .text(&self.country_code)
            .text(&self.timezone_id)
            .value(self.gmt_offset)
            .value(self.dst_offset)
            .value(self.raw_offset)
            .finish()
    }
}

/// One row of a postal-code export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostalCodeRecord {
    pub country_code: Arc<str>,
    pub postal_code: String,
    pub place_name: String,
    pub admin1_name: String,
    pub admin1_code: Arc<str>,
    pub admin2_name: String,
    pub admin2_code: Arc<str>,
    pub admin3_name: String,
    pub admin3_code: Arc<str>,
    pub latitude: f64,
    pub longitude: f64,
    /// 1 = estimated, 4 = geonameid, 6 = centroid of addresses or shape.
    pub accuracy: Option<i32>,
}

impl PostalCodeRecord {
    pub const COLUMNS: usize = 12;

    pub fn to_row(&self) -> String {
        RowWriter::default()
            .text(&self.country_code)
            .text(&self.postal_code)
            .text(&self.place_name)
            .text(&self.admin1_name)
            .text(&self.admin1_code)
            .text(&self.admin2_name)
            .text(&self.admin2_code)
            .text(&self.admin3_name)
            .text(&self.admin3_code)
            .value(self.latitude)
            .value(self.longitude)
            .optional(self.accuracy)
            .finish()
    }
}

/// Tab-joins columns using the export conventions: empty for absent values,
/// `1` or empty for flags.
#[derive(Default)]
struct RowWriter {
    line: String,
    columns: usize,
}

impl RowWriter {
    fn separate(&mut self) {
        if self.columns > 0 {
            self.line.push('\t');
        }
        self.columns += 1;
    }

    fn text(mut self, value: &str) -> Self {
        self.separate();
        self.line.push_str(value);
        self
    }

    fn value(mut self, value: impl Display) -> Self {
        self.separate();
        let _ = write!(self.line, "{value}");
        self
    }

    fn optional<T: Display>(self, value: Option<T>) -> Self {
        match value {
            Some(value) => self.value(value),
            None => self.text(""),
        }
    }

    fn flag(self, value: bool) -> Self {
        self.text(if value { "1" } else { "" })
    }

    fn finish(self) -> String {
        self.line
    }
}
