//! Column layouts for each export file, plugged into the shared row preamble.

use std::sync::Arc;

use line_ingest::{Fields, Interner, NoInterning, RowDecoder, RowError, DEFAULT_COMMENT_MARKER};

use crate::enums::{AdminLevel, FeatureClass};
use crate::feature_code::FeatureCode;
use crate::records::{
    AdminCodeRecord, AlternateNameRecord, CountryInfoRecord, GeonameRecord, PostalCodeRecord,
    TimeZoneRecord,
};

/// Header token at the start of `timeZones.txt`.
pub const TIME_ZONE_HEADER: &str = "CountryCode";

fn no_interning() -> Arc<dyn Interner> {
    Arc::new(NoInterning)
}

macro_rules! interning_decoder {
    ($name:ident) => {
        impl $name {
            pub fn new(interner: Arc<dyn Interner>) -> Self {
                Self { interner }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new(no_interning())
            }
        }
    };
}

pub struct CountryInfoDecoder {
    interner: Arc<dyn Interner>,
}

interning_decoder!(CountryInfoDecoder);

impl RowDecoder for CountryInfoDecoder {
    type Record = CountryInfoRecord;

    fn arity(&self) -> usize {
        CountryInfoRecord::COLUMNS
    }

    fn build(&self, fields: &mut Fields<'_>) -> Result<CountryInfoRecord, RowError> {
        let interner = self.interner.as_ref();
        Ok(CountryInfoRecord {
            iso: fields.interned("iso", interner)?,
            iso3: fields.owned("iso3")?,
            iso_numeric: fields.owned("iso_numeric")?,
            fips: fields.owned("fips")?,
            country: fields.owned("country")?,
            capital: fields.owned("capital")?,
            area: fields.parse("area")?,
            population: fields.parse("population")?,
            continent: fields.interned("continent", interner)?,
            tld: fields.owned("tld")?,
            currency_code: fields.interned("currency_code", interner)?,
            currency_name: fields.owned("currency_name")?,
            phone: fields.owned("phone")?,
            postal_code_format: fields.owned("postal_code_format")?,
            postal_code_regex: fields.owned("postal_code_regex")?,
            languages: fields.owned("languages")?,
            geoname_id: fields.parse("geoname_id")?,
            neighbours: fields.owned("neighbours")?,
            equivalent_fips_code: fields.owned("equivalent_fips_code")?,
        })
    }
}

/// Decodes either admin-code file; the level decides how many parts the
/// dotted code must have.
pub struct AdminCodeDecoder {
    level: AdminLevel,
    interner: Arc<dyn Interner>,
}

impl AdminCodeDecoder {
    pub fn new(level: AdminLevel, interner: Arc<dyn Interner>) -> Self {
        Self { level, interner }
    }

    pub fn level(&self) -> AdminLevel {
        self.level
    }

    fn split_code<'a>(&self, code: &'a str) -> Result<Vec<&'a str>, String> {
        let expected = self.level.code_parts();
        let parts: Vec<&str> = code.split('.').collect();
        if parts.len() != expected || parts.iter().any(|part| part.is_empty()) {
            return Err(format!(
                "expected {expected} non-empty '.'-separated parts for {:?}",
                self.level
            ));
        }
        Ok(parts)
    }
}

impl RowDecoder for AdminCodeDecoder {
    type Record = AdminCodeRecord;

    fn arity(&self) -> usize {
        AdminCodeRecord::COLUMNS
    }

    fn build(&self, fields: &mut Fields<'_>) -> Result<AdminCodeRecord, RowError> {
        let interner = self.interner.as_ref();
        let code = fields.text("code")?;
        let parts = self
            .split_code(code)
            .map_err(|reason| RowError::coerce("code", code, reason))?;

        Ok(AdminCodeRecord {
            level: self.level,
            code: code.to_string(),
            country_code: interner.intern(parts[0]),
            admin1_code: interner.intern(parts[1]),
            admin2_code: parts.get(2).map(|part| interner.intern(part)),
            name: fields.owned("name")?,
            name_ascii: fields.owned("name_ascii")?,
            geoname_id: fields.parse("geoname_id")?,
        })
    }
}

pub struct GeonameDecoder {
    interner: Arc<dyn Interner>,
}

interning_decoder!(GeonameDecoder);

impl RowDecoder for GeonameDecoder {
    type Record = GeonameRecord;

    fn arity(&self) -> usize {
        GeonameRecord::COLUMNS
    }

    fn build(&self, fields: &mut Fields<'_>) -> Result<GeonameRecord, RowError> {
        let interner = self.interner.as_ref();
        Ok(GeonameRecord {
            geoname_id: fields.parse("geoname_id")?,
            name: fields.owned("name")?,
            ascii_name: fields.owned("ascii_name")?,
            alternate_names: fields.owned("alternate_names")?,
            latitude: fields.parse("latitude")?,
            longitude: fields.parse("longitude")?,
            feature_class: FeatureClass::parse(fields.text("feature_class")?),
            feature_code: FeatureCode::parse(fields.text("feature_code")?),
            country_code: fields.interned("country_code", interner)?,
            cc2: fields.owned("cc2")?,
            admin1_code: fields.interned("admin1_code", interner)?,
            admin2_code: fields.interned("admin2_code", interner)?,
            admin3_code: fields.interned("admin3_code", interner)?,
            admin4_code: fields.interned("admin4_code", interner)?,
            population: fields.optional("population")?,
            elevation: fields.optional("elevation")?,
            dem: fields.optional("dem")?,
            timezone: fields.interned("timezone", interner)?,
            modification_date: fields.date("modification_date")?,
        })
    }
}

pub struct AlternateNameDecoder {
    interner: Arc<dyn Interner>,
}

interning_decoder!(AlternateNameDecoder);

impl RowDecoder for AlternateNameDecoder {
    type Record = AlternateNameRecord;

    fn arity(&self) -> usize {
        AlternateNameRecord::COLUMNS
    }

    fn build(&self, fields: &mut Fields<'_>) -> Result<AlternateNameRecord, RowError> {
        Ok(AlternateNameRecord {
            alternate_name_id: fields.parse("alternate_name_id")?,
            geoname_id: fields.parse("geoname_id")?,
            iso_language: fields.interned("iso_language", self.interner.as_ref())?,
            alternate_name: fields.owned("alternate_name")?,
            is_preferred_name: fields.flag("is_preferred_name")?,
            is_short_name: fields.flag("is_short_name")?,
            is_colloquial: fields.flag("is_colloquial")?,
            is_historic: fields.flag("is_historic")?,
            from: fields.date("from")?,
            to: fields.date("to")?,
        })
    }
}

/// `timeZones.txt` starts with a column-name header instead of a comment.
pub struct TimeZoneDecoder {
    interner: Arc<dyn Interner>,
}

interning_decoder!(TimeZoneDecoder);

impl RowDecoder for TimeZoneDecoder {
    type Record = TimeZoneRecord;

    fn arity(&self) -> usize {
        TimeZoneRecord::COLUMNS
    }

    fn is_skippable(&self, line: &str) -> bool {
        line.starts_with(DEFAULT_COMMENT_MARKER) || line.starts_with(TIME_ZONE_HEADER)
    }

    fn build(&self, fields: &mut Fields<'_>) -> Result<TimeZoneRecord, RowError> {
        let interner = self.interner.as_ref();
        Ok(TimeZoneRecord {
            country_code: fields.interned("country_code", interner)?,
            timezone_id: fields.interned("timezone_id", interner)?,
            gmt_offset: fields.parse("gmt_offset")?,
            dst_offset: fields.parse("dst_offset")?,
            raw_offset: fields.parse("raw_offset")?,
        })
    }
}

pub struct PostalCodeDecoder {
    interner: Arc<dyn Interner>,
}

interning_decoder!(PostalCodeDecoder);

impl RowDecoder for PostalCodeDecoder {
    type Record = PostalCodeRecord;

    fn arity(&self) -> usize {
        PostalCodeRecord::COLUMNS
    }

    fn build(&self, fields: &mut Fields<'_>) -> Result<PostalCodeRecord, RowError> {
        let interner = self.interner.as_ref();
        Ok(PostalCodeRecord {
            country_code: fields.interned("country_code", interner)?,
            postal_code: fields.owned("postal_code")?,
            place_name: fields.owned("place_name")?,
            admin1_name: fields.owned("admin1_name")?,
            admin1_code: fields.interned("admin1_code", interner)?,
            admin2_name: fields.owned("admin2_name")?,
            admin2_code: fields.interned("admin2_code", interner)?,
            admin3_name: fields.owned("admin3_name")?,
            admin3_code: fields.interned("admin3_code", interner)?,
            latitude: fields.parse("latitude")?,
            longitude: fields.parse("longitude")?,
            accuracy: fields.optional("accuracy")?,
        })
    }
}
