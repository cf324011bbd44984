//! Where each GeoNames export lives and what its data file is called.
//!
//! Nothing here touches the network; transports use [`Dataset::url`] and
//! [`Dataset::entry_key`] to fetch and unpack the bytes themselves.

use std::fmt;

use crate::error::GeonamesError;

pub const DUMP_BASE_URL: &str = "https://download.geonames.org/export/dump";
pub const POSTAL_BASE_URL: &str = "https://download.geonames.org/export/zip";

/// Pseudo code selecting the all-countries variant of a dataset.
pub const ALL_COUNTRIES: &str = "ALL";

/// Countries whose postal export also comes in a full-resolution variant.
pub const FULL_POSTAL_COUNTRIES: &[&str] = &["GB", "NL", "CA"];

/// A validated country selection.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum CountrySelection {
    /// Upper-case ISO 3166 alpha-2 code.
    Country(String),
    All,
}

impl fmt::Display for CountrySelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CountrySelection::Country(code) => f.write_str(code),
            CountrySelection::All => f.write_str(ALL_COUNTRIES),
        }
    }
}

/// Upper-cases `raw` and accepts two ASCII letters or `ALL`.
pub fn normalize_iso_code(raw: &str) -> Result<CountrySelection, GeonamesError> {
    let code = raw.trim().to_ascii_uppercase();
    if code == ALL_COUNTRIES {
        return Ok(CountrySelection::All);
    }
    if code.len() == 2 && code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Ok(CountrySelection::Country(code));
    }
    Err(GeonamesError::InvalidIsoCode { code })
}

/// One downloadable GeoNames export.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Dataset {
    CountryInfo,
    Admin1Codes,
    Admin2Codes,
    TimeZones,
    Geonames(CountrySelection),
    AlternateNames(CountrySelection),
    PostalCodes {
        selection: CountrySelection,
        /// Use the full-resolution file where one exists.
        full: bool,
    },
}

impl Dataset {
    /// Download location.
    pub fn url(&self) -> String {
        match self {
            Dataset::CountryInfo => format!("{DUMP_BASE_URL}/countryInfo.txt"),
            Dataset::Admin1Codes => format!("{DUMP_BASE_URL}/admin1CodesASCII.txt"),
            Dataset::Admin2Codes => format!("{DUMP_BASE_URL}/admin2Codes.txt"),
            Dataset::TimeZones => format!("{DUMP_BASE_URL}/timeZones.txt"),
            Dataset::Geonames(_) => format!("{DUMP_BASE_URL}/{}.zip", self.entry_key()),
            Dataset::AlternateNames(CountrySelection::All) => {
                format!("{DUMP_BASE_URL}/alternateNamesV2.zip")
            }
            Dataset::AlternateNames(CountrySelection::Country(code)) => {
                format!("{DUMP_BASE_URL}/alternatenames/{code}.zip")
            }
            Dataset::PostalCodes { .. } if self.uses_full_postal() => {
                format!("{POSTAL_BASE_URL}/{}.csv.zip", self.entry_key())
            }
            Dataset::PostalCodes { .. } => {
                format!("{POSTAL_BASE_URL}/{}.zip", self.entry_key())
            }
        }
    }

    /// Whether the download is a zip archive holding [`Dataset::entry_name`].
    pub fn is_archive(&self) -> bool {
        matches!(
            self,
            Dataset::Geonames(_) | Dataset::AlternateNames(_) | Dataset::PostalCodes { .. }
        )
    }

    /// Base name of the data file, e.g. `IT`, `allCountries` or `GB_full`.
    pub fn entry_key(&self) -> String {
        match self {
            Dataset::CountryInfo => "countryInfo".to_string(),
            Dataset::Admin1Codes => "admin1CodesASCII".to_string(),
            Dataset::Admin2Codes => "admin2Codes".to_string(),
            Dataset::TimeZones => "timeZones".to_string(),
            Dataset::Geonames(CountrySelection::All)
            | Dataset::PostalCodes {
                selection: CountrySelection::All,
                ..
            } => "allCountries".to_string(),
            Dataset::AlternateNames(CountrySelection::All) => "alternateNamesV2".to_string(),
            Dataset::PostalCodes {
                selection: CountrySelection::Country(code),
                ..
            } if self.uses_full_postal() => format!("{code}_full"),
            Dataset::Geonames(CountrySelection::Country(code))
            | Dataset::AlternateNames(CountrySelection::Country(code))
            | Dataset::PostalCodes {
                selection: CountrySelection::Country(code),
                ..
            } => code.clone(),
        }
    }

    /// File name of the data file, inside the archive for zipped exports.
    pub fn entry_name(&self) -> String {
        format!("{}.txt", self.entry_key())
    }

    fn uses_full_postal(&self) -> bool {
        match self {
            Dataset::PostalCodes {
                selection: CountrySelection::Country(code),
                full: true,
            } => FULL_POSTAL_COUNTRIES.contains(&code.as_str()),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(code: &str) -> CountrySelection {
        CountrySelection::Country(code.to_string())
    }

    #[test]
    fn iso_codes_are_upper_cased_and_validated() {
        assert_eq!(normalize_iso_code("it").unwrap(), country("IT"));
        assert_eq!(normalize_iso_code("all").unwrap(), CountrySelection::All);

        let err = normalize_iso_code("ita").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid ISO code: ITA, only ISO 2-alpha or 'ALL'"
        );
        assert!(normalize_iso_code("").is_err());
        assert!(normalize_iso_code("1A").is_err());
    }

    #[test]
    fn plain_text_datasets() {
        assert_eq!(
            Dataset::Admin1Codes.url(),
            "https://download.geonames.org/export/dump/admin1CodesASCII.txt"
        );
        assert_eq!(
            Dataset::TimeZones.url(),
            "https://download.geonames.org/export/dump/timeZones.txt"
        );
        assert!(!Dataset::CountryInfo.is_archive());
        assert_eq!(Dataset::CountryInfo.entry_name(), "countryInfo.txt");
    }

    #[test]
    fn geonames_all_maps_to_all_countries() {
        let dataset = Dataset::Geonames(CountrySelection::All);
        assert_eq!(
            dataset.url(),
            "https://download.geonames.org/export/dump/allCountries.zip"
        );
        assert_eq!(dataset.entry_name(), "allCountries.txt");

        let dataset = Dataset::Geonames(country("IT"));
        assert_eq!(dataset.url(), "https://download.geonames.org/export/dump/IT.zip");
        assert_eq!(dataset.entry_name(), "IT.txt");
    }

    #[test]
    fn alternate_names_urls() {
        assert_eq!(
            Dataset::AlternateNames(country("IT")).url(),
            "https://download.geonames.org/export/dump/alternatenames/IT.zip"
        );
        let all = Dataset::AlternateNames(CountrySelection::All);
        assert_eq!(
            all.url(),
            "https://download.geonames.org/export/dump/alternateNamesV2.zip"
        );
        assert_eq!(all.entry_name(), "alternateNamesV2.txt");
    }

    #[test]
    fn full_postal_variant_only_where_published() {
        let gb = Dataset::PostalCodes {
            selection: country("GB"),
            full: true,
        };
        assert_eq!(
            gb.url(),
            "https://download.geonames.org/export/zip/GB_full.csv.zip"
        );
        assert_eq!(gb.entry_name(), "GB_full.txt");

        let it = Dataset::PostalCodes {
            selection: country("IT"),
            full: true,
        };
        assert_eq!(it.url(), "https://download.geonames.org/export/zip/IT.zip");
        assert_eq!(it.entry_name(), "IT.txt");
    }
}
