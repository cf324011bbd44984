use std::fmt;

use serde::{Serialize, Serializer};

use crate::feature_code::FeatureCode;

/// Top-level GeoNames feature class.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum FeatureClass {
    /// Country, state, region.
    A,
    /// Stream, lake.
    H,
    /// Parks, area.
    L,
    /// City, village.
    P,
    /// Road, railroad.
    R,
    /// Spot, building, farm.
    S,
    /// Mountain, hill, rock.
    T,
    /// Undersea.
    U,
    /// Forest, heath.
    V,
}

impl FeatureClass {
    pub const ALL: [FeatureClass; 9] = [
        FeatureClass::A,
        FeatureClass::H,
        FeatureClass::L,
        FeatureClass::P,
        FeatureClass::R,
        FeatureClass::S,
        FeatureClass::T,
        FeatureClass::U,
        FeatureClass::V,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            FeatureClass::A => "A",
            FeatureClass::H => "H",
            FeatureClass::L => "L",
            FeatureClass::P => "P",
            FeatureClass::R => "R",
            FeatureClass::S => "S",
            FeatureClass::T => "T",
            FeatureClass::U => "U",
            FeatureClass::V => "V",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            FeatureClass::A => "country, state, region",
            FeatureClass::H => "stream, lake",
            FeatureClass::L => "parks, area",
            FeatureClass::P => "city, village",
            FeatureClass::R => "road, railroad",
            FeatureClass::S => "spot, building, farm",
            FeatureClass::T => "mountain, hill, rock",
            FeatureClass::U => "undersea",
            FeatureClass::V => "forest, heath",
        }
    }

    /// Empty or unrecognised values are absent rather than an error.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.as_str() == raw)
    }

    /// Feature codes that belong to this class, in table order.
    pub fn codes(self) -> impl Iterator<Item = FeatureCode> {
        FeatureCode::ALL
            .iter()
            .copied()
            .filter(move |code| code.class() == self)
    }
}

impl fmt::Display for FeatureClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FeatureClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Which administrative-code file a row came from.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum AdminLevel {
    /// First-level division, e.g. a state or province. Codes look like `US.CA`.
    Admin1 = 1,
    /// Second-level division, e.g. a county. Codes look like `US.CA.037`.
    Admin2 = 2,
}

impl AdminLevel {
    /// Number of `.`-separated parts in a code at this level.
    pub const fn code_parts(self) -> usize {
        match self {
            AdminLevel::Admin1 => 2,
            AdminLevel::Admin2 => 3,
        }
    }
}

/// Curated feature-code sets for building a place-lookup database.
pub mod groups {
    use crate::feature_code::FeatureCode;

    /// Capitals, seats of administrative divisions and ordinary populated places.
    pub const POPULATED_PRIMARY: &[FeatureCode] = &[
        FeatureCode::Pplc,
        FeatureCode::Ppla,
        FeatureCode::Ppla2,
        FeatureCode::Ppla3,
        FeatureCode::Ppla4,
        FeatureCode::Ppl,
    ];

    /// City sections, localities and farm villages.
    pub const POPULATED_SECONDARY: &[FeatureCode] =
        &[FeatureCode::Pplx, FeatureCode::Ppll, FeatureCode::Pplf];

    pub const POPULATED_HISTORICAL: &[FeatureCode] = &[
        FeatureCode::Pplch,
        FeatureCode::Pplh,
        FeatureCode::Pplq,
        FeatureCode::Pplw,
    ];

    pub const ADMINISTRATIVE_ACTIVE: &[FeatureCode] = &[
        FeatureCode::Pcli,
        FeatureCode::Adm1,
        FeatureCode::Adm2,
        FeatureCode::Adm3,
        FeatureCode::Adm4,
        FeatureCode::Adm5,
    ];

    pub const ADMINISTRATIVE_HISTORICAL: &[FeatureCode] =
        &[FeatureCode::Pclh, FeatureCode::Adm1h, FeatureCode::Adm2h];

    /// Any populated-place code from the primary, secondary or historical sets.
    pub fn is_populated_place(code: FeatureCode) -> bool {
        POPULATED_PRIMARY.contains(&code)
            || POPULATED_SECONDARY.contains(&code)
            || POPULATED_HISTORICAL.contains(&code)
    }

    pub fn is_administrative(code: FeatureCode) -> bool {
        ADMINISTRATIVE_ACTIVE.contains(&code) || ADMINISTRATIVE_HISTORICAL.contains(&code)
    }
}
