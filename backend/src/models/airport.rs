//! Airport record model.
//!
//! [`Candidate`] is the narrow shape every airport directory must produce;
//! [`Airport`] is the ranked record returned to callers and serialized on the
//! wire as `{Name, Code, Distance, Type}`.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Airport classification, using the OurAirports vocabulary.
///
/// Ordering follows [`AirportType::rank`]: bigger, more useful airports sort
/// first. The serialized form is the snake_case directory value
/// (`large_airport`, `heliport`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirportType {
    LargeAirport,
    MediumAirport,
    SmallAirport,
    SeaplaneBase,
    Heliport,
    Balloonport,
    Closed,
    #[serde(other)]
    Unknown,
}

impl AirportType {
    /// Ranking tier, lower wins.
    pub const fn rank(self) -> u8 {
        match self {
            AirportType::LargeAirport => 0,
            AirportType::MediumAirport => 1,
            AirportType::SmallAirport => 2,
            AirportType::SeaplaneBase => 3,
            AirportType::Heliport => 4,
            AirportType::Balloonport => 5,
            AirportType::Closed => 6,
            AirportType::Unknown => 7,
        }
    }

    /// The directory's string for this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            AirportType::LargeAirport => "large_airport",
            AirportType::MediumAirport => "medium_airport",
            AirportType::SmallAirport => "small_airport",
            AirportType::SeaplaneBase => "seaplane_base",
            AirportType::Heliport => "heliport",
            AirportType::Balloonport => "balloonport",
            AirportType::Closed => "closed",
            AirportType::Unknown => "unknown",
        }
    }

    /// Whether the type describes an airport with runways.
    pub const fn has_runways(self) -> bool {
        matches!(
            self,
            AirportType::LargeAirport | AirportType::MediumAirport | AirportType::SmallAirport
        )
    }
}

impl PartialOrd for AirportType {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AirportType {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl FromStr for AirportType {
    type Err = std::convert::Infallible;

    /// Parse a directory type string. Unrecognized values map to
    /// [`AirportType::Unknown`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "large_airport" => AirportType::LargeAirport,
            "medium_airport" => AirportType::MediumAirport,
            "small_airport" => AirportType::SmallAirport,
            "seaplane_base" => AirportType::SeaplaneBase,
            "heliport" => AirportType::Heliport,
            "balloonport" => AirportType::Balloonport,
            "closed" => AirportType::Closed,
            _ => AirportType::Unknown,
        })
    }
}

impl fmt::Display for AirportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw airport candidate as returned by a directory search.
///
/// Directories map their own row types into this shape at the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub name: String,
    /// IATA code, possibly empty.
    pub iata_code: String,
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub airport_type: AirportType,
}

impl Candidate {
    /// Whether the candidate can form a location code.
    pub fn has_iata_code(&self) -> bool {
        !self.iata_code.trim().is_empty()
    }
}

/// A ranked airport, identified by its location code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Airport {
    pub name: String,
    /// Lowercase country code followed by the IATA code, e.g. `ussfo`.
    pub code: String,
    /// Great-circle distance from the query point in kilometres.
    pub distance: f64,
    #[serde(rename = "Type")]
    pub airport_type: AirportType,
}

impl Airport {
    /// Build a record from a candidate. The distance is zero until the
    /// ranking engine sets it with [`Airport::with_distance`].
    pub fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name.clone(),
            code: location_code(&candidate.country_code, &candidate.iata_code),
            distance: 0.0,
            airport_type: candidate.airport_type,
        }
    }

    pub fn with_distance(mut self, distance_km: f64) -> Self {
        self.distance = distance_km;
        self
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Derive a location code: lowercase `country + iata`.
pub fn location_code(country_code: &str, iata_code: &str) -> String {
    format!("{}{}", country_code.trim(), iata_code.trim()).to_lowercase()
}

/// Remove records whose code was already seen, keeping first-seen order.
pub fn dedup_airports(airports: Vec<Airport>) -> Vec<Airport> {
    let mut seen = HashSet::with_capacity(airports.len());
    airports
        .into_iter()
        .filter(|airport| seen.insert(airport.code.clone()))
        .collect()
}
