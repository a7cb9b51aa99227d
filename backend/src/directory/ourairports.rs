//! In-memory airport directory built from the OurAirports `airports.csv` export.

use std::collections::HashMap;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::{AirportFinder, DirectoryError, TypeFilter};
use crate::algorithms::Origin;
use crate::models::{AirportType, Candidate};

/// File name of the airports export inside the data directory.
pub const AIRPORTS_FILE: &str = "airports.csv";

/// Paths of the files the directory loads.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOptions {
    pub airports: PathBuf,
}

impl LoadOptions {
    /// Standard file names inside `data_dir`.
    pub fn preset<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            airports: data_dir.as_ref().join(AIRPORTS_FILE),
        }
    }
}

/// One row of `airports.csv`. Columns not listed here are ignored.
#[derive(Debug, Deserialize)]
struct AirportRow {
    name: String,
    #[serde(rename = "type")]
    airport_type: String,
    latitude_deg: f64,
    longitude_deg: f64,
    iso_country: String,
    #[serde(default)]
    iata_code: String,
}

impl From<AirportRow> for Candidate {
    fn from(row: AirportRow) -> Self {
        let airport_type = row
            .airport_type
            .parse()
            .unwrap_or(AirportType::Unknown);
        Candidate {
            name: row.name.trim().to_string(),
            iata_code: row.iata_code.trim().to_ascii_uppercase(),
            country_code: row.iso_country.trim().to_ascii_uppercase(),
            latitude: row.latitude_deg,
            longitude: row.longitude_deg,
            airport_type,
        }
    }
}

/// Airports partitioned by uppercase ISO country code.
///
/// Read-only once loaded; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct OurAirportsDirectory {
    by_country: HashMap<String, Vec<Candidate>>,
}

impl OurAirportsDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the directory from the files named in `options`.
    ///
    /// Loading never fails outright: unreadable files and malformed rows are
    /// returned as errors next to whatever did load, and the caller decides
    /// whether a partial directory is acceptable.
    pub fn load(options: &LoadOptions, filter: TypeFilter) -> (Self, Vec<DirectoryError>) {
        let path = options.airports.as_path();
        match csv::Reader::from_path(path) {
            Ok(reader) => Self::from_csv(reader, path, filter),
            Err(source) => (
                Self::new(),
                vec![DirectoryError::Open {
                    path: path.to_path_buf(),
                    source,
                }],
            ),
        }
    }

    /// Load the directory from any reader producing `airports.csv` content.
    pub fn from_reader<R: Read>(reader: R, filter: TypeFilter) -> (Self, Vec<DirectoryError>) {
        Self::from_csv(csv::Reader::from_reader(reader), Path::new("<reader>"), filter)
    }

    fn from_csv<R: Read>(
        mut reader: csv::Reader<R>,
        path: &Path,
        filter: TypeFilter,
    ) -> (Self, Vec<DirectoryError>) {
        let mut directory = Self::new();
        let mut errors = Vec::new();

        for (index, result) in reader.deserialize::<AirportRow>().enumerate() {
            match result {
                Ok(row) => {
                    let candidate = Candidate::from(row);
                    if filter.matches(candidate.airport_type) {
                        directory.insert(candidate);
                    }
                }
                Err(e) => errors.push(DirectoryError::Record {
                    path: path.to_path_buf(),
                    record: index as u64 + 1,
                    message: e.to_string(),
                }),
            }
        }

        tracing::info!(
            path = %path.display(),
            airports = directory.len(),
            countries = directory.country_count(),
            errors = errors.len(),
            "Built airport directory"
        );

        (directory, errors)
    }

    /// Add an airport to its country partition.
    pub fn insert(&mut self, candidate: Candidate) {
        self.by_country
            .entry(candidate.country_code.to_ascii_uppercase())
            .or_default()
            .push(candidate);
    }

    /// Total number of airports.
    pub fn len(&self) -> usize {
        self.by_country.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_country.is_empty()
    }

    pub fn country_count(&self) -> usize {
        self.by_country.len()
    }

    /// Airports of one country, case-insensitive.
    pub fn airports_in(&self, country_code: &str) -> &[Candidate] {
        self.by_country
            .get(&country_code.to_ascii_uppercase())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl AirportFinder for OurAirportsDirectory {
    fn find_nearest_by_country(
        &self,
        country_code: &str,
        latitude: f64,
        longitude: f64,
        radius_meters: f64,
        max_results: usize,
        filter: TypeFilter,
    ) -> Result<Vec<Candidate>, DirectoryError> {
        let origin = Origin::new(latitude, longitude);
        let radius_km = radius_meters / 1000.0;

        let mut hits: Vec<(f64, &Candidate)> = self
            .airports_in(country_code)
            .iter()
            .filter(|airport| filter.matches(airport.airport_type))
            .map(|airport| (origin.distance_to(airport.latitude, airport.longitude), airport))
            .filter(|(distance, _)| *distance <= radius_km)
            .collect();

        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        hits.truncate(max_results);

        Ok(hits.into_iter().map(|(_, airport)| airport.clone()).collect())
    }
}
