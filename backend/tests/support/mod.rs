//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use locationcode::directory::{AirportFinder, DirectoryError, OurAirportsDirectory, TypeFilter};
use locationcode::models::{AirportType, Candidate};

/// Query point used throughout: Los Altos, California.
pub const QUERY_LAT: f64 = 37.3793;
pub const QUERY_LNG: f64 = -122.12;

pub fn candidate(name: &str, iata: &str, airport_type: AirportType, lat: f64, lng: f64) -> Candidate {
    Candidate {
        name: name.to_string(),
        iata_code: iata.to_string(),
        country_code: "US".to_string(),
        latitude: lat,
        longitude: lng,
        airport_type,
    }
}

/// A directory with San Francisco International about 16 km north of the
/// query point and an uncoded airstrip nearby.
pub fn bay_area_directory() -> OurAirportsDirectory {
    let mut directory = OurAirportsDirectory::new();
    directory.insert(candidate(
        "San Francisco International",
        "SFO",
        AirportType::LargeAirport,
        37.5232,
        -122.12,
    ));
    directory.insert(candidate("Skyline Airstrip", "", AirportType::SmallAirport, 37.40, -122.10));
    directory
}

/// Wraps a finder and counts searches.
pub struct CountingFinder<F> {
    inner: F,
    searches: AtomicUsize,
}

impl<F: AirportFinder> CountingFinder<F> {
    pub fn new(inner: F) -> Arc<Self> {
        Arc::new(Self {
            inner,
            searches: AtomicUsize::new(0),
        })
    }

    pub fn searches(&self) -> usize {
        self.searches.load(Ordering::SeqCst)
    }
}

impl<F: AirportFinder> AirportFinder for CountingFinder<F> {
    fn find_nearest_by_country(
        &self,
        country_code: &str,
        latitude: f64,
        longitude: f64,
        radius_meters: f64,
        max_results: usize,
        filter: TypeFilter,
    ) -> Result<Vec<Candidate>, DirectoryError> {
        self.searches.fetch_add(1, Ordering::SeqCst);
        self.inner
            .find_nearest_by_country(country_code, latitude, longitude, radius_meters, max_results, filter)
    }
}
