use super::*;
use std::sync::Mutex;

use crate::directory::OurAirportsDirectory;
use crate::models::{AirportType, Candidate};

/// Arguments of one directory call.
#[derive(Debug, Clone, PartialEq)]
struct Search {
    country_code: String,
    radius_meters: f64,
    max_results: usize,
}

/// Finder returning a fixed candidate list and recording each call.
struct RecordingFinder {
    candidates: Vec<Candidate>,
    calls: Mutex<Vec<Search>>,
    fail: bool,
}

impl RecordingFinder {
    fn new(candidates: Vec<Candidate>) -> Self {
        Self {
            candidates,
            calls: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new(Vec::new())
        }
    }

    fn calls(&self) -> Vec<Search> {
        self.calls.lock().unwrap().clone()
    }
}

impl AirportFinder for RecordingFinder {
    fn find_nearest_by_country(
        &self,
        country_code: &str,
        _latitude: f64,
        _longitude: f64,
        radius_meters: f64,
        max_results: usize,
        _filter: TypeFilter,
    ) -> Result<Vec<Candidate>, DirectoryError> {
        self.calls.lock().unwrap().push(Search {
            country_code: country_code.to_string(),
            radius_meters,
            max_results,
        });
        if self.fail {
            return Err(DirectoryError::Search("index unavailable".to_string()));
        }
        Ok(self.candidates.clone())
    }
}

fn candidate(name: &str, iata: &str, airport_type: AirportType, lat: f64, lng: f64) -> Candidate {
    Candidate {
        name: name.to_string(),
        iata_code: iata.to_string(),
        country_code: "US".to_string(),
        latitude: lat,
        longitude: lng,
        airport_type,
    }
}

#[test]
fn test_resolve_normalizes_country_and_small_radius() {
    let finder = Arc::new(RecordingFinder::new(Vec::new()));
    let service = LocationService::new(finder.clone());

    let result = service.resolve("us", 50.0, 37.3793, -122.12).unwrap();

    assert!(result.is_empty());
    assert_eq!(
        finder.calls(),
        vec![Search {
            country_code: "US".to_string(),
            radius_meters: 150_000.0,
            max_results: 500,
        }]
    );
}

#[test]
fn test_resolve_scales_large_radius() {
    let finder = Arc::new(RecordingFinder::new(Vec::new()));
    let service = LocationService::new(finder.clone());

    service.resolve("DE", 200.0, 50.0, 8.5).unwrap();

    assert_eq!(finder.calls()[0].radius_meters, 300_000.0);
}

#[test]
fn test_resolve_uses_custom_policy() {
    let finder = Arc::new(RecordingFinder::new(Vec::new()));
    let policy = RankingPolicy {
        floor_radius_km: 10.0,
        radius_scale: 2.0,
        max_candidates: 50,
        max_results: 5,
    };
    let service = LocationService::with_policy(finder.clone(), policy);

    service.resolve("DE", 20.0, 50.0, 8.5).unwrap();

    let call = &finder.calls()[0];
    assert_eq!(call.radius_meters, 40_000.0);
    assert_eq!(call.max_results, 50);
}

#[test]
fn test_resolve_ranks_and_truncates() {
    let mut candidates: Vec<Candidate> = (0..25)
        .map(|i| {
            candidate(
                &format!("Field {}", i),
                &format!("F{:02}", i),
                AirportType::SmallAirport,
                37.4 + i as f64 * 0.01,
                -122.12,
            )
        })
        .collect();
    candidates.push(candidate("Hub", "HUB", AirportType::LargeAirport, 38.0, -122.12));
    candidates.push(candidate("Uncoded", "", AirportType::LargeAirport, 37.38, -122.12));

    let service = LocationService::new(Arc::new(RecordingFinder::new(candidates)));
    let result = service.resolve("US", 100.0, 37.3793, -122.12).unwrap();

    assert_eq!(result.len(), 20);
    assert_eq!(result[0].code, "ushub");
    assert_eq!(result[1].code, "usf00");
    assert!(result.iter().all(|a| !a.code.is_empty() && a.code.len() > 2));
}

#[test]
fn test_resolve_removes_duplicate_codes() {
    let candidates = vec![
        candidate("Main Terminal", "ABC", AirportType::LargeAirport, 37.4, -122.12),
        candidate("Old Terminal", "ABC", AirportType::LargeAirport, 37.5, -122.12),
    ];
    let service = LocationService::new(Arc::new(RecordingFinder::new(candidates)));

    let result = service.resolve("US", 0.0, 37.3793, -122.12).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].name, "Main Terminal");
}

#[test]
fn test_resolve_duplicates_do_not_shrink_result() {
    let mut candidates = vec![
        candidate("Dup North", "DUP", AirportType::SmallAirport, 37.38, -122.12),
        candidate("Dup South", "DUP", AirportType::SmallAirport, 37.381, -122.12),
    ];
    candidates.extend((0..25).map(|i| {
        candidate(
            &format!("Field {}", i),
            &format!("F{:02}", i),
            AirportType::SmallAirport,
            37.4 + i as f64 * 0.01,
            -122.12,
        )
    }));
    let service = LocationService::new(Arc::new(RecordingFinder::new(candidates)));

    let result = service.resolve("US", 50.0, 37.3793, -122.12).unwrap();

    assert_eq!(result.len(), 20);
    assert_eq!(result[0].code, "usdup");
    assert_eq!(result[0].name, "Dup North");
    assert_eq!(result.iter().filter(|a| a.code == "usdup").count(), 1);
    assert_eq!(result[19].code, "usf18");
}

#[test]
fn test_resolve_rejects_bad_country_before_search() {
    let finder = Arc::new(RecordingFinder::new(Vec::new()));
    let service = LocationService::new(finder.clone());

    let err = service.resolve("", 0.0, 0.0, 0.0).unwrap_err();

    assert!(matches!(err, ServiceError::InvalidQuery(QueryError::InvalidCountryCode(_))));
    assert!(finder.calls().is_empty());
}

#[test]
fn test_resolve_propagates_directory_errors() {
    let service = LocationService::new(Arc::new(RecordingFinder::failing()));
    let err = service.resolve("US", 0.0, 0.0, 0.0).unwrap_err();
    assert!(matches!(err, ServiceError::Directory(_)));
    assert!(err.to_string().contains("index unavailable"));
}

#[test]
fn test_resolve_query() {
    let finder = Arc::new(RecordingFinder::new(Vec::new()));
    let service = LocationService::new(finder.clone());
    let query = Query::parse("fr", "48.85", "2.35", Some("300")).unwrap();

    service.resolve_query(&query).unwrap();

    assert_eq!(finder.calls()[0].country_code, "FR");
    assert_eq!(finder.calls()[0].radius_meters, 450_000.0);
}

#[test]
fn test_resolve_end_to_end_with_directory() {
    let mut directory = OurAirportsDirectory::new();
    // 0.1439 degrees of latitude north of the query point, about 16 km.
    directory.insert(candidate(
        "San Francisco International",
        "SFO",
        AirportType::LargeAirport,
        37.5232,
        -122.12,
    ));
    directory.insert(candidate("Skyline Airstrip", "", AirportType::SmallAirport, 37.40, -122.10));

    let service = LocationService::new(Arc::new(directory));
    let result = service.resolve("US", 50.0, 37.3793, -122.12).unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].code, "ussfo");
    assert_eq!(result[0].name, "San Francisco International");
    assert!((result[0].distance - 16.0).abs() < 0.5, "{}", result[0].distance);
}
