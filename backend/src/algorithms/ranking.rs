//! Ranking engine.
//!
//! Turns an unordered candidate set into the bounded result list:
//!
//! 1. drop candidates without an IATA code,
//! 2. annotate each survivor with its great-circle distance from the origin,
//! 3. sort by `(airport type rank, distance)` ascending,
//! 4. keep at most `max_results`.

use std::cmp::Ordering;

use super::distance::great_circle_km;
use crate::models::{Airport, Candidate};

/// A query origin in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub latitude: f64,
    pub longitude: f64,
}

impl Origin {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn distance_to(&self, latitude: f64, longitude: f64) -> f64 {
        great_circle_km(self.latitude, self.longitude, latitude, longitude)
    }
}

/// Rank candidates around `origin`, returning at most `max_results` airports.
pub fn rank_candidates<I>(candidates: I, origin: Origin, max_results: usize) -> Vec<Airport>
where
    I: IntoIterator<Item = Candidate>,
{
    let mut airports: Vec<Airport> = candidates
        .into_iter()
        .filter(Candidate::has_iata_code)
        .map(|candidate| {
            let distance = origin.distance_to(candidate.latitude, candidate.longitude);
            Airport::from_candidate(&candidate).with_distance(distance)
        })
        .collect();

    sort_airports(&mut airports);
    airports.truncate(max_results);
    airports
}

/// Sort by type tier first, then nearest first within a tier.
pub fn sort_airports(airports: &mut [Airport]) {
    airports.sort_by(compare_airports);
}

fn compare_airports(a: &Airport, b: &Airport) -> Ordering {
    a.airport_type
        .cmp(&b.airport_type)
        .then_with(|| a.distance.total_cmp(&b.distance))
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod ranking_tests;
