//! Location code lookup.
//!
//! [`LocationService::resolve`] normalizes the query, asks the directory for
//! candidates and hands them to the ranking engine.

use std::sync::Arc;

use thiserror::Error;

use crate::algorithms::{rank_candidates, Origin};
use crate::config::RankingPolicy;
use crate::directory::{AirportFinder, DirectoryError, TypeFilter};
use crate::models::query::normalize_country_code;
use crate::models::{dedup_airports, Airport, Query, QueryError};

/// Errors from a lookup.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    InvalidQuery(#[from] QueryError),

    #[error("airport directory error: {0}")]
    Directory(#[from] DirectoryError),
}

/// Resolves location codes against a shared, read-only directory.
#[derive(Clone)]
pub struct LocationService {
    finder: Arc<dyn AirportFinder>,
    policy: RankingPolicy,
}

impl LocationService {
    pub fn new(finder: Arc<dyn AirportFinder>) -> Self {
        Self::with_policy(finder, RankingPolicy::default())
    }

    pub fn with_policy(finder: Arc<dyn AirportFinder>, policy: RankingPolicy) -> Self {
        Self { finder, policy }
    }

    pub fn policy(&self) -> &RankingPolicy {
        &self.policy
    }

    /// Nearest coded airports for a point, best first.
    ///
    /// `radius_km` is the caller's radius; it is expanded by the ranking
    /// policy before searching. No matches is an empty list, not an error.
    pub fn resolve(
        &self,
        country_code: &str,
        radius_km: f64,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Airport>, ServiceError> {
        let country_code = normalize_country_code(country_code)?;
        let search_radius_km = self.policy.normalize_radius(radius_km);

        let candidates = self.finder.find_nearest_by_country(
            &country_code,
            latitude,
            longitude,
            search_radius_km * 1000.0,
            self.policy.max_candidates,
            TypeFilter::All,
        )?;

        let candidate_count = candidates.len();
        let filtered_count = candidates.iter().filter(|c| c.has_iata_code()).count();

        // Dedup before truncating: the bound counts unique codes.
        let ranked = rank_candidates(candidates, Origin::new(latitude, longitude), usize::MAX);
        let ranked_count = ranked.len();
        let mut airports = dedup_airports(ranked);
        if airports.len() != ranked_count {
            tracing::debug!(
                removed = ranked_count - airports.len(),
                "Dropped duplicate location codes"
            );
        }
        airports.truncate(self.policy.max_results);

        tracing::info!(
            country = %country_code,
            radius_km = search_radius_km,
            latitude,
            longitude,
            candidates = candidate_count,
            filtered = filtered_count,
            returned = airports.len(),
            "Resolved location codes"
        );

        Ok(airports)
    }

    /// [`LocationService::resolve`] for an already parsed query.
    pub fn resolve_query(&self, query: &Query) -> Result<Vec<Airport>, ServiceError> {
        self.resolve(
            &query.country_code,
            query.radius_km,
            query.latitude,
            query.longitude,
        )
    }
}

#[cfg(test)]
#[path = "locate_tests.rs"]
mod locate_tests;
