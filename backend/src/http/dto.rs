//! Data Transfer Objects for the HTTP API.
//!
//! The response body of `/v1/code` is a JSON array of [`Airport`] records,
//! which already serialize to the `{Name, Code, Distance, Type}` wire shape.

use serde::{Deserialize, Serialize};

pub use crate::models::Airport;
use crate::models::{Query, QueryError};

/// Banner returned by `GET /`.
pub const BANNER: &str = "location code service";

/// Query parameters for `GET /v1/code`.
///
/// Kept as raw strings so parse failures can be reported with the offending
/// value instead of a generic extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeQuery {
    /// ISO country code
    #[serde(default)]
    pub cc: Option<String>,
    /// Latitude in degrees
    #[serde(default)]
    pub lat: Option<String>,
    /// Longitude in degrees
    #[serde(default)]
    pub lng: Option<String>,
    /// Search radius in kilometres
    #[serde(default)]
    pub radius: Option<String>,
}

impl CodeQuery {
    /// Validate into a [`Query`]. Missing `lat`/`lng` fail like empty values.
    pub fn parse(&self) -> Result<Query, QueryError> {
        Query::parse(
            self.cc.as_deref().unwrap_or_default(),
            self.lat.as_deref().unwrap_or_default(),
            self.lng.as_deref().unwrap_or_default(),
            self.radius.as_deref(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_query_parse() {
        let params = CodeQuery {
            cc: Some("us".to_string()),
            lat: Some("37.3793".to_string()),
            lng: Some("-122.12".to_string()),
            radius: None,
        };
        let query = params.parse().unwrap();
        assert_eq!(query.country_code, "US");
        assert_eq!(query.radius_km, 0.0);
    }

    #[test]
    fn test_code_query_missing_lat() {
        let params = CodeQuery {
            cc: Some("US".to_string()),
            lng: Some("1".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.parse(),
            Err(QueryError::Parse { field: "latitude", .. })
        ));
    }
}
