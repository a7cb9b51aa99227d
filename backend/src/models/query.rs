//! Location query value object and input parsing.
//!
//! Both the HTTP endpoint and the CLI receive their inputs as strings; they
//! share [`Query::parse`] so malformed input is rejected the same way.

use std::num::ParseFloatError;

use thiserror::Error;

/// Input errors for a location query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("invalid country code '{0}': expected a two-letter ISO code")]
    InvalidCountryCode(String),

    #[error("could not parse '{value}' as {field}: {source}")]
    Parse {
        field: &'static str,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("{field} must be a finite number, got '{value}'")]
    NotFinite { field: &'static str, value: String },
}

/// A normalized location query.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Uppercase ISO country code.
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Caller radius in kilometres; 0 when not supplied.
    pub radius_km: f64,
}

impl Query {
    /// Parse raw query inputs.
    ///
    /// An absent or empty `radius` means 0, which the radius policy raises to
    /// its floor. A radius that is present but unparseable is an error.
    pub fn parse(
        country_code: &str,
        latitude: &str,
        longitude: &str,
        radius: Option<&str>,
    ) -> Result<Self, QueryError> {
        let country_code = normalize_country_code(country_code)?;
        let latitude = parse_number("latitude", latitude)?;
        let longitude = parse_number("longitude", longitude)?;
        let radius_km = match radius.map(str::trim).filter(|r| !r.is_empty()) {
            Some(r) => parse_number("radius", r)?,
            None => 0.0,
        };

        Ok(Self {
            country_code,
            latitude,
            longitude,
            radius_km,
        })
    }
}

/// Uppercase and validate an ISO 3166-1 alpha-2 code.
pub fn normalize_country_code(raw: &str) -> Result<String, QueryError> {
    let code = raw.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(QueryError::InvalidCountryCode(raw.to_string()));
    }
    Ok(code.to_ascii_uppercase())
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, QueryError> {
    let value: f64 = raw.trim().parse().map_err(|source| QueryError::Parse {
        field,
        value: raw.to_string(),
        source,
    })?;
    if !value.is_finite() {
        return Err(QueryError::NotFinite {
            field,
            value: raw.to_string(),
        });
    }
    Ok(value)
}
