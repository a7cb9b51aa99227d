//! Remote client for the location code service.
//!
//! Mirrors [`LocationService::resolve`](crate::services::LocationService::resolve)
//! for processes that talk to the service over HTTP. Each client owns its own
//! `reqwest::Client` configured with dial and total request timeouts; failures
//! are returned to the caller and never retried here.

use thiserror::Error;

use crate::config::{ClientConfig, ConfigError};
use crate::models::Airport;

/// Errors from a remote lookup.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("location code client not configured: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("location code service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),
}

/// HTTP client for `GET /v1/code`.
#[derive(Debug, Clone)]
pub struct LocationCodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl LocationCodeClient {
    /// Build a client from explicit settings.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(Self {
            http,
            base_url: config.endpoint_base(),
        })
    }

    /// Build a client from `LOCATIONCODE_SERVICE`.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Nearest coded airports for a point, as ranked by the service.
    ///
    /// A non-positive `radius_km` is left out of the request so the service
    /// applies its default.
    #[tracing::instrument(skip(self), fields(url = tracing::field::Empty))]
    pub async fn get_airports(
        &self,
        country_code: &str,
        latitude: f64,
        longitude: f64,
        radius_km: f64,
    ) -> Result<Vec<Airport>, ClientError> {
        let url = format!("{}/v1/code", self.base_url);
        let params = code_params(country_code, latitude, longitude, radius_km);

        let request = self
            .http
            .get(&url)
            .query(&params)
            .build()
            .map_err(|source| ClientError::Request {
                url: url.clone(),
                source,
            })?;
        tracing::Span::current().record("url", request.url().as_str());

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| ClientError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|source| ClientError::Request { url, source })?;

        if !status.is_success() {
            let body = String::from_utf8_lossy(&body).trim().to_string();
            tracing::warn!(%status, %body, "location code lookup rejected");
            return Err(ClientError::Status { status, body });
        }

        serde_json::from_slice(&body).map_err(ClientError::Decode)
    }
}

/// Query parameters in the order the service documents them.
fn code_params(
    country_code: &str,
    latitude: f64,
    longitude: f64,
    radius_km: f64,
) -> Vec<(&'static str, String)> {
    let mut params = vec![("cc", country_code.to_string())];
    if radius_km > 0.0 {
        params.push(("radius", format!("{:.6}", radius_km)));
    }
    params.push(("lat", format!("{:.6}", latitude)));
    params.push(("lng", format!("{:.6}", longitude)));
    params
}
