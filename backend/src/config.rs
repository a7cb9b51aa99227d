//! Configuration: the ranking policy and environment-driven server/client settings.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default base URL of the OurAirports data mirror.
pub const DEFAULT_DATA_BASE_URL: &str = "https://davidmegginson.github.io/ourairports-data/";

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    Missing(&'static str),

    #[error("{key} has an invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Radius and truncation policy shared by the query service and ranking engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RankingPolicy {
    /// Radii below this are raised to it.
    pub floor_radius_km: f64,
    /// Multiplier applied to radii at or above the floor.
    pub radius_scale: f64,
    /// Candidate ceiling passed to the directory search.
    pub max_candidates: usize,
    /// Maximum number of ranked results returned.
    pub max_results: usize,
}

impl Default for RankingPolicy {
    fn default() -> Self {
        Self {
            floor_radius_km: 150.0,
            radius_scale: 1.5,
            max_candidates: 500,
            max_results: 20,
        }
    }
}

impl RankingPolicy {
    /// Expand a caller radius into the search radius.
    ///
    /// Below the floor the floor is used, otherwise the radius is scaled.
    pub fn normalize_radius(&self, radius_km: f64) -> f64 {
        if radius_km < self.floor_radius_km {
            self.floor_radius_km
        } else {
            radius_km * self.radius_scale
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Local cache directory for reference data.
    pub data_dir: PathBuf,
    /// Base URL reference files are fetched from when missing.
    pub data_base_url: String,
    /// Time in-flight requests get to finish after a shutdown signal.
    pub shutdown_grace: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            data_dir: PathBuf::from("./data"),
            data_base_url: DEFAULT_DATA_BASE_URL.to_string(),
            shutdown_grace: Duration::from_secs(5),
        }
    }
}

impl ServerConfig {
    /// Load the server configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0)
    /// - `PORT` (optional, default: 8000)
    /// - `DATA_DIR` (optional, default: ./data)
    /// - `DATA_BASE_URL` (optional, default: the OurAirports mirror)
    /// - `SHUTDOWN_GRACE_SECS` (optional, default: 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = match lookup("PORT") {
            Some(raw) => parse_value("PORT", &raw)?,
            None => defaults.port,
        };
        let data_dir = lookup("DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);
        let data_base_url = lookup("DATA_BASE_URL").unwrap_or(defaults.data_base_url);
        let shutdown_grace = match lookup("SHUTDOWN_GRACE_SECS") {
            Some(raw) => Duration::from_secs(parse_value("SHUTDOWN_GRACE_SECS", &raw)?),
            None => defaults.shutdown_grace,
        };

        Ok(Self {
            host,
            port,
            data_dir,
            data_base_url,
            shutdown_grace,
        })
    }

    /// `host:port` suitable for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Variables naming the service location, in lookup order.
const SERVICE_KEYS: [&str; 2] = ["LOCATIONCODE_SERVICE", "locationcode_service"];

/// Remote client settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Service location, either `host:port` or a full base URL.
    pub base_url: String,
    /// Dial timeout.
    pub connect_timeout: Duration,
    /// Total request timeout.
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
    pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: Self::DEFAULT_CONNECT_TIMEOUT,
            request_timeout: Self::DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Load the client configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `LOCATIONCODE_SERVICE` (required): service `host:port` or base URL.
    ///   The lowercase `locationcode_service` is read when it is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = SERVICE_KEYS
            .iter()
            .filter_map(|key| lookup(key))
            .find(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("LOCATIONCODE_SERVICE"))?;
        Ok(Self::new(base_url))
    }

    /// Base URL with a scheme and without a trailing slash.
    pub fn endpoint_base(&self) -> String {
        let base = self.base_url.trim().trim_end_matches('/');
        if base.contains("://") {
            base.to_string()
        } else {
            format!("http://{}", base)
        }
    }
}

fn parse_value<T>(key: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}
