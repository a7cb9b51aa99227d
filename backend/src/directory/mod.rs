//! Airport directory: the spatial-search collaborator behind the query service.
//!
//! The service only sees the [`AirportFinder`] trait and the narrow
//! [`Candidate`] shape. [`OurAirportsDirectory`] is the in-process
//! implementation over the OurAirports CSV export, and [`bootstrap`] makes
//! sure its files are present before loading.
//!
//! ```ignore
//! use locationcode::directory::{LoadOptions, OurAirportsDirectory, TypeFilter};
//!
//! let (directory, errors) = OurAirportsDirectory::load(&LoadOptions::preset("./data"), TypeFilter::Runways);
//! for err in &errors {
//!     tracing::warn!(error = %err, "partial load error");
//! }
//! ```

pub mod bootstrap;
pub mod ourairports;

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{AirportType, Candidate};

pub use bootstrap::{ensure_data_files, BootstrapError, DATA_FILES};
pub use ourairports::{LoadOptions, OurAirportsDirectory};

/// Errors reported by an airport directory.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("{path}, record {record}: {message}")]
    Record {
        path: PathBuf,
        record: u64,
        message: String,
    },

    #[error("directory search failed: {0}")]
    Search(String),
}

/// Which airport types a load or search accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    /// Large, medium and small airports.
    Runways,
    /// Large and medium airports.
    LargeAndMedium,
}

impl TypeFilter {
    pub fn matches(self, airport_type: AirportType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Runways => airport_type.has_runways(),
            TypeFilter::LargeAndMedium => matches!(
                airport_type,
                AirportType::LargeAirport | AirportType::MediumAirport
            ),
        }
    }
}

/// Nearest-airport search partitioned by country.
///
/// Implementations are loaded once and read concurrently afterwards.
pub trait AirportFinder: Send + Sync {
    /// Candidates in `country_code` within `radius_meters` of the point,
    /// at most `max_results`. Order is unspecified. An empty result is not
    /// an error.
    fn find_nearest_by_country(
        &self,
        country_code: &str,
        latitude: f64,
        longitude: f64,
        radius_meters: f64,
        max_results: usize,
        filter: TypeFilter,
    ) -> Result<Vec<Candidate>, DirectoryError>;
}
