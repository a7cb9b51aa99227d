//! Domain value objects shared by the service, HTTP and client layers.

pub mod airport;
pub mod query;

pub use airport::{dedup_airports, location_code, Airport, AirportType, Candidate};
pub use query::{Query, QueryError};
