//! Service layer for business logic and orchestration.
//!
//! Services sit between the transports (HTTP handlers, CLI) and the airport
//! directory, and are safe to share across concurrent requests.

pub mod locate;

pub use locate::{LocationService, ServiceError};
