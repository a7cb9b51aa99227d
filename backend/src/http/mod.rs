//! HTTP server module.
//!
//! This module provides an axum-based HTTP server that exposes the location
//! code lookup as a REST API. It reuses the service layer and models from the
//! core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Query parameter parsing and validation                 │
//! │  - JSON serialization                                     │
//! │  - CORS, tracing, plain text errors                       │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services::locate)                         │
//! │  - Radius policy                                          │
//! │  - Ranking                                                │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Directory (directory/)                                   │
//! │  - Country-partitioned nearest search                     │
//! │  - OurAirportsDirectory                                   │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use router::create_router;
pub use server::{serve, shutdown_signal};
pub use state::AppState;
