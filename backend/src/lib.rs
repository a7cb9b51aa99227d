//! # Location Code Service
//!
//! Resolves a country, a point and a search radius to the nearest airports
//! carrying an IATA code, and returns them as short "location codes"
//! (`ussfo`, `defra`, ...).
//!
//! ## Features
//!
//! - **Ranking**: IATA filtering, great-circle distances, type-then-distance ordering
//! - **Directory**: In-memory OurAirports directory with per-country nearest search
//! - **Bootstrap**: One-shot download of missing reference data
//! - **HTTP API**: `GET /v1/code` served with axum
//! - **Remote Client**: reqwest client decoding the same records
//! - **CLI**: Direct-call lookups without HTTP
//!
//! ## Architecture
//!
//! - [`models`]: Airport records, airport types and query parsing
//! - [`algorithms`]: Distance computation and the ranking engine
//! - [`directory`]: The airport directory and its data bootstrap
//! - [`services`]: The lookup service shared by every transport
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`client`]: Remote client for the HTTP API
//! - [`cli`]: Command-line lookup mode
//! - [`config`]: Ranking policy and environment configuration

pub mod algorithms;
pub mod cli;
pub mod client;
pub mod config;
pub mod directory;
pub mod models;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
