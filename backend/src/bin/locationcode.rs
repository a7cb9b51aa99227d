//! Location code server binary.
//!
//! Ensures the reference data is present, loads the airport directory and
//! either answers a single lookup from the command line or serves the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Serve the HTTP API
//! cargo run --bin locationcode -- --data-dir ./data
//!
//! # One-off lookup: <cc> <lat> <lng> <radius km>
//! cargo run --bin locationcode -- US 37.3793 -122.12 50
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8000)
//! - `DATA_DIR`: Reference data directory (default: ./data)
//! - `DATA_BASE_URL`: Where missing reference files are fetched from
//! - `SHUTDOWN_GRACE_SECS`: Grace period for in-flight requests (default: 5)
//! - `RUST_LOG`: Log filter directives (default: info)

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use locationcode::cli;
use locationcode::config::ServerConfig;
use locationcode::directory::{self, LoadOptions, OurAirportsDirectory, TypeFilter};
use locationcode::http::{create_router, serve, shutdown_signal, AppState};
use locationcode::services::LocationService;

#[derive(Debug, Parser)]
#[command(name = "locationcode", about = "Nearest-airport location codes")]
struct Args {
    /// Data cache directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Lookup mode: [cc] [lat] [lng] [radius]
    #[arg(allow_negative_numbers = true)]
    lookup: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();
    let mut config = ServerConfig::from_env().context("invalid server configuration")?;
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    let fetched = directory::ensure_data_files(&config.data_dir, &config.data_base_url)
        .await
        .with_context(|| format!("reference data unavailable in {}", config.data_dir.display()))?;
    if !fetched.is_empty() {
        info!(files = ?fetched, "Fetched reference data");
    }

    let (airports, errors) =
        OurAirportsDirectory::load(&LoadOptions::preset(&config.data_dir), TypeFilter::Runways);
    for err in &errors {
        warn!(error = %err, "Airport directory load error");
    }
    if !errors.is_empty() {
        warn!(count = errors.len(), "Airport directory partially loaded");
    }
    let service = LocationService::new(Arc::new(airports));

    if !args.lookup.is_empty() {
        return Ok(run_lookup(&service, &args.lookup));
    }

    let state = AppState::new(service);
    let app = create_router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    serve(listener, app, shutdown_signal(), config.shutdown_grace).await?;
    info!("Server stopped");

    Ok(ExitCode::SUCCESS)
}

/// `RUST_LOG` directives, falling back to `info` when unset or invalid.
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}

fn run_lookup(service: &LocationService, lookup: &[String]) -> ExitCode {
    let result = cli::run(service, lookup, &mut std::io::stdout().lock());
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if err.is_usage() {
                println!("{}", cli::USAGE);
            }
            eprintln!("{}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
