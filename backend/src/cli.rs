//! Direct-call lookup mode: `<cc> <lat> <lng> <radius>` on the command line.

use std::io::Write;

use thiserror::Error;

use crate::models::{Airport, Query, QueryError};
use crate::services::{LocationService, ServiceError};

/// Usage line printed on argument errors.
pub const USAGE: &str = "[cc] [lat] [lng] [radius]";

/// Exit status for usage and parse errors.
pub const USAGE_EXIT_CODE: i32 = 2;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("expected 4 arguments, got {0}")]
    ArgumentCount(usize),

    #[error(transparent)]
    InvalidArgument(#[from] QueryError),

    #[error("lookup failed: {0}")]
    Lookup(#[from] ServiceError),

    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl CliError {
    /// Whether the usage line should accompany this error.
    pub fn is_usage(&self) -> bool {
        matches!(self, CliError::ArgumentCount(_) | CliError::InvalidArgument(_))
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_usage() {
            USAGE_EXIT_CODE
        } else {
            1
        }
    }
}

/// Parse positional arguments into a query. The radius is required here.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Query, CliError> {
    match args {
        [cc, lat, lng, radius] => Ok(Query::parse(
            cc.as_ref(),
            lat.as_ref(),
            lng.as_ref(),
            Some(radius.as_ref()),
        )?),
        _ => Err(CliError::ArgumentCount(args.len())),
    }
}

/// One output line: `code<TAB>name (distance)`.
pub fn format_airport(airport: &Airport) -> String {
    format!("{}\t{} ({:.6})", airport.code, airport.name, airport.distance)
}

/// Resolve the query described by `args` and write one line per airport.
pub fn run<S, W>(service: &LocationService, args: &[S], out: &mut W) -> Result<usize, CliError>
where
    S: AsRef<str>,
    W: Write,
{
    let query = parse_args(args)?;
    let airports = service.resolve_query(&query)?;
    for airport in &airports {
        writeln!(out, "{}", format_airport(airport))?;
    }
    Ok(airports.len())
}
