//! Reference-data bootstrap.
//!
//! Before the directory loads, every file in [`DATA_FILES`] must exist in the
//! data directory. Missing files are fetched once from the configured base
//! URL. There are no retries: a failed fetch is returned to the caller, which
//! is expected to abort startup.

use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;

use super::ourairports::AIRPORTS_FILE;

/// Files the directory needs.
pub const DATA_FILES: &[&str] = &[AIRPORTS_FILE];

/// Per-file download timeout.
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(60);

/// Errors raised while populating the data directory.
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("failed to prepare data directory {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to build download client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("failed to fetch {} reference file(s): {}", .0.len(), join_failures(.0))]
    Fetch(Vec<FetchFailure>),
}

/// One file that could not be fetched.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchFailure {
    pub file: String,
    pub reason: String,
}

fn join_failures(failures: &[FetchFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{} ({})", f.file, f.reason))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Files from `files` that are not present in `data_dir`.
pub fn missing_files<'a>(data_dir: &Path, files: &[&'a str]) -> Vec<&'a str> {
    files
        .iter()
        .copied()
        .filter(|file| !data_dir.join(file).is_file())
        .collect()
}

/// Make sure every file in [`DATA_FILES`] exists in `data_dir`, fetching the
/// missing ones from `base_url`. Returns the names of the files fetched.
pub async fn ensure_data_files(
    data_dir: &Path,
    base_url: &str,
) -> Result<Vec<String>, BootstrapError> {
    let missing = missing_files(data_dir, DATA_FILES);
    if missing.is_empty() {
        tracing::debug!(dir = %data_dir.display(), "Reference data present");
        return Ok(Vec::new());
    }

    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(BootstrapError::Client)?;

    fetch_files(&client, data_dir, base_url, &missing).await
}

/// Fetch `files` from `base_url` into `data_dir` with the given client.
pub async fn fetch_files(
    client: &reqwest::Client,
    data_dir: &Path,
    base_url: &str,
    files: &[&str],
) -> Result<Vec<String>, BootstrapError> {
    tokio::fs::create_dir_all(data_dir)
        .await
        .map_err(|source| BootstrapError::Io {
            path: data_dir.to_path_buf(),
            source,
        })?;

    let base = base_url.trim_end_matches('/');
    let mut fetched = Vec::with_capacity(files.len());
    let mut failures = Vec::new();

    for file in files {
        let url = format!("{}/{}", base, file);
        tracing::info!(%url, "Downloading reference data");

        match fetch_one(client, &url, &data_dir.join(file)).await {
            Ok(bytes) => {
                tracing::info!(file, bytes, "Downloaded reference data");
                fetched.push(file.to_string());
            }
            Err(reason) => {
                tracing::error!(file, %reason, "Reference data download failed");
                failures.push(FetchFailure {
                    file: file.to_string(),
                    reason,
                });
            }
        }
    }

    if failures.is_empty() {
        Ok(fetched)
    } else {
        Err(BootstrapError::Fetch(failures))
    }
}

/// Download one file, writing through a `.part` file so a failed transfer
/// never leaves a truncated file behind.
async fn fetch_one(client: &reqwest::Client, url: &str, target: &Path) -> Result<usize, String> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;
    let body = response.bytes().await.map_err(|e| e.to_string())?;

    let partial = target.with_extension("part");
    tokio::fs::write(&partial, &body)
        .await
        .map_err(|e| e.to_string())?;
    tokio::fs::rename(&partial, target)
        .await
        .map_err(|e| e.to_string())?;

    Ok(body.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(missing_files(dir.path(), &["a.csv", "b.csv"]), vec!["a.csv", "b.csv"]);

        std::fs::write(dir.path().join("a.csv"), "x").unwrap();
        assert_eq!(missing_files(dir.path(), &["a.csv", "b.csv"]), vec!["b.csv"]);
    }

    #[tokio::test]
    async fn test_present_files_are_not_fetched() {
        let dir = tempfile::tempdir().unwrap();
        for file in DATA_FILES {
            std::fs::write(dir.path().join(file), "id\n").unwrap();
        }

        // Port 9 is discard; nothing should be contacted.
        let fetched = ensure_data_files(dir.path(), "http://127.0.0.1:9/")
            .await
            .unwrap();
        assert!(fetched.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_source_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = ensure_data_files(dir.path(), &format!("http://{}", addr))
            .await
            .unwrap_err();

        match err {
            BootstrapError::Fetch(failures) => {
                assert_eq!(failures.len(), DATA_FILES.len());
                assert_eq!(failures[0].file, AIRPORTS_FILE);
            }
            other => panic!("unexpected error: {}", other),
        }
        assert!(!dir.path().join(AIRPORTS_FILE).exists());
    }

    #[test]
    fn test_fetch_error_message_lists_files() {
        let err = BootstrapError::Fetch(vec![FetchFailure {
            file: "airports.csv".to_string(),
            reason: "connection refused".to_string(),
        }]);
        assert_eq!(
            err.to_string(),
            "failed to fetch 1 reference file(s): airports.csv (connection refused)"
        );
    }
}
