use std::fs;
use std::path::Path;
use std::time::Duration;

use tracing::{debug, info};

use crate::errors::PrepError;

/// Result of an acquisition attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The archive was fetched over the network and written to disk.
    Downloaded,
    /// The archive was already on disk; no network request was made.
    AlreadyPresent,
}

/// Ensure a local copy of the source archive exists, downloading it if absent.
///
/// When `destination` already exists this is a no-op regardless of the remote
/// content (existence is the only freshness signal). Otherwise the archive is
/// fetched with a single blocking request bounded by `timeout` and persisted
/// in full. A failed request leaves nothing at `destination`.
pub fn ensure_archive(
    url: &str,
    destination: &Path,
    timeout: Duration,
) -> Result<FetchOutcome, PrepError> {
    if destination.exists() {
        debug!(path = %destination.display(), "archive already present, skipping download");
        return Ok(FetchOutcome::AlreadyPresent);
    }

    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| PrepError::IoWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    println!("[tweetset:fetch] downloading dataset archive from {url}");
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|source| PrepError::Download {
            url: url.to_string(),
            source,
        })?;
    let response = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .map_err(|source| PrepError::Download {
            url: url.to_string(),
            source,
        })?;
    let body = response.bytes().map_err(|source| PrepError::Download {
        url: url.to_string(),
        source,
    })?;

    fs::write(destination, &body).map_err(|source| PrepError::IoWrite {
        path: destination.to_path_buf(),
        source,
    })?;
    info!(bytes = body.len(), path = %destination.display(), "archive downloaded");
    println!(
        "[tweetset:fetch] archive downloaded to {}",
        destination.display()
    );
    Ok(FetchOutcome::Downloaded)
}
