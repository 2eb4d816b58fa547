//! The Fetcher: one blocking GET, one file.
//!
//! Given a destination and a source URL, either skips (destination exists and
//! overwrite is off) or downloads the full body and replaces the destination.

mod error;
mod get;

pub use error::FetchError;
pub use get::http_get;

use crate::config::PagefetchConfig;
use crate::storage;
use std::path::Path;
use std::time::Duration;

/// Per-request curl settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub connect_timeout: Duration,
    /// Total transfer timeout; `None` waits as long as the server takes.
    pub timeout: Option<Duration>,
    pub max_redirections: u32,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            timeout: None,
            max_redirections: 10,
        }
    }
}

impl FetchOptions {
    pub fn from_config(cfg: &PagefetchConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: cfg.timeout_secs.map(Duration::from_secs),
            ..Self::default()
        }
    }
}

/// What `fetch_to_file` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Body fetched and written; `bytes` is the body length.
    Written { bytes: u64 },
    /// Destination already existed and overwrite was off. No request was made.
    Skipped,
}

/// Downloads `url` into `dest`.
///
/// With `force == false` an existing `dest` is left untouched and no request
/// is made. Otherwise the full body is fetched and replaces `dest`.
pub fn fetch_to_file(
    dest: &Path,
    url: &str,
    force: bool,
    opts: &FetchOptions,
) -> Result<FetchOutcome, FetchError> {
    if !force && dest.exists() {
        tracing::debug!(path = %dest.display(), "destination exists, skipping");
        return Ok(FetchOutcome::Skipped);
    }

    let body = http_get(url, opts)?;
    storage::write_replace(dest, &body).map_err(FetchError::Storage)?;
    tracing::debug!(url, path = %dest.display(), bytes = body.len(), "page written");

    Ok(FetchOutcome::Written {
        bytes: body.len() as u64,
    })
}
