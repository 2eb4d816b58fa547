//! Error type for a single page fetch.

/// Error returned by one fetch (curl failure, HTTP error status, or storage failure).
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Curl reported an error (connect failure, DNS, timeout, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// Response had a non-2xx status; the body was not written.
    #[error("HTTP {0}")]
    Http(u32),
    /// Writing the destination file failed (permission denied, disk full, ...).
    #[error("storage: {0}")]
    Storage(#[source] std::io::Error),
}
