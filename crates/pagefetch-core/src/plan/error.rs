//! Errors for malformed download input.

/// Input that cannot be turned into a download plan. Raised before any network access.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlanError {
    /// Neither a page count nor an end page was given.
    #[error("page range needs a page count or an end page")]
    MissingUpperBound,
    /// Pages are 1-based; start 0 has no meaning.
    #[error("start page must be 1 or greater")]
    StartIsZero,
    #[error("start page {start} is after end page {end}")]
    StartAfterEnd { start: u32, end: u32 },
    #[error("invalid URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    /// Appending a page number to the base URL would land in the host, not the path.
    #[error("base URL {0} has no path to append page numbers to (try adding a trailing '/')")]
    UrlWithoutPath(String),
    #[error("image format must not be empty")]
    EmptyExtension,
    #[error("worker count must be at least 1")]
    ZeroWorkers,
}
