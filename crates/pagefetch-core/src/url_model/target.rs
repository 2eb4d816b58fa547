//! Source URL and destination filename for one download.

use crate::plan::PlanError;

use super::derive_filename;

/// Minimum digits in a page filename (`7` → `007`).
pub const PAD_WIDTH: usize = 3;

/// One thing to download: either a standalone URL or one page of a numbered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadTarget<'a> {
    Single {
        url: &'a str,
    },
    Page {
        base_url: &'a str,
        index: u32,
        extension: &'a str,
    },
}

impl DownloadTarget<'_> {
    /// URL the bytes are fetched from.
    pub fn source_url(&self) -> String {
        match *self {
            DownloadTarget::Single { url } => url.to_string(),
            DownloadTarget::Page {
                base_url,
                index,
                extension,
            } => page_url(base_url, index, extension),
        }
    }

    /// Name of the local file the bytes are written to.
    pub fn filename(&self) -> String {
        match *self {
            DownloadTarget::Single { url } => derive_filename(url),
            DownloadTarget::Page {
                index, extension, ..
            } => page_filename(index, extension),
        }
    }

    pub fn page_index(&self) -> Option<u32> {
        match *self {
            DownloadTarget::Single { .. } => None,
            DownloadTarget::Page { index, .. } => Some(index),
        }
    }
}

/// Source URL for a page: base URL with the raw (unpadded) index and extension appended.
pub fn page_url(base_url: &str, index: u32, extension: &str) -> String {
    format!("{base_url}{index}.{extension}")
}

/// Destination filename for a page: zero-padded index plus extension.
pub fn page_filename(index: u32, extension: &str) -> String {
    format!("{index:0width$}.{extension}", width = PAD_WIDTH)
}

/// Parses `url` and requires an http(s) scheme and a host.
fn parse_http_url(url: &str) -> Result<url::Url, PlanError> {
    let invalid = |reason: String| PlanError::InvalidUrl {
        url: url.to_string(),
        reason,
    };
    let parsed = url::Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(invalid(format!("unsupported scheme {}", parsed.scheme())));
    }
    if parsed.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(parsed)
}

/// Checks that a single-image URL is an http(s) URL with a host.
pub fn check_single_url(url: &str) -> Result<(), PlanError> {
    parse_http_url(url).map(|_| ())
}

/// Checks that `base_url` can have page numbers appended to it.
///
/// The base must parse as an http(s) URL with a host, and appending a page must
/// not change that host (`https://host` + `0.jpg` would become host `host0.jpg`).
pub fn check_base_url(base_url: &str) -> Result<(), PlanError> {
    let parsed = parse_http_url(base_url)?;
    let host = parsed.host_str();

    let appended = page_url(base_url, 0, "jpg");
    let appended_host = url::Url::parse(&appended)
        .ok()
        .and_then(|u| u.host_str().map(str::to_owned));
    if appended_host.as_deref() != host {
        return Err(PlanError::UrlWithoutPath(base_url.to_string()));
    }
    Ok(())
}
