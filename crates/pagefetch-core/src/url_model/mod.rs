//! URL modeling and filename derivation.
//!
//! Turns a download target (single URL, or base URL + page index + extension)
//! into the concrete source URL and the local filename it is saved under.

mod path;
mod sanitize;
mod target;

pub use path::filename_from_url_path;
pub use sanitize::sanitize_filename;
pub use target::{
    check_base_url, check_single_url, page_filename, page_url, DownloadTarget, PAD_WIDTH,
};

/// Default filename when the URL path yields nothing usable.
const DEFAULT_FILENAME: &str = "image.bin";

/// Derives a safe filename for a single-image download from the last path segment of `url`.
///
/// # Examples
///
/// - `derive_filename("https://x/y/pic.png")` → `"pic.png"`
/// - `derive_filename("https://x/")` → `"image.bin"`
pub fn derive_filename(url: &str) -> String {
    let raw = match filename_from_url_path(url) {
        Some(c) => c,
        None => return DEFAULT_FILENAME.to_string(),
    };

    let sanitized = sanitize_filename(&raw);
    if sanitized.is_empty() || sanitized == "." || sanitized == ".." {
        DEFAULT_FILENAME.to_string()
    } else {
        sanitized
    }
}
