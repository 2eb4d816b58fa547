//! Blocking HTTP GET into memory.

use super::{FetchError, FetchOptions};

/// Performs one GET for `url` and returns the whole body.
///
/// Redirects are followed. A non-2xx final status is `FetchError::Http`.
pub fn http_get(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(opts.max_redirections)?;
    easy.connect_timeout(opts.connect_timeout)?;
    if let Some(timeout) = opts.timeout {
        easy.timeout(timeout)?;
    }

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }

    Ok(body)
}
