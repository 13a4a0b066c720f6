//! Source document loader.
//!
//! Fetches the raw text of a RAML document from a local file or over HTTP.
//! This is the only blocking operation in a conversion; it has no timeout
//! and is never retried. Any failure is fatal to the current conversion.

use crate::error::{Error, Result};
use std::fs;

/// Fetches the raw document text behind a URI.
///
/// Three forms are accepted:
///
/// - `http://` or `https://` - fetched with a blocking GET; a non-success
///   status is a load failure
/// - `file://` - the prefix is stripped and the rest read from disk
/// - anything else - treated as a bare filesystem path
///
/// # Errors
///
/// Returns [`Error::DocumentLoad`] on any I/O or HTTP failure.
pub fn fetch(uri: &str) -> Result<String> {
    if uri.starts_with("http://") || uri.starts_with("https://") {
        fetch_http(uri)
    } else {
        let path = uri.strip_prefix("file://").unwrap_or(uri);
        fs::read_to_string(path).map_err(|e| Error::DocumentLoad {
            uri: uri.to_string(),
            message: e.to_string(),
        })
    }
}

fn fetch_http(uri: &str) -> Result<String> {
    let load_error = |message: String| Error::DocumentLoad {
        uri: uri.to_string(),
        message,
    };

    let response = reqwest::blocking::get(uri).map_err(|e| load_error(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(load_error(format!("server returned {}", status)));
    }

    response.text().map_err(|e| load_error(e.to_string()))
}
