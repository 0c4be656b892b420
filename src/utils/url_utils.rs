//! URL and path manipulation utilities.
//!
//! This module provides functions for deriving local filenames from the
//! remote URLs found in record content.

use url::Url;

/// Derive a local filename from the final path segment of a URL.
///
/// Query strings and fragments are stripped, and the segment is sanitized
/// for filesystem use. URLs that do not yield a usable segment (for example
/// a bare host with a trailing slash) return `None`.
///
/// Note the basename is the whole key: two URLs on different hosts that end
/// in the same segment map to the same filename.
#[must_use]
pub fn filename_from_url(raw: &str) -> Option<String> {
    let segment = match Url::parse(raw) {
        Ok(parsed) => parsed
            .path_segments()
            .and_then(|mut segments| segments.next_back().map(str::to_string)),
        // Scheme-relative or otherwise unparseable URLs: take the raw tail.
        Err(_) => raw
            .split(['?', '#'])
            .next()
            .and_then(|path| path.rsplit('/').next())
            .map(str::to_string),
    }?;

    if segment.is_empty() {
        return None;
    }

    let filename = sanitize_filename::sanitize(&segment);
    if filename.is_empty() {
        None
    } else {
        Some(filename)
    }
}
