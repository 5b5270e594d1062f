//! Scheme guessing for loosely written URLs.

use url::{ParseError, Url};

/// Parses `text` as a URL, assuming `http://` when no scheme is given.
///
/// Inputs shorter than 4 characters (after trimming) are rejected. Failures
/// are logged and collapse to `None`; this never returns an error.
pub fn normalize_url(text: &str) -> Option<Url> {
    let trimmed = text.trim();
    if trimmed.len() < 4 {
        tracing::info!("URL too short: {trimmed:?}");
        return None;
    }
    match Url::parse(trimmed) {
        Ok(parsed) => Some(parsed),
        Err(ParseError::RelativeUrlWithoutBase) => {
            let assumed = format!("http://{trimmed}");
            match Url::parse(&assumed) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    tracing::info!("invalid URL for assumed http scheme {assumed:?}: {e}");
                    None
                }
            }
        }
        Err(e) => {
            tracing::info!("unparsable URL {trimmed:?}: {e}");
            None
        }
    }
}

/// Cheap plausibility check: bounded length and normalizable.
pub fn looks_like_url(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.len() < 1024 && normalize_url(trimmed).is_some()
}
