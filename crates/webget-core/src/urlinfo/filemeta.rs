//! File-oriented metadata for a page URL.

use super::normalize_url;
use crate::http;
use std::time::Duration;
use url::Url;

/// What a URL tells us about the file behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlFileMeta {
    /// Normalized URL actually requested.
    pub url: String,
    pub hostname: Option<String>,
    pub path: String,
    pub username: Option<String>,
    /// Remote size from `Content-Length`, when the server reports one.
    pub remote_size: Option<u64>,
    /// Last path segment (empty for root paths).
    pub filename: String,
}

/// Probes `url` and returns its file metadata.
///
/// FTP URLs are not supported and yield `None`, as do transport failures
/// (logged). The probe honors the metadata timeout and transfers no body.
pub fn url_filemeta(url: &str, timeout: Duration) -> Option<UrlFileMeta> {
    let parsed = normalize_url(url)?;
    if parsed.scheme().starts_with("ftp") {
        tracing::info!("ftp URLs are not supported: {}", parsed);
        return None;
    }
    match http::probe(parsed.as_str(), timeout) {
        Ok(head) => Some(meta_from_url(&parsed, head.content_length)),
        Err(e) => {
            tracing::warn!("unable to probe {}: {}", parsed, e);
            None
        }
    }
}

fn meta_from_url(parsed: &Url, remote_size: Option<u64>) -> UrlFileMeta {
    let username = match parsed.username() {
        "" => None,
        user => Some(user.to_string()),
    };
    let filename = parsed.path().rsplit('/').next().unwrap_or("").to_string();
    UrlFileMeta {
        url: parsed.as_str().to_string(),
        hostname: parsed.host_str().map(str::to_string),
        path: parsed.path().to_string(),
        username,
        remote_size,
        filename,
    }
}
