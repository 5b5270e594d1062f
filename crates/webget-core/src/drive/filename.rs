//! Filename resolution from share-page titles.

use crate::urlinfo::page_title;
use std::time::Duration;

/// Suffix the share page appends to the filename in its `<title>`.
const TITLE_SUFFIX: &str = "Google Drive";

/// Derives a filename from a share-page title.
///
/// Strips a trailing `Google Drive` plus any trailing `-`/`:` separators and
/// whitespace; titles without the suffix are returned trimmed.
///
/// `"My File - Google Drive"` → `"My File"`.
pub fn filename_from_title(title: &str) -> String {
    let title = title.trim();
    match title.strip_suffix(TITLE_SUFFIX) {
        Some(rest) => rest
            .trim_end()
            .trim_end_matches(['-', ':'])
            .trim_end()
            .to_string(),
        None => title.to_string(),
    }
}

/// Resolves the filename for a drive ID by fetching its share-page title.
pub fn resolve_filename(driveid: &str, timeout: Duration) -> Option<String> {
    resolve_filename_from(super::OPEN_URL_PREFIX, driveid, timeout)
}

/// Like [`resolve_filename`] against an alternate share-URL prefix.
pub fn resolve_filename_from(
    open_prefix: &str,
    driveid: &str,
    timeout: Duration,
) -> Option<String> {
    let url = format!("{open_prefix}{driveid}");
    let title = page_title(&url, timeout)?;
    let name = filename_from_title(&title);
    if name.is_empty() {
        tracing::warn!("share page title for {driveid} yields no filename");
        None
    } else {
        Some(name)
    }
}
