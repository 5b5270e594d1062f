//! HTML page-title lookup.

use super::normalize_url;
use crate::http;
use scraper::{Html, Selector};
use std::time::Duration;

/// Fetches the page at `url` and returns its `<title>` text.
///
/// The URL goes through [`normalize_url`] first, so a missing scheme is
/// assumed to be http. Transport failures are logged and yield `None`.
pub fn page_title(url: &str, timeout: Duration) -> Option<String> {
    let parsed = normalize_url(url)?;
    let response = match http::get(parsed.as_str(), timeout) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!("unable to retrieve {}: {}", parsed, e);
            return None;
        }
    };
    let body = String::from_utf8_lossy(&response.body);
    extract_title(&body)
}

/// Text of the first `<title>` element, trimmed. `None` when absent or empty.
fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    let element = document.select(&selector).next()?;
    let title = element.text().collect::<String>();
    let trimmed = title.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
