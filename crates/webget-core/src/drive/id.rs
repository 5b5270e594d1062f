//! Drive ID extraction from bare IDs and share URLs.

/// Pulls the file ID out of a bare ID or a URL carrying one.
///
/// Policy: everything after the last `&id=` if present, else everything
/// after the last `?id=`, else the whole input. The character set is not
/// validated; callers reject an empty result.
pub fn extract_drive_id(input: &str) -> &str {
    if let Some((_, rest)) = input.rsplit_once("&id=") {
        return rest;
    }
    if let Some((_, rest)) = input.rsplit_once("?id=") {
        return rest;
    }
    input
}
