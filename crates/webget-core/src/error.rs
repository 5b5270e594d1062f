//! Typed errors for network and download operations.
//!
//! Every network call returns one of these so callers can decide whether to
//! retry or abort. The metadata helpers in [`crate::urlinfo`] log and convert
//! failures to `None` at the boundary; the bulk download path propagates.

use crate::status::reason_phrase;
use thiserror::Error;

/// Failure of a fetch or download operation.
#[derive(Debug, Error)]
pub enum FetchError {
    /// libcurl failure (DNS, connect, timeout, TLS).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),

    /// Terminal response with a non-2xx status.
    #[error("{}", format_http_status(.0))]
    Status(u32),

    /// URL could not be parsed for a request.
    #[error("invalid URL {0:?}")]
    InvalidUrl(String),

    /// Drive ID extraction produced an empty string.
    #[error("drive ID is empty")]
    EmptyDriveId,

    /// No filename given and the share page did not yield one.
    #[error("no filename for drive ID {driveid:?}; pass one explicitly")]
    FilenameUnresolved { driveid: String },

    /// Destination file could not be created, written, or renamed.
    #[error("destination I/O: {0}")]
    Io(#[from] std::io::Error),
}

fn format_http_status(code: &u32) -> String {
    match u16::try_from(*code).ok().and_then(reason_phrase) {
        Some(reason) => format!("HTTP {code} {reason}"),
        None => format!("HTTP {code}"),
    }
}
