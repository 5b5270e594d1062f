//! Google-Drive share-link downloads.
//!
//! The handshake has two terminal shapes: the initial request either serves
//! the file directly, or sets a `download_warning*` cookie whose value is a
//! confirmation token. With a token, exactly one more request is issued with
//! `confirm=<token>` in the query; further confirmation rounds are never
//! attempted.

mod confirm;
mod filename;
mod id;

pub use confirm::confirmation_token;
pub use filename::{filename_from_title, resolve_filename, resolve_filename_from};
pub use id::extract_drive_id;

use crate::config::FetchOptions;
use crate::error::FetchError;
use crate::http::HttpSession;
use crate::progress::TransferProgress;
use crate::storage::ChunkWriter;
use std::path::PathBuf;
use url::Url;

/// Download endpoint for shared files.
pub const EXPORT_ENDPOINT: &str = "https://docs.google.com/uc?export=download";
/// Share-link prefix whose page title carries the filename.
pub const OPEN_URL_PREFIX: &str = "https://drive.google.com/open?id=";

/// A completed download: where it landed and how much was written.
#[derive(Debug)]
pub struct DownloadedFile {
    pub path: PathBuf,
    pub progress: TransferProgress,
}

/// Downloads a shared file by drive ID or share URL.
///
/// `input` may be a bare ID or any URL carrying `?id=` / `&id=`. With no
/// `filename`, the name is resolved from the share page's title; if that
/// fails the download stops with [`FetchError::FilenameUnresolved`] and the
/// caller must pass a name. The optional `observer` is called once per
/// written chunk with the running counters.
pub fn download_file(
    input: &str,
    filename: Option<&str>,
    opts: &FetchOptions,
    observer: Option<&mut dyn FnMut(&TransferProgress)>,
) -> Result<DownloadedFile, FetchError> {
    download_from(EXPORT_ENDPOINT, OPEN_URL_PREFIX, input, filename, opts, observer)
}

/// Like [`download_file`] against alternate endpoints (mirrors, tests).
pub fn download_from(
    export_endpoint: &str,
    open_prefix: &str,
    input: &str,
    filename: Option<&str>,
    opts: &FetchOptions,
    mut observer: Option<&mut dyn FnMut(&TransferProgress)>,
) -> Result<DownloadedFile, FetchError> {
    let driveid = extract_drive_id(input);
    if driveid.is_empty() {
        return Err(FetchError::EmptyDriveId);
    }

    let name = match filename {
        Some(given) => given.to_string(),
        None => resolve_filename_from(open_prefix, driveid, opts.timeout()).ok_or_else(|| {
            FetchError::FilenameUnresolved {
                driveid: driveid.to_string(),
            }
        })?,
    };

    let mut session = HttpSession::new()?;
    let first = request_url(export_endpoint, driveid, None)?;
    tracing::debug!(url = %first, "requesting drive file");

    let mut writer = ChunkWriter::create(&name, &opts.directory, opts.effective_chunk_size())?;
    stream_into(&mut session, first.as_str(), &mut writer, &mut observer)?;

    let cookies = session.cookies()?;
    if let Some(token) = confirmation_token(&cookies) {
        // The first response was the too-large-to-scan interstitial, not the
        // file. Start over with the token; the interstitial bytes die with
        // the old temp file.
        tracing::debug!("download warning challenge; confirming");
        let confirmed = request_url(export_endpoint, driveid, Some(token))?;
        writer = ChunkWriter::create(&name, &opts.directory, opts.effective_chunk_size())?;
        stream_into(&mut session, confirmed.as_str(), &mut writer, &mut observer)?;
    }

    let progress = writer.progress();
    let path = writer.finalize()?;
    tracing::info!(path = %path.display(), bytes = progress.bytes_written, "download complete");
    Ok(DownloadedFile { path, progress })
}

fn stream_into(
    session: &mut HttpSession,
    url: &str,
    writer: &mut ChunkWriter,
    observer: &mut Option<&mut dyn FnMut(&TransferProgress)>,
) -> Result<u32, FetchError> {
    session.get_streaming(url, |chunk| {
        writer.write_chunk(chunk)?;
        if let Some(observe) = observer.as_mut() {
            observe(&writer.progress());
        }
        Ok(())
    })
}

fn request_url(endpoint: &str, driveid: &str, confirm: Option<&str>) -> Result<Url, FetchError> {
    let mut url = Url::parse(endpoint)
        .map_err(|e| FetchError::InvalidUrl(format!("{endpoint}: {e}")))?;
    url.query_pairs_mut().append_pair("id", driveid);
    if let Some(token) = confirm {
        url.query_pairs_mut().append_pair("confirm", token);
    }
    Ok(url)
}
