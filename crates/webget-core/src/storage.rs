//! Destination resolution and the chunked file writer.
//!
//! Writes go to a temp file in the destination directory and are renamed
//! into place on completion, so an interrupted download never leaves a
//! same-named partial file behind.

use crate::config::DEFAULT_CHUNK_SIZE;
use crate::error::FetchError;
use crate::progress::TransferProgress;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Resolves the full destination path for a download.
///
/// A filename containing a path separator is used as a path on its own;
/// otherwise it is joined onto `directory`. A leading `~` is expanded to
/// the user's home directory in either case.
pub fn resolve_destination(filename: &str, directory: &Path) -> PathBuf {
    let raw = if filename.contains(std::path::MAIN_SEPARATOR) {
        PathBuf::from(filename)
    } else {
        directory.join(filename)
    };
    expand_user(&raw)
}

/// Expands a leading `~` or `~/` to the user's home directory.
///
/// Paths without the prefix, and `~user` forms, are returned unchanged.
pub fn expand_user(path: &Path) -> PathBuf {
    let Some(s) = path.to_str() else {
        return path.to_path_buf();
    };
    if s == "~" {
        if let Some(home) = home::home_dir() {
            return home;
        }
    } else if let Some(rest) = s.strip_prefix("~/") {
        if let Some(home) = home::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}

/// Sequential writer streaming chunks into a temp file, with rename-on-success.
///
/// Empty chunks (keep-alive signals) are discarded. Disk writes are buffered
/// in `chunk_size` blocks; 0 falls back to the 32 KiB default.
pub struct ChunkWriter {
    inner: BufWriter<NamedTempFile>,
    final_path: PathBuf,
    progress: TransferProgress,
}

impl ChunkWriter {
    /// Opens a temp file next to the resolved destination.
    ///
    /// Fails if the destination's parent directory does not exist or is not
    /// writable. The temp file is removed on drop unless `finalize` runs.
    pub fn create(filename: &str, directory: &Path, chunk_size: usize) -> Result<Self, FetchError> {
        let final_path = resolve_destination(filename, directory);
        let parent = final_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        // Same directory as the final path, so the rename never crosses a
        // filesystem boundary.
        let temp = NamedTempFile::new_in(parent)?;

        let capacity = if chunk_size == 0 {
            DEFAULT_CHUNK_SIZE
        } else {
            chunk_size
        };
        Ok(Self {
            inner: BufWriter::with_capacity(capacity, temp),
            final_path,
            progress: TransferProgress::default(),
        })
    }

    /// Writes one chunk in arrival order; empty chunks contribute nothing.
    pub fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        if chunk.is_empty() {
            return Ok(());
        }
        self.inner.write_all(chunk)?;
        self.progress.record(chunk.len());
        Ok(())
    }

    /// Counters so far (bytes and non-empty chunks written).
    pub fn progress(&self) -> TransferProgress {
        self.progress
    }

    /// Where the file will land once finalized.
    pub fn final_path(&self) -> &Path {
        &self.final_path
    }

    /// Flushes and renames the temp file onto the destination, replacing any
    /// existing file there. Returns the resolved full path.
    pub fn finalize(self) -> Result<PathBuf, FetchError> {
        let ChunkWriter {
            inner, final_path, ..
        } = self;
        let mut inner = inner;
        inner.flush()?;
        let temp = inner
            .into_inner()
            .map_err(|e| FetchError::Io(e.into_error()))?;
        temp.persist(&final_path).map_err(|e| FetchError::Io(e.error))?;
        Ok(final_path)
    }
}
