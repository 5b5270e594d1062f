use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default write-buffer size for streamed downloads (bytes).
pub const DEFAULT_CHUNK_SIZE: usize = 32_768;
/// Default timeout for metadata and title fetches (seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Per-call download options.
///
/// Passed explicitly into each operation; there is no process-wide default
/// destination or chunk size. `load_or_init` supplies file-backed defaults
/// for the CLI, which flags then override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchOptions {
    /// Destination directory for downloads.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
    /// Write buffer size in bytes; 0 falls back to 32768.
    #[serde(default)]
    pub chunk_size: usize,
    /// Timeout in seconds for metadata and title fetches. The bulk body
    /// transfer is not bounded by this.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl FetchOptions {
    /// Chunk size with the zero-means-default rule applied.
    pub fn effective_chunk_size(&self) -> usize {
        if self.chunk_size == 0 {
            DEFAULT_CHUNK_SIZE
        } else {
            self.chunk_size
        }
    }

    /// Metadata-fetch timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("webget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load options from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchOptions> {
    let path = config_path()?;
    if !path.exists() {
        let defaults = FetchOptions::default();
        let toml = toml::to_string_pretty(&defaults)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(defaults);
    }

    let data = fs::read_to_string(&path)?;
    let opts: FetchOptions = toml::from_str(&data)?;
    Ok(opts)
}
