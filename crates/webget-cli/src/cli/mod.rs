//! CLI for the webget download utility.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use webget_core::config;

use commands::{run_get, run_meta, run_title};

/// Top-level CLI for webget.
#[derive(Debug, Parser)]
#[command(name = "webget")]
#[command(about = "webget: URL utilities and Google-Drive share-link downloads", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download a shared Google-Drive file by ID or share URL.
    Get {
        /// Drive ID, or a URL carrying `?id=` / `&id=`.
        input: String,

        /// Destination filename. Defaults to the name on the share page.
        #[arg(long, short = 'o')]
        output: Option<String>,

        /// Destination directory (default: configured directory).
        #[arg(long)]
        dir: Option<PathBuf>,

        /// Write buffer size in bytes (0 = default 32768).
        #[arg(long)]
        chunk_size: Option<usize>,

        /// Timeout in seconds for metadata and title fetches.
        #[arg(long)]
        timeout: Option<u64>,
    },

    /// Print the HTML title of a page.
    Title {
        /// URL; a missing scheme is assumed to be http.
        url: String,
    },

    /// Print file metadata for a URL (size, hostname, filename).
    Meta {
        /// URL; a missing scheme is assumed to be http.
        url: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let defaults = config::load_or_init()?;
        tracing::debug!("loaded options: {:?}", defaults);

        match cli.command {
            CliCommand::Get {
                input,
                output,
                dir,
                chunk_size,
                timeout,
            } => {
                let mut opts = defaults;
                if let Some(dir) = dir {
                    opts.directory = dir;
                }
                if let Some(chunk_size) = chunk_size {
                    opts.chunk_size = chunk_size;
                }
                if let Some(timeout) = timeout {
                    opts.timeout_secs = timeout;
                }
                run_get(&input, output.as_deref(), &opts)
            }
            CliCommand::Title { url } => run_title(&url, &defaults),
            CliCommand::Meta { url } => run_meta(&url, &defaults),
        }
    }
}

#[cfg(test)]
mod tests;
