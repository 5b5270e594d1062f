//! `webget get <ID-or-URL>` – download a shared drive file.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use webget_core::config::FetchOptions;
use webget_core::drive;
use webget_core::progress::TransferProgress;

pub fn run_get(input: &str, output: Option<&str>, opts: &FetchOptions) -> Result<()> {
    // Total size is unknown up front, so this is a byte counter, not a bar.
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner} {bytes} written ({binary_bytes_per_sec})")
            .context("progress template")?,
    );

    let mut tick = |p: &TransferProgress| bar.set_position(p.bytes_written);
    let downloaded = drive::download_file(input, output, opts, Some(&mut tick))
        .with_context(|| format!("download failed for {input:?}"))?;
    bar.finish_and_clear();

    println!(
        "Saved {} ({} bytes, {} chunks)",
        downloaded.path.display(),
        downloaded.progress.bytes_written,
        downloaded.progress.chunks_written
    );
    Ok(())
}
