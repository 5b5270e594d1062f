//! `webget meta <URL>` – print file metadata for a URL.

use anyhow::{bail, Result};
use webget_core::config::FetchOptions;
use webget_core::urlinfo;

pub fn run_meta(url: &str, opts: &FetchOptions) -> Result<()> {
    let Some(meta) = urlinfo::url_filemeta(url, opts.timeout()) else {
        bail!("no metadata for {url:?}");
    };

    println!("url:      {}", meta.url);
    if let Some(hostname) = &meta.hostname {
        println!("hostname: {hostname}");
    }
    println!("path:     {}", meta.path);
    if let Some(username) = &meta.username {
        println!("username: {username}");
    }
    match meta.remote_size {
        Some(size) => println!("size:     {size}"),
        None => println!("size:     unknown"),
    }
    if !meta.filename.is_empty() {
        println!("filename: {}", meta.filename);
    }
    Ok(())
}
