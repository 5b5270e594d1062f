//! `webget title <URL>` – print a page's HTML title.

use anyhow::{bail, Result};
use webget_core::config::FetchOptions;
use webget_core::urlinfo;

pub fn run_title(url: &str, opts: &FetchOptions) -> Result<()> {
    match urlinfo::page_title(url, opts.timeout()) {
        Some(title) => {
            println!("{title}");
            Ok(())
        }
        None => bail!("no title for {url:?}"),
    }
}
