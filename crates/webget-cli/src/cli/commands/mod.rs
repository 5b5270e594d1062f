//! Subcommand implementations.

mod get;
mod meta;
mod title;

pub use get::run_get;
pub use meta::run_meta;
pub use title::run_title;
