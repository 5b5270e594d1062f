//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> CliCommand {
    let cli = Cli::try_parse_from(args).unwrap();
    cli.command
}

#[test]
fn cli_parse_get_defaults() {
    match parse(&["webget", "get", "14mELuzm0OvXnwjb0mzAiG-Ake9_NP_LQ"]) {
        CliCommand::Get {
            input,
            output,
            dir,
            chunk_size,
            timeout,
        } => {
            assert_eq!(input, "14mELuzm0OvXnwjb0mzAiG-Ake9_NP_LQ");
            assert!(output.is_none());
            assert!(dir.is_none());
            assert!(chunk_size.is_none());
            assert!(timeout.is_none());
        }
        _ => panic!("expected Get"),
    }
}

#[test]
fn cli_parse_get_with_flags() {
    match parse(&[
        "webget",
        "get",
        "https://drive.google.com/open?id=abc",
        "-o",
        "weights.h5",
        "--dir",
        "/data",
        "--chunk-size",
        "65536",
        "--timeout",
        "10",
    ]) {
        CliCommand::Get {
            input,
            output,
            dir,
            chunk_size,
            timeout,
        } => {
            assert_eq!(input, "https://drive.google.com/open?id=abc");
            assert_eq!(output.as_deref(), Some("weights.h5"));
            assert_eq!(dir, Some(PathBuf::from("/data")));
            assert_eq!(chunk_size, Some(65536));
            assert_eq!(timeout, Some(10));
        }
        _ => panic!("expected Get with flags"),
    }
}

#[test]
fn cli_parse_title() {
    match parse(&["webget", "title", "mozilla.com"]) {
        CliCommand::Title { url } => assert_eq!(url, "mozilla.com"),
        _ => panic!("expected Title"),
    }
}

#[test]
fn cli_parse_meta() {
    match parse(&["webget", "meta", "https://example.com/file.zip"]) {
        CliCommand::Meta { url } => assert_eq!(url, "https://example.com/file.zip"),
        _ => panic!("expected Meta"),
    }
}

#[test]
fn cli_rejects_missing_input() {
    assert!(Cli::try_parse_from(["webget", "get"]).is_err());
    assert!(Cli::try_parse_from(["webget"]).is_err());
}
