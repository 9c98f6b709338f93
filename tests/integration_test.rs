//! Integration tests for cidr-expand
//!
//! These tests drive `run()` the way `main` does, with in-memory streams.

use cidr_expand::{run, Cli, ExpandError, ParseError};
use pretty_assertions::assert_eq;
use std::io::Cursor;
use std::path::PathBuf;
use tempfile::tempdir;

fn cli(cidr: Option<&str>, output_path: Option<PathBuf>) -> Cli {
    Cli {
        cidr: cidr.map(str::to_string),
        output_path,
    }
}

fn run_to_string(cli: &Cli, stdin: &str) -> Result<(usize, String), ExpandError> {
    let mut stdin = Cursor::new(stdin.to_string());
    let mut stdout: Vec<u8> = Vec::new();
    let count = run(cli, &mut stdin, &mut stdout)?;
    Ok((count, String::from_utf8(stdout).expect("stdout is utf8")))
}

#[test]
fn test_console_output_from_argument() {
    let (count, stdout) = run_to_string(&cli(Some("192.168.0.0/24"), None), "").unwrap();

    assert_eq!(count, 254);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 254);
    assert_eq!(lines[0], "192.168.0.1");
    assert_eq!(lines[253], "192.168.0.254");
}

#[test]
fn test_console_output_from_stdin() {
    let (count, stdout) = run_to_string(&cli(None, None), "10.0.0.0/30\n").unwrap();

    assert_eq!(count, 2);
    assert_eq!(stdout, "10.0.0.1\n10.0.0.2\n");
}

#[test]
fn test_file_output_mirrors_console() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("output.txt");

    let (count, stdout) =
        run_to_string(&cli(Some("10.0.255.0/23"), Some(path.clone())), "").unwrap();

    assert_eq!(count, 510);
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, stdout);
    assert!(written.ends_with("10.0.255.254\n"));
    assert!(written.contains("10.0.254.255\n10.0.255.0\n"));
}

#[test]
fn test_malformed_cidr_creates_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("output.txt");

    let err = run_to_string(&cli(Some("not-a-cidr"), Some(path.clone())), "").unwrap_err();

    assert!(matches!(
        err,
        ExpandError::Parse(ParseError::MissingPrefix(_))
    ));
    assert_eq!(err.exit_code(), 1);
    assert!(!path.exists(), "no output file for a bad CIDR");
}

#[test]
fn test_out_of_range_prefix() {
    let err = run_to_string(&cli(Some("10.0.0.0/33"), None), "").unwrap_err();
    assert!(matches!(
        err,
        ExpandError::Parse(ParseError::PrefixOutOfRange { prefix: 33, .. })
    ));
}

#[test]
fn test_empty_stdin() {
    let err = run_to_string(&cli(None, None), "").unwrap_err();
    assert!(matches!(err, ExpandError::Parse(ParseError::Empty)));
}

#[test]
fn test_point_to_point_block_is_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("output.txt");

    let (count, stdout) =
        run_to_string(&cli(Some("10.0.0.0/31"), Some(path.clone())), "").unwrap();

    assert_eq!(count, 0);
    assert_eq!(stdout, "");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_unwritable_output_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("output.txt");

    let (err, stdout) = {
        let mut stdin = Cursor::new(String::new());
        let mut stdout: Vec<u8> = Vec::new();
        let err = run(
            &cli(Some("10.0.0.0/30"), Some(path.clone())),
            &mut stdin,
            &mut stdout,
        )
        .unwrap_err();
        (err, stdout)
    };

    assert!(matches!(err, ExpandError::Io { .. }));
    assert!(stdout.is_empty());
}

#[test]
fn test_ipv6_block() {
    let (count, stdout) = run_to_string(&cli(Some("2001:db8::/125"), None), "").unwrap();

    assert_eq!(count, 6);
    assert_eq!(stdout.lines().next(), Some("2001:db8::1"));
    assert_eq!(stdout.lines().last(), Some("2001:db8::6"));
}

#[test]
fn test_same_input_same_output() {
    let first = run_to_string(&cli(Some("172.16.4.0/22"), None), "").unwrap();
    let second = run_to_string(&cli(Some("172.16.4.0/22"), None), "").unwrap();
    assert_eq!(first, second);
}
