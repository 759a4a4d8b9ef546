use std::fs;
use std::io;

use assert_cmd::Command;
use phylo::{Attributes, Entry, Enumeration, FileTime, OpenConfig, PhyloError, Source};
use predicates::prelude::*;

fn phylo() -> Command {
    let mut cmd = Command::cargo_bin("phylo").unwrap();
    cmd.env_remove("PHYLO_LOG");
    cmd
}

#[test]
fn no_arguments_is_a_usage_error() {
    phylo()
        .assert()
        .code(1)
        .stdout("Expected 2 arguments: operation arg\n");
}

#[test]
fn one_argument_is_a_usage_error() {
    phylo()
        .arg("dir")
        .assert()
        .code(1)
        .stdout("Expected 2 arguments: operation arg\n");
}

#[test]
fn three_arguments_is_a_usage_error() {
    phylo()
        .args(["dir", "a", "b"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Expected 2 arguments"));
}

#[test]
fn unknown_operation_exits_zero() {
    phylo()
        .args(["copy", "x"])
        .assert()
        .code(0)
        .stdout("Unknown operation. Should be \"dir\".\n");
}

#[test]
fn operation_name_is_case_sensitive() {
    phylo()
        .args(["DIR", "."])
        .assert()
        .code(0)
        .stdout(predicate::str::starts_with("Unknown operation"));
}

#[test]
fn missing_path_exits_two_with_pattern() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nowhere").join("*");
    let missing = missing.to_str().unwrap();

    let out = phylo().args(["dir", missing]).assert().code(2).get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with(&format!("Failed to read \"{missing}\" (")), "got {text}");
}

#[test]
fn empty_directory_prints_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = dir.path().join("*");

    phylo()
        .arg("dir")
        .arg(&pattern)
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

#[test]
fn lists_files_one_per_line() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("one.txt"), "1").unwrap();
    fs::write(dir.path().join("three.txt"), "333").unwrap();
    let pattern = dir.path().join("*.txt");

    let out = phylo().arg("dir").arg(&pattern).assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();

    let mut lines: Vec<&str> = text.lines().collect();
    lines.sort_by_key(|l| l.rsplit('/').next().unwrap_or_default().to_string());
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("/1/one.txt"), "got {}", lines[0]);
    assert!(lines[1].ends_with("/3/three.txt"), "got {}", lines[1]);
    assert!(text.ends_with('\n'));
}

#[test]
fn help_exits_zero() {
    phylo()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn dashed_operation_is_an_unknown_operation() {
    for operation in ["-x", "--", "-h", "--version"] {
        phylo()
            .args([operation, "foo"])
            .assert()
            .code(0)
            .stdout("Unknown operation. Should be \"dir\".\n");
    }
}

#[test]
fn version_alone_exits_zero() {
    phylo()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("phylo "));
}

#[test]
fn flag_like_pattern_is_listed_not_interpreted() {
    let dir = tempfile::tempdir().unwrap();

    for flag in ["--help", "-V"] {
        phylo()
            .current_dir(dir.path())
            .args(["dir", flag])
            .assert()
            .code(2)
            .stdout(format!("Failed to read \"{flag}\" (2)\n"));
    }
}

#[test]
fn file_named_like_a_flag_is_listed() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("--help"), "ab").unwrap();

    phylo()
        .current_dir(dir.path())
        .args(["dir", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("/2/--help\n"));
}

#[cfg(unix)]
#[test]
fn non_utf8_pattern_fails_to_open() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let dir = tempfile::tempdir().unwrap();
    let pattern = dir.path().join(OsStr::from_bytes(b"\xffmissing"));

    phylo()
        .arg("dir")
        .arg(&pattern)
        .assert()
        .code(2)
        .stdout(predicate::str::starts_with("Failed to read \""));
}

// ---------------------------------------------------------------------------
// Reporting through a custom source
// ---------------------------------------------------------------------------

/// Yields one entry, then fails with OS code 5.
struct FailingSource;

impl Source for FailingSource {
    fn open(&self, pattern: &str, _config: &OpenConfig) -> Result<Enumeration, PhyloError> {
        let first = Entry {
            name:       "first".to_string(),
            attributes: Attributes::ARCHIVE,
            created:    FileTime::UNIX_EPOCH,
            accessed:   FileTime::UNIX_EPOCH,
            modified:   FileTime::UNIX_EPOCH,
            size:       1,
        };
        let failure = PhyloError::Enumeration {
            pattern: pattern.to_string(),
            source:  io::Error::from_raw_os_error(5),
        };
        Ok(Box::new(vec![Ok(first), Err(failure)].into_iter()))
    }
}

#[test]
fn interrupted_listing_exits_three() {
    let mut out = Vec::<u8>::new();
    let code = phylo::cli::dir_from(FailingSource, "x\\*", &mut out);

    assert_eq!(code, 3);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "A/0/0/0/1/first\nFailed while reading \"x\\*\" (5)\n"
    );
}

#[test]
fn in_process_run_counts_arguments_only() {
    let mut out = Vec::<u8>::new();
    assert_eq!(phylo::cli::run(["phylo", "-x", "foo"], &mut out), 0);
    assert_eq!(String::from_utf8(out).unwrap(), "Unknown operation. Should be \"dir\".\n");

    let mut out = Vec::<u8>::new();
    assert_eq!(phylo::cli::run(["phylo", "-h", "foo", "bar"], &mut out), 1);
    assert_eq!(String::from_utf8(out).unwrap(), "Expected 2 arguments: operation arg\n");
}
