//! Integration tests for the bupot binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help() {
    Command::cargo_bin("bupot")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("bukti pemotongan"));
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    Command::cargo_bin("bupot")
        .unwrap()
        .current_dir(dir.path())
        .arg("missing.pdf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_corrupt_pdf_fails_with_truncated_outputs() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bupot.pdf"), b"not a pdf").unwrap();

    Command::cargo_bin("bupot")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .failure();

    // Artifacts are truncated at run start and stay empty when the
    // conversion fails.
    assert_eq!(
        std::fs::read(dir.path().join("raw_result.txt")).unwrap(),
        b""
    );
    assert_eq!(
        std::fs::read(dir.path().join("structured_result.txt")).unwrap(),
        b""
    );
}
