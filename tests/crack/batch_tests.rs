// Tests for batch mode and its summary accounting

use std::path::Path;

use hashcrack::{AlgorithmRegistry, CrackError, Cracker};

use crate::common::write_lines;

#[test]
fn test_batch_mixed_fixture() {
    // Comment and blank lines are skipped without counting; "deadbeef" has
    // the wrong length for MD5 and counts as invalid
    let hashes = write_lines(&[
        "#comment",
        "",
        "deadbeef",
        "5f4dcc3b5aa765d61d8327deb882cf99",
    ]);
    let wordlist = write_lines(&["password"]);
    let descriptor = AlgorithmRegistry::resolve("MD5").unwrap();

    let summary = Cracker::new()
        .crack_batch(descriptor, hashes.path(), wordlist.path())
        .unwrap();

    assert_eq!(summary.total, 2);
    assert_eq!(summary.invalid, 1);
    assert_eq!(summary.attempted, 1);
    assert_eq!(summary.cracked, 1);
    assert_eq!(summary.not_cracked(), 0);
    assert!(summary.is_success());
}

#[test]
fn test_batch_aggregate_law() {
    let hashes = write_lines(&[
        "not-hex-at-all!",
        "5f4dcc3b5aa765d61d8327deb882cf99",
        "abcd",
        "d41d8cd98f00b204e9800998ecf8427f", // valid shape, matches nothing
        "  5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8  ", // wrong length after trim
    ]);
    let wordlist = write_lines(&["password", "hello"]);
    let descriptor = AlgorithmRegistry::resolve("MD5").unwrap();

    let summary = Cracker::new()
        .crack_batch(descriptor, hashes.path(), wordlist.path())
        .unwrap();

    assert_eq!(summary.total, summary.invalid + summary.attempted);
    assert!(summary.cracked <= summary.attempted);
    assert_eq!(summary.total, 5);
    assert_eq!(summary.invalid, 3);
    assert_eq!(summary.attempted, 2);
    assert_eq!(summary.cracked, 1);
    assert_eq!(summary.not_cracked(), 1);
}

#[test]
fn test_batch_trims_and_ignores_case() {
    let hashes = write_lines(&[
        "  5F4DCC3B5AA765D61D8327DEB882CF99  ",
        "   # indented comment",
    ]);
    let wordlist = write_lines(&["password"]);
    let descriptor = AlgorithmRegistry::resolve("MD5").unwrap();

    let summary = Cracker::new()
        .crack_batch(descriptor, hashes.path(), wordlist.path())
        .unwrap();

    assert_eq!(summary.total, 1);
    assert_eq!(summary.invalid, 0);
    assert_eq!(summary.cracked, 1);
}

#[test]
fn test_batch_no_cracks_is_failure() {
    let hashes = write_lines(&["d41d8cd98f00b204e9800998ecf8427f"]);
    let wordlist = write_lines(&["password"]);
    let descriptor = AlgorithmRegistry::resolve("MD5").unwrap();

    let summary = Cracker::new()
        .crack_batch(descriptor, hashes.path(), wordlist.path())
        .unwrap();

    assert_eq!(summary.attempted, 1);
    assert_eq!(summary.cracked, 0);
    assert!(!summary.is_success());
}

#[test]
fn test_batch_invalid_lines_do_not_abort() {
    let hashes = write_lines(&[
        "zzzz",
        "zzzz",
        "5f4dcc3b5aa765d61d8327deb882cf99",
    ]);
    let wordlist = write_lines(&["password"]);
    let descriptor = AlgorithmRegistry::resolve("MD5").unwrap();

    let summary = Cracker::new()
        .crack_batch(descriptor, hashes.path(), wordlist.path())
        .unwrap();

    assert_eq!(summary.invalid, 2);
    assert_eq!(summary.cracked, 1);
}

#[test]
fn test_batch_missing_hash_file() {
    let wordlist = write_lines(&["password"]);
    let descriptor = AlgorithmRegistry::resolve("MD5").unwrap();

    let result = Cracker::new().crack_batch(
        descriptor,
        Path::new("no_such_hashes.txt"),
        wordlist.path(),
    );

    match result {
        Err(CrackError::FileNotFound { .. }) => {}
        other => panic!("expected FileNotFound, got {:?}", other.map(|s| s.total)),
    }
}

#[test]
fn test_batch_missing_wordlist_aborts_before_processing() {
    let hashes = write_lines(&["5f4dcc3b5aa765d61d8327deb882cf99"]);
    let descriptor = AlgorithmRegistry::resolve("MD5").unwrap();

    let result = Cracker::new().crack_batch(
        descriptor,
        hashes.path(),
        Path::new("no_such_wordlist.txt"),
    );

    match result {
        Err(CrackError::FileNotFound { .. }) => {}
        other => panic!("expected FileNotFound, got {:?}", other.map(|s| s.total)),
    }
}
