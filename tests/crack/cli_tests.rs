// Tests for pre-engine target validation

use hashcrack::cli::validate_target;
use hashcrack::{AlgorithmRegistry, CrackError};

#[test]
fn test_validate_target_accepts_valid_hashes() {
    let md5 = AlgorithmRegistry::resolve("MD5").unwrap();
    assert!(validate_target(md5, "5f4dcc3b5aa765d61d8327deb882cf99").is_ok());
    assert!(validate_target(md5, "5F4DCC3B5AA765D61D8327DEB882CF99").is_ok());

    let sha1 = AlgorithmRegistry::resolve("SHA1").unwrap();
    assert!(validate_target(sha1, "5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8").is_ok());
}

#[test]
fn test_validate_target_rejects_non_hex() {
    let md5 = AlgorithmRegistry::resolve("MD5").unwrap();

    for hash in ["", "xyz", "5f4dcc3b5aa765d61d8327deb882cf9g", "5f4d cc3b"] {
        match validate_target(md5, hash) {
            Err(CrackError::InvalidHashFormat { .. }) => {}
            other => panic!("expected InvalidHashFormat for '{}', got {:?}", hash, other),
        }
    }
}

#[test]
fn test_validate_target_rejects_wrong_length() {
    // 63 hex chars against SHA256's expected 64
    let sha256 = AlgorithmRegistry::resolve("sha256").unwrap();
    let short = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b85";
    assert_eq!(short.len(), 63);

    match validate_target(sha256, short) {
        Err(CrackError::HashLengthMismatch {
            expected, actual, ..
        }) => {
            assert_eq!(expected, 64);
            assert_eq!(actual, 63);
        }
        other => panic!("expected HashLengthMismatch, got {:?}", other),
    }
}

#[test]
fn test_validate_target_checks_format_before_length() {
    // Wrong length and non-hex: format wins
    let md5 = AlgorithmRegistry::resolve("MD5").unwrap();
    match validate_target(md5, "zzz") {
        Err(CrackError::InvalidHashFormat { .. }) => {}
        other => panic!("expected InvalidHashFormat, got {:?}", other),
    }
}
