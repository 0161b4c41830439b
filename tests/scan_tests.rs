// tests/scan_tests.rs
//! End-to-end scans over a real scratch LevelDB store

use tempfile::tempdir;

use metamask_vault_extractor::{scan_store, ExtractError, Reporter};

mod common;
mod support;
use support::{
    write_store, MARKERLESS_VALUE, NEW_VAULT_HASH, NEW_VAULT_VALUE, OLD_VAULT_HASH,
    OLD_VAULT_JSON, OLD_VAULT_VALUE,
};

fn run_scan(dir: &std::path::Path) -> (String, metamask_vault_extractor::ScanOutcome) {
    let mut buf = Vec::new();
    let mut reporter = Reporter::new(&mut buf);
    let outcome = scan_store(dir, &mut reporter).expect("scan failed");
    (String::from_utf8(buf).expect("output is UTF-8"), outcome)
}

#[test]
fn test_scan_reports_old_and_new_vaults() {
    common::init_tracing();
    let dir = tempdir().unwrap();
    write_store(
        dir.path(),
        &[
            (b"alpha", br#"{"unrelated":true}"#),
            (b"data", OLD_VAULT_VALUE),
            (b"metadata", NEW_VAULT_VALUE),
        ],
    );

    let (output, outcome) = run_scan(dir.path());

    assert_eq!(outcome.records_seen, 3);
    assert_eq!(outcome.vaults_found, 2);
    assert_eq!(outcome.failures, 0);

    assert!(output.contains(OLD_VAULT_JSON));
    assert!(output.contains(OLD_VAULT_HASH));
    assert!(output.contains(NEW_VAULT_HASH));
    assert!(output.contains("hashcat -m 26600 hash (old format)"));
    assert!(output.contains("hashcat -m 26620 hash (new format)"));

    // banner exactly once, blank-line separator between the two results
    assert_eq!(output.matches("MetaMask Vault Hash Extractor").count(), 1);
    assert!(output.contains("\n\n"));
}

#[test]
fn test_scan_output_is_byte_for_byte_idempotent() {
    common::init_tracing();
    let dir = tempdir().unwrap();
    write_store(
        dir.path(),
        &[(b"data", OLD_VAULT_VALUE), (b"metadata", NEW_VAULT_VALUE)],
    );

    let (first, _) = run_scan(dir.path());
    let (second, _) = run_scan(dir.path());
    assert_eq!(first, second);
}

#[test]
fn test_scan_continues_past_broken_candidates() {
    common::init_tracing();
    let dir = tempdir().unwrap();
    write_store(
        dir.path(),
        &[
            (b"data-broken", MARKERLESS_VALUE),
            (b"data-good", OLD_VAULT_VALUE),
        ],
    );

    let (output, outcome) = run_scan(dir.path());

    assert_eq!(outcome.vaults_found, 1);
    assert_eq!(outcome.failures, 1);
    assert!(output.contains(OLD_VAULT_HASH));
}

#[test]
fn test_saltless_records_are_skipped_silently() {
    common::init_tracing();
    let dir = tempdir().unwrap();
    write_store(
        dir.path(),
        &[(b"data", br#"{"KeyringController":{"isUnlocked":false}}"#)],
    );

    let (output, outcome) = run_scan(dir.path());

    assert_eq!(outcome.records_seen, 1);
    assert_eq!(outcome.vaults_found, 0);
    assert_eq!(outcome.failures, 0);
    assert!(output.is_empty());
}

#[test]
fn test_missing_store_is_fatal() {
    common::init_tracing();
    let dir = tempdir().unwrap();

    let mut buf = Vec::new();
    let mut reporter = Reporter::new(&mut buf);
    let err = scan_store(dir.path(), &mut reporter).unwrap_err();

    assert!(matches!(err, ExtractError::StoreOpen(_)));
    assert!(buf.is_empty());
}
