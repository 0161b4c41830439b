// src/scan.rs
//! The record-scan-and-extraction pipeline
//!
//! One linear pass over the store: key filter → de-escape → extract →
//! decode → report. A record that fails extraction or decoding is logged
//! and skipped; only failure to open the store aborts the scan.

use std::io::Write;
use std::path::Path;

use tracing::warn;

use crate::consts::SALT_FIELD;
use crate::extract::{extract_vault_json, normalize_value};
use crate::report::Reporter;
use crate::store::{is_vault_candidate, LdbIterator, VaultStore};
use crate::vault::{decode_vault, Vault};
use crate::Result;

/// Tally of one full pass over a store
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOutcome {
    pub records_seen: usize,
    pub vaults_found: usize,
    pub failures: usize,
}

/// Scan every record in the store at `dir`, writing results through
/// `reporter`. Returns the tally; per-record failures are warnings, not
/// errors.
pub fn scan_store<W: Write>(dir: &Path, reporter: &mut Reporter<W>) -> Result<ScanOutcome> {
    let mut store = VaultStore::open(dir)?;
    let mut records = store.records()?;
    let mut outcome = ScanOutcome::default();

    while let Some((key, value)) = records.next() {
        outcome.records_seen += 1;
        if !is_vault_candidate(&key) {
            continue;
        }

        let candidate = normalize_value(&value);
        if !candidate.contains(SALT_FIELD) {
            // matching key but no vault material; not worth a warning
            continue;
        }

        match decode_candidate(&candidate) {
            Ok((json, vault)) => {
                reporter.report(json, &vault)?;
                outcome.vaults_found += 1;
            }
            Err(err) => {
                warn!(
                    key = %String::from_utf8_lossy(&key),
                    error = %err,
                    "skipping vault candidate"
                );
                outcome.failures += 1;
            }
        }
    }

    Ok(outcome)
}

fn decode_candidate(candidate: &str) -> Result<(&str, Vault)> {
    let json = extract_vault_json(candidate)?;
    let vault = decode_vault(json)?;
    Ok((json, vault))
}
