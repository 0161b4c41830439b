// src/extract.rs
//! Pulling the vault JSON object out of a raw record value
//!
//! Record values are fragments of a larger JSON document in which the vault
//! object sits as an escaped string (`"vault":"{\"data\":\"...\"}"`). The
//! contract here is two steps: strip every backslash, then recover one
//! brace-balanced object starting at the `{"data":"` marker.

use crate::consts::VAULT_JSON_MARKER;
use crate::error::ExtractError;
use crate::Result;

/// De-escape a raw record value into candidate text.
///
/// Removes every backslash after a lossy UTF-8 conversion. This is a blunt
/// normalization matching how the extension serializes JSON-within-JSON;
/// it cannot corrupt the base64 payloads (the standard alphabet contains no
/// backslash) and the test suite asserts that.
pub fn normalize_value(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).replace('\\', "")
}

/// Recover one complete, brace-balanced vault object from candidate text.
///
/// Finds the last occurrence of the `{"data":"` marker, then scans forward
/// counting `{`/`}` with an initial depth of 1 for the marker's own opening
/// brace. Returns the substring from the marker through the matching `}`.
/// The result is brace-balanced text, not necessarily a valid vault — that
/// is the decoder's concern.
///
/// Strings containing bare braces would defeat the count; vault payloads are
/// base64, so none occur.
pub fn extract_vault_json(candidate: &str) -> Result<&str> {
    let start = candidate
        .rfind(VAULT_JSON_MARKER)
        .ok_or(ExtractError::MarkerNotFound)?;

    let mut depth = 1usize;
    let body = start + VAULT_JSON_MARKER.len();
    for (i, byte) in candidate.as_bytes().iter().enumerate().skip(body) {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(&candidate[start..=i]);
                }
            }
            _ => {}
        }
    }
    Err(ExtractError::UnbalancedJson)
}
