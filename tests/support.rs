// tests/support.rs
//! Shared fixtures — a scratch LevelDB store shaped like a real MetaMask
//! extension directory

use std::path::Path;

use rusty_leveldb::{Options, DB};

/// Old-format record value as Chrome persists it: the vault JSON sits
/// escaped inside the extension's state document
pub const OLD_VAULT_VALUE: &[u8] = br#"{"KeyringController":{"isUnlocked":false,"vault":"{\"data\":\"Q0lQSEVS\",\"iv\":\"SVY=\",\"salt\":\"U0FMVA==\"}"},"NetworkController":{"network":"1"}}"#;

/// New-format record value carrying keyMetadata with the iteration count
pub const NEW_VAULT_VALUE: &[u8] = br#"{"KeyringController":{"isUnlocked":false,"vault":"{\"data\":\"Q0lQSEVS\",\"iv\":\"SVY=\",\"keyMetadata\":{\"algorithm\":\"PBKDF2\",\"params\":{\"iterations\":600000}},\"salt\":\"U0FMVA==\"}"},"NetworkController":{"network":"1"}}"#;

/// Mentions salt but carries no vault marker — must be skipped with a warning
pub const MARKERLESS_VALUE: &[u8] = br#"{"KeyringController":{"vault":"[\"salt\"]"}}"#;

pub const OLD_VAULT_JSON: &str = r#"{"data":"Q0lQSEVS","iv":"SVY=","salt":"U0FMVA=="}"#;
pub const OLD_VAULT_HASH: &str = "$metamask$U0FMVA==$SVY=$Q0lQSEVS";
pub const NEW_VAULT_HASH: &str = "$metamask$600000$U0FMVA==$SVY=$Q0lQSEVS";

/// Create a LevelDB store at `dir` holding `records`
pub fn write_store(dir: &Path, records: &[(&[u8], &[u8])]) {
    let mut opts = Options::default();
    opts.create_if_missing = true;
    let mut db = DB::open(dir, opts).expect("create scratch store");
    for (key, value) in records {
        db.put(key, value).expect("put record");
    }
    db.flush().expect("flush scratch store");
}
