// src/consts.rs
//! Shared constants — record markers and output format parameters

/// Key substring marking LevelDB records that may carry vault JSON
pub const VAULT_KEY_MARKER: &[u8] = b"data";

/// Start of the serialized vault object inside a de-escaped record value
pub const VAULT_JSON_MARKER: &str = r#"{"data":""#;

/// Field every vault record carries; candidate values without it are noise
pub const SALT_FIELD: &str = "salt";

/// File extension of LevelDB table files inside a store directory
pub const LDB_EXTENSION: &str = "ldb";

/// hashcat mode for the old vault format (no keyMetadata)
pub const HASHCAT_MODE_OLD: u32 = 26600;

/// hashcat mode for the new vault format (dynamic iteration count)
pub const HASHCAT_MODE_NEW: u32 = 26620;

/// Chrome extension id MetaMask stores its vault under
pub const METAMASK_EXTENSION_ID: &str = "nkbihfbeogaeaoehlefnkodbefgpgknn";
