// src/lib.rs
//! metamask-vault-extractor — recover MetaMask vault material from a Chrome
//! extension LevelDB store
//!
//! Features:
//! - Read-only scan of the extension's LevelDB records
//! - Brace-counting extraction of the embedded vault JSON
//! - Old (26600) and new (26620) hashcat hash formats
//! - Diagnostics on stderr, results on stdout

pub mod consts;
pub mod error;
pub mod extract;
pub mod report;
pub mod scan;
pub mod store;
pub mod vault;

// Re-export everything users need at the crate root
pub use error::ExtractError;
pub use extract::{extract_vault_json, normalize_value};
pub use report::Reporter;
pub use scan::{scan_store, ScanOutcome};
pub use store::{is_vault_candidate, VaultStore};
pub use vault::{decode_vault, HashScheme, KdfParams, KeyMetadata, Vault};

pub type Result<T> = std::result::Result<T, ExtractError>;
