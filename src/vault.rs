// src/vault.rs
//! The decoded vault record and its hash-string encodings
//!
//! MetaMask has shipped two vault schemas: the old one (salt, iv, data) and
//! the new one that adds a `keyMetadata` block with the PBKDF2 iteration
//! count. All shared fields are identical, so both decode into one struct
//! with an optional `key_metadata` rather than two record types.

use serde::Deserialize;

use crate::consts::{HASHCAT_MODE_NEW, HASHCAT_MODE_OLD};
use crate::error::ExtractError;
use crate::Result;

/// One decrypted-key-derivation bundle as persisted by the extension
#[derive(Debug, Clone, Deserialize)]
pub struct Vault {
    pub salt: String,
    pub iv: String,
    #[serde(rename = "data")]
    pub vault_data: String,
    #[serde(rename = "keyMetadata")]
    pub key_metadata: Option<KeyMetadata>,
}

/// KDF parameters, present only in the new schema
#[derive(Debug, Clone, Deserialize)]
pub struct KeyMetadata {
    pub algorithm: String,
    pub params: KdfParams,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KdfParams {
    pub iterations: u32,
}

/// Which hash-string encoding a vault calls for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    /// Old schema, fixed iteration count
    Legacy,
    /// New schema, iteration count carried in `keyMetadata`
    Pbkdf2,
}

impl HashScheme {
    pub fn hashcat_mode(self) -> u32 {
        match self {
            Self::Legacy => HASHCAT_MODE_OLD,
            Self::Pbkdf2 => HASHCAT_MODE_NEW,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Legacy => "old",
            Self::Pbkdf2 => "new",
        }
    }
}

/// Decode extracted JSON text into a [`Vault`].
///
/// Rejects records with missing or mistyped fields, empty base64 fields, or
/// a partially-present `keyMetadata` block. `iterations` must be a positive
/// integer.
pub fn decode_vault(json: &str) -> Result<Vault> {
    let vault: Vault = serde_json::from_str(json)?;

    if vault.salt.is_empty() {
        return Err(ExtractError::InvalidVault("empty salt"));
    }
    if vault.iv.is_empty() {
        return Err(ExtractError::InvalidVault("empty iv"));
    }
    if vault.vault_data.is_empty() {
        return Err(ExtractError::InvalidVault("empty data"));
    }
    if let Some(meta) = &vault.key_metadata {
        if meta.params.iterations == 0 {
            return Err(ExtractError::InvalidVault("iterations must be positive"));
        }
    }

    Ok(vault)
}

impl Vault {
    pub fn scheme(&self) -> HashScheme {
        if self.key_metadata.is_some() {
            HashScheme::Pbkdf2
        } else {
            HashScheme::Legacy
        }
    }

    /// Synthesize the single-line hash string for this vault.
    ///
    /// The base64 fields pass through exactly as decoded — no re-encoding.
    pub fn hash_line(&self) -> String {
        match &self.key_metadata {
            Some(meta) => format!(
                "$metamask${}${}${}${}",
                meta.params.iterations, self.salt, self.iv, self.vault_data
            ),
            None => format!("$metamask${}${}${}", self.salt, self.iv, self.vault_data),
        }
    }
}
