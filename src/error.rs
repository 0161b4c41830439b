// src/error.rs
//! Public error type for the entire crate
//!
//! Only `StoreOpen` is fatal to a scan; every other variant is contained at
//! the record boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("failed to open vault store: {0}")]
    StoreOpen(rusty_leveldb::Status),

    #[error("no vault JSON marker in record value")]
    MarkerNotFound,

    #[error("vault JSON object is never closed")]
    UnbalancedJson,

    #[error("vault JSON does not match the vault schema: {0}")]
    SchemaDecode(#[from] serde_json::Error),

    #[error("vault record rejected: {0}")]
    InvalidVault(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
