// src/store.rs
//! Read-only access to the extension's LevelDB store
//!
//! The store is someone else's database — we never create, repair, or write
//! it. Records come back in the store's native lexicographic key order, which
//! keeps output reproducible across runs.

use std::path::Path;

use rusty_leveldb::{DBIterator, Options, DB};

use crate::consts::VAULT_KEY_MARKER;
use crate::error::ExtractError;
use crate::Result;

pub use rusty_leveldb::LdbIterator;

/// An open MetaMask extension store
pub struct VaultStore {
    db: DB,
}

impl VaultStore {
    /// Open the LevelDB store at `dir`. Fails if the directory is not a
    /// valid store (missing metadata, lock held, permissions).
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing = false;
        let db = DB::open(dir.as_ref(), opts).map_err(ExtractError::StoreOpen)?;
        Ok(Self { db })
    }

    /// Iterator over every live `(key, value)` record, in key order.
    /// Drive it with [`LdbIterator::next`].
    pub fn records(&mut self) -> Result<DBIterator> {
        self.db.new_iter().map_err(ExtractError::StoreOpen)
    }
}

/// True iff the key may belong to a vault-bearing record. False positives
/// are fine; downstream stages reject them.
pub fn is_vault_candidate(key: &[u8]) -> bool {
    key.windows(VAULT_KEY_MARKER.len())
        .any(|window| window == VAULT_KEY_MARKER)
}
