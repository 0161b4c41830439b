// src/report.rs
//! Presentation of scan results
//!
//! Writes each extracted JSON blob and its hash line to the output stream,
//! with a one-time header banner and a blank line between successive vaults.

use std::io::{self, Write};

use crate::vault::Vault;

const HEADER_RULE: &str = " ------------------------------------------------------ ";
const MODE_RULE: &str = " -------------------------------------------------- ";

pub struct Reporter<W: Write> {
    out: W,
    reported: usize,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, reported: 0 }
    }

    /// Write one result: the extracted JSON verbatim, then a banner naming
    /// the detected hashcat mode, then the hash line.
    pub fn report(&mut self, json: &str, vault: &Vault) -> io::Result<()> {
        if self.reported == 0 {
            writeln!(self.out, "{HEADER_RULE}")?;
            writeln!(self.out, "|            MetaMask Vault Hash Extractor             |")?;
            writeln!(self.out, "| Decrypt the extracted JSON with the Vault Decryptor  |")?;
            writeln!(self.out, "{HEADER_RULE}")?;
        } else {
            writeln!(self.out)?;
        }
        self.reported += 1;

        writeln!(self.out, "{json}")?;

        let scheme = vault.scheme();
        writeln!(self.out, "{MODE_RULE}")?;
        writeln!(
            self.out,
            "|        hashcat -m {} hash ({} format)        |",
            scheme.hashcat_mode(),
            scheme.label()
        )?;
        if vault.key_metadata.is_some() {
            writeln!(self.out, "| See https://github.com/hashcat/hashcat/pull/3952 |")?;
        }
        writeln!(self.out, "{MODE_RULE}")?;
        writeln!(self.out, "{}", vault.hash_line())?;
        Ok(())
    }

    /// How many vaults have been written so far
    pub fn reported(&self) -> usize {
        self.reported
    }
}
