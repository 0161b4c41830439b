// src/main.rs
//! Command-line front end — validates the store directory and runs the scan

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

use metamask_vault_extractor::consts::{LDB_EXTENSION, METAMASK_EXTENSION_ID};
use metamask_vault_extractor::{scan_store, Reporter};

const AFTER_HELP: &str = "\
Supports both old and new MetaMask vaults, with or without keyMetadata:
  old: {\"data\": \"\", \"iv\": \"\", \"salt\": \"\"}
  new: {\"data\": \"\", \"iv\": \"\", \"keyMetadata\": {\"algorithm\": \"PBKDF2\", \"params\": {\"iterations\": ...}}, \"salt\": \"\"}

Example:
  metamask-vault-extractor ~/.config/google-chrome/Default/'Local Extension Settings'/nkbihfbeogaeaoehlefnkodbefgpgknn";

/// Extract MetaMask vault JSON and hashcat-ready hash strings from a Chrome
/// extension LevelDB store
#[derive(Parser)]
#[command(name = "metamask-vault-extractor", version, after_help = AFTER_HELP)]
struct Cli {
    /// MetaMask 'Local Extension Settings' directory containing .ldb files
    vault_dir: Option<PathBuf>,

    #[arg(long, hide = true)]
    hodl: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    if cli.hodl {
        let line = STANDARD
            .decode("Tm90IHlvdXIga2V5cywgbm90IHlvdXIgY29pbnMgOykK")
            .context("bad egg")?;
        print!("{}", String::from_utf8_lossy(&line));
        return Ok(());
    }

    clear_screen();

    let Some(dir) = cli.vault_dir else {
        if let Some(hint) = default_vault_location() {
            warn!("the Chrome MetaMask store usually lives at {}", hint.display());
        }
        bail!("MetaMask vault directory is required (see --help)");
    };

    ensure_vault_dir(&dir)?;

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock());
    let outcome = scan_store(&dir, &mut reporter)
        .with_context(|| format!("failed to scan vault store at {}", dir.display()))?;

    if outcome.vaults_found == 0 {
        warn!(
            records_seen = outcome.records_seen,
            "no vault records found — is this a MetaMask 'Local Extension Settings' directory?"
        );
    } else {
        info!(
            records_seen = outcome.records_seen,
            vaults_found = outcome.vaults_found,
            failures = outcome.failures,
            "scan complete"
        );
    }

    Ok(())
}

/// Reject paths that are not a plausible extension store before taking the
/// LevelDB lock
fn ensure_vault_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        bail!("{} does not exist or is not a directory", dir.display());
    }

    let has_ldb = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .any(|e| {
            e.path()
                .extension()
                .and_then(|s| s.to_str())
                .map(|ext| ext.eq_ignore_ascii_case(LDB_EXTENSION))
                .unwrap_or(false)
        });
    if !has_ldb {
        bail!(
            "no .{} files in {} — point this at the extension's 'Local Extension Settings' directory",
            LDB_EXTENSION,
            dir.display()
        );
    }

    Ok(())
}

/// Where Chrome keeps the MetaMask store on this platform, if we can tell
fn default_vault_location() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    let chrome = dirs::config_dir()?.join("Google").join("Chrome");
    #[cfg(target_os = "windows")]
    let chrome = dirs::data_local_dir()?
        .join("Google")
        .join("Chrome")
        .join("User Data");
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let chrome = dirs::config_dir()?.join("google-chrome");

    Some(
        chrome
            .join("Default")
            .join("Local Extension Settings")
            .join(METAMASK_EXTENSION_ID),
    )
}

fn clear_screen() {
    #[cfg(target_os = "windows")]
    Command::new("cmd").args(["/c", "cls"]).status().ok();
    #[cfg(not(target_os = "windows"))]
    Command::new("clear").status().ok();
}
