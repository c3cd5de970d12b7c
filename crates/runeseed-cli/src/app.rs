//! One CLI run: open a session, sample the main stream, save the store.

use std::io::Write;
use std::path::{Path, PathBuf};

use runeseed_core::clock::SystemClock;
use runeseed_engine::{OsEntropy, RngSession, SeedStore};
use tracing::info;

use crate::config::CliConfig;
use crate::error::AppError;

/// Runs the CLI against `config`, writing the seed string and the sample
/// draws to `out`.
///
/// # Errors
///
/// Returns an error if the store file cannot be read, parsed, or written.
pub fn run(config: &CliConfig, out: &mut impl Write) -> Result<(), AppError> {
    let mut session = open_session(config)?;

    writeln!(out, "seed {}", session.export_seed_string())?;
    let draws: Vec<String> = (0..config.draws)
        .map(|_| session.uniform0(config.bound).to_string())
        .collect();
    writeln!(out, "draws {}", draws.join(" "))?;

    if let Some(path) = &config.store_path {
        save_store(path, session.seed_store())?;
        info!(path = %path.display(), "seed store saved");
    }
    Ok(())
}

/// An explicit seed always births a new world; otherwise an existing store
/// file is resumed, and failing that the world is born from entropy.
fn open_session(config: &CliConfig) -> Result<RngSession, AppError> {
    if let Some(master) = config.seed {
        info!(seed = %master, "birthing from configured seed");
        return Ok(RngSession::from_seed(master));
    }

    if let Some(path) = config.store_path.as_deref().filter(|p| p.exists()) {
        let store = load_store(path)?;
        info!(path = %path.display(), seed = %store.master(), "resuming seed store");
        return Ok(RngSession::resume(store));
    }

    let session = RngSession::from_entropy(&mut OsEntropy, &SystemClock);
    info!(seed = %session.master_seed(), "birthed from entropy");
    Ok(session)
}

fn load_store(path: &Path) -> Result<SeedStore, AppError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

/// Writes `store` next to `path` and renames it into place, so an
/// interrupted save leaves the previous store intact.
fn save_store(path: &Path, store: &SeedStore) -> Result<(), AppError> {
    let json = serde_json::to_string(store)?;
    let staging = staging_path(path);
    std::fs::write(&staging, json)?;
    if let Err(e) = std::fs::rename(&staging, path) {
        let _ = std::fs::remove_file(&staging);
        return Err(e.into());
    }
    Ok(())
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
