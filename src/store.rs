use crate::booking::Ledger;
use crate::error::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub trait LedgerStore {
    /// Writes a snapshot of the whole ledger, replacing any previous one.
    /// Errors surface to the caller, who decides whether they are fatal.
    fn save(&mut self, ledger: &Ledger) -> Result<()>;

    /// Reads the last snapshot. A missing, unreadable, or corrupt snapshot
    /// yields an empty ledger: startup always succeeds, at the cost of
    /// silently dropping whatever a damaged file held.
    fn load(&self) -> Ledger;
}

/// Persists the ledger as one JSON document. The snapshot is written to a
/// temporary file in the target directory and renamed into place, so a crash
/// mid-write never corrupts a previously valid file.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LedgerStore for JsonFileStore {
    fn save(&mut self, ledger: &Ledger) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(ledger)?;

        let dir = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&bytes)?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    fn load(&self) -> Ledger {
        fs::read(&self.path)
            .ok()
            .and_then(|bytes| serde_json::from_slice(&bytes).ok())
            .unwrap_or_default()
    }
}

/// Holds the snapshot in a process-local buffer, going through the same JSON
/// codec as the file store. Used by tests.
#[derive(Default)]
pub struct InMemoryStore {
    snapshot: Option<Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LedgerStore for InMemoryStore {
    fn save(&mut self, ledger: &Ledger) -> Result<()> {
        self.snapshot = Some(serde_json::to_vec(ledger)?);
        Ok(())
    }

    fn load(&self) -> Ledger {
        self.snapshot
            .as_deref()
            .and_then(|bytes| serde_json::from_slice(bytes).ok())
            .unwrap_or_default()
    }
}
