//! Durable snapshot storage: one JSON document for the whole store.
//!
//! Persistence is best-effort. The in-memory store stays authoritative; a
//! failed write is logged and swallowed, and the operation that triggered it
//! still reports success to its caller.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::store::TournamentStore;

/// File name of the single snapshot document inside the data directory.
pub const STORAGE_FILE: &str = "padel_tourney_v3.json";

/// JSON snapshot channel at a fixed path.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Storage rooted in the given data directory.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STORAGE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted store, or `None` when there is nothing usable.
    ///
    /// A missing file is the normal first run. A file that fails to parse is
    /// logged and treated the same, so a corrupt snapshot never blocks
    /// startup.
    pub fn load(&self) -> Option<TournamentStore> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
            Err(e) => {
                log::error!("failed to open {}: {}", self.path.display(), e);
                return None;
            }
        };
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(store) => Some(store),
            Err(e) => {
                log::error!("failed to parse {}: {}", self.path.display(), e);
                None
            }
        }
    }

    /// Write the store snapshot. Errors are logged and swallowed.
    pub fn save(&self, store: &TournamentStore) {
        if let Err(e) = self.try_save(store) {
            log::error!("failed to persist {}: {}", self.path.display(), e);
        }
    }

    fn try_save(&self, store: &TournamentStore) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        serde_json::to_writer(BufWriter::new(file), store)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
