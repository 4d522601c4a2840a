//! Snapshot persistence.

use std::path::PathBuf;

use tracing::debug;

use crate::domain::Snapshot;
use crate::error::{Result, StorageError};

/// JSON-file store for the previous run's snapshot.
///
/// A missing file is a hard error, not an implicit first run; seed the file
/// by hand before the first scheduled invocation. Writes overwrite in place
/// with no atomic-rename guarantee, so a crash mid-write can corrupt the
/// file and the next run will report the decode failure.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Snapshot> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| StorageError::Read {
            path: self.path.clone(),
            source: e,
        })?;
        let snapshot = serde_json::from_str(&content).map_err(StorageError::Decode)?;

        debug!(path = %self.path.display(), ?snapshot, "loaded snapshot");
        Ok(snapshot)
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let content = serde_json::to_string(snapshot).map_err(StorageError::Encode)?;
        std::fs::write(&self.path, content).map_err(|e| StorageError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), ?snapshot, "saved snapshot");
        Ok(())
    }
}
