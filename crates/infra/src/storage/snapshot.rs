//! File-backed session snapshot store
//!
//! Mirrors the authenticated session to one JSON file so a restart restores
//! identity without a new handshake. Corruption is swallowed and reported as
//! absence; losing a snapshot only costs a re-login.

use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use painel_core::session::ports::SessionSnapshotStore;
use painel_domain::constants::SESSION_SNAPSHOT_FILE;
use painel_domain::{PainelError, Result, Session};
use tracing::{debug, warn};

/// Session snapshot persisted as a single JSON file
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    /// Create a store rooted at the given data directory
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self { path: data_dir.join(SESSION_SNAPSHOT_FILE) }
    }

    /// The file this store reads and writes
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionSnapshotStore for FileSnapshotStore {
    async fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| PainelError::Storage(format!("snapshot dir: {err}")))?;
        }

        let bytes = serde_json::to_vec_pretty(session)
            .map_err(|err| PainelError::Storage(format!("snapshot encode: {err}")))?;

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|err| PainelError::Storage(format!("snapshot write: {err}")))?;

        debug!(path = %self.path.display(), "session snapshot written");
        Ok(())
    }

    async fn load(&self) -> Result<Option<Session>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(PainelError::Storage(format!("snapshot read: {err}"))),
        };

        match serde_json::from_slice(&bytes) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                // Corruption is treated as absence, never as a fatal error
                warn!(path = %self.path.display(), error = %err, "snapshot corrupt, ignoring");
                Ok(None)
            }
        }
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(PainelError::Storage(format!("snapshot remove: {err}"))),
        }
    }
}
