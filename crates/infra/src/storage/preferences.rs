//! Theme preference store
//!
//! Same single-key file idiom as the session snapshot; a missing or corrupt
//! file falls back to the default (light) theme.

use std::io;
use std::path::{Path, PathBuf};

use painel_domain::constants::PREFERENCES_FILE;
use painel_domain::{PainelError, Result, ThemeMode};
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default)]
    theme: ThemeMode,
}

/// Durable store for shell preferences
pub struct PreferencesStore {
    path: PathBuf,
}

impl PreferencesStore {
    /// Create a store rooted at the given data directory
    #[must_use]
    pub fn new(data_dir: &Path) -> Self {
        Self { path: data_dir.join(PREFERENCES_FILE) }
    }

    /// Current theme preference; absence and corruption both fall back to
    /// the default
    pub async fn theme(&self) -> ThemeMode {
        self.read().await.theme
    }

    /// Persist a theme preference
    ///
    /// # Errors
    /// Returns `PainelError::Storage` if the file cannot be written.
    pub async fn set_theme(&self, theme: ThemeMode) -> Result<()> {
        let preferences = Preferences { theme };

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|err| PainelError::Storage(format!("preferences dir: {err}")))?;
        }

        let bytes = serde_json::to_vec_pretty(&preferences)
            .map_err(|err| PainelError::Storage(format!("preferences encode: {err}")))?;

        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|err| PainelError::Storage(format!("preferences write: {err}")))
    }

    async fn read(&self) -> Preferences {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                if err.kind() != io::ErrorKind::NotFound {
                    warn!(path = %self.path.display(), error = %err, "preferences unreadable");
                }
                return Preferences::default();
            }
        };

        serde_json::from_slice(&bytes).unwrap_or_else(|err| {
            warn!(path = %self.path.display(), error = %err, "preferences corrupt, using defaults");
            Preferences::default()
        })
    }
}
