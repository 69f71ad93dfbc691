//! Domain types and models

pub mod organization;
pub mod session;
pub mod user;

use serde::{Deserialize, Serialize};

// Re-export the main types for convenience
pub use organization::{Organization, OrganizationDraft};
pub use session::{Session, SessionEvent, SessionState};
pub use user::{AccountRole, Identity, UserProfile};

/// UI theme preference persisted in the local preferences store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode, used by the toggle endpoint
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}
