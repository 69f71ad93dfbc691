//! Identity and user profile types
//!
//! `Identity` is issued by the hosted auth provider for the lifetime of one
//! session; `UserProfile` is the durable record Painel owns, stored in the
//! hosted `profiles` table.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Provider-issued identity
///
/// Immutable once issued. The `access_token` is the bearer credential used
/// for all table and provider calls made on behalf of this user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque subject id from the provider
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Bearer credential for this session
    pub access_token: String,
}

/// Account role stored on the profile row
///
/// Serialized with the backend's column values: `usuario` for a standard
/// user, `gestor` for a manager promoted through onboarding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountRole {
    #[default]
    #[serde(rename = "usuario")]
    Standard,
    #[serde(rename = "gestor")]
    Manager,
}

/// Durable user profile, keyed by the provider identity id
///
/// Created lazily on first successful authentication. Field names mirror the
/// backing table columns (`tipo`, `empresa_completa`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(rename = "tipo")]
    pub role: AccountRole,
    #[serde(rename = "empresa_completa")]
    pub onboarding_complete: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl UserProfile {
    /// Build the default profile for a first-time identity
    ///
    /// New profiles start as `Standard` with onboarding incomplete.
    #[must_use]
    pub fn new_for_identity(identity: &Identity) -> Self {
        let now = Utc::now().timestamp();
        Self {
            id: identity.id.clone(),
            name: identity.name.clone(),
            email: identity.email.clone(),
            avatar_url: identity.avatar_url.clone(),
            role: AccountRole::Standard,
            onboarding_complete: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this profile has manager privileges
    #[must_use]
    pub fn is_manager(&self) -> bool {
        self.role == AccountRole::Manager
    }
}
