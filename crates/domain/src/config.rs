//! Application configuration structures
//!
//! Loaded by the infra config loader from environment variables or a
//! `config.toml` / `painel.toml` file. All sections have defaults so a
//! partial file is acceptable.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BIND_ADDR, DEFAULT_SCOPE};

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: ProviderConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Hosted auth/table service configuration
///
/// `base_url` points at the hosted backend; auth endpoints live under
/// `/auth/v1` and table endpoints under `/rest/v1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Service base URL (e.g. "https://abc123.painelcloud.dev")
    pub base_url: String,

    /// Public (anon) API key sent with every request
    pub anon_key: String,

    /// OAuth client id forwarded to the upstream identity provider
    pub client_id: String,

    /// Redirect URI the provider sends the browser back to
    pub redirect_uri: String,

    /// OAuth scopes to request (space-separated when sent)
    pub scopes: Vec<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            anon_key: String::new(),
            client_id: String::new(),
            redirect_uri: "http://localhost:3000/auth/callback".to_string(),
            scopes: DEFAULT_SCOPE.split(' ').map(str::to_string).collect(),
        }
    }
}

impl ProviderConfig {
    /// Get scopes as a space-separated string
    #[must_use]
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }
}

/// Local durable storage configuration
///
/// The session snapshot and theme preference are single-key JSON files under
/// `data_dir`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the session snapshot and preferences files
    pub data_dir: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { data_dir: ".painel".to_string() }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the api binds to
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: DEFAULT_BIND_ADDR.to_string() }
    }
}
