//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `PAINEL_PROVIDER_URL`: Hosted service base URL
//! - `PAINEL_PROVIDER_ANON_KEY`: Public API key
//! - `PAINEL_PROVIDER_CLIENT_ID`: OAuth client id
//! - `PAINEL_PROVIDER_REDIRECT_URI`: Callback URI (optional)
//! - `PAINEL_PROVIDER_SCOPES`: Space-separated scopes (optional)
//! - `PAINEL_DATA_DIR`: Local data directory (optional)
//! - `PAINEL_BIND_ADDR`: API bind address (optional)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.toml` or `./config.json`
//! 2. `./painel.toml` or `./painel.json`
//! 3. The same names in the parent directory

use std::path::{Path, PathBuf};

use painel_domain::{Config, PainelError, ProviderConfig, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `PainelError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// The provider URL, anon key, and client id are required; everything else
/// falls back to defaults.
///
/// # Errors
/// Returns `PainelError::Config` naming the first missing variable.
pub fn load_from_env() -> Result<Config> {
    let mut config = Config::default();

    config.provider.base_url = require_env("PAINEL_PROVIDER_URL")?;
    config.provider.anon_key = require_env("PAINEL_PROVIDER_ANON_KEY")?;
    config.provider.client_id = require_env("PAINEL_PROVIDER_CLIENT_ID")?;

    if let Ok(redirect_uri) = std::env::var("PAINEL_PROVIDER_REDIRECT_URI") {
        config.provider.redirect_uri = redirect_uri;
    }
    if let Ok(scopes) = std::env::var("PAINEL_PROVIDER_SCOPES") {
        config.provider.scopes = scopes.split_whitespace().map(str::to_string).collect();
    }
    if let Ok(data_dir) = std::env::var("PAINEL_DATA_DIR") {
        config.storage.data_dir = data_dir;
    }
    if let Ok(bind_addr) = std::env::var("PAINEL_BIND_ADDR") {
        config.server.bind_addr = bind_addr;
    }

    Ok(config)
}

/// Load configuration from a file
///
/// With no explicit path, probes the default locations.
///
/// # Errors
/// Returns `PainelError::Config` if no file is found or parsing fails.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let path = match path {
        Some(path) => path,
        None => probe_config_paths().ok_or_else(|| {
            PainelError::Config("no config file found in default locations".to_string())
        })?,
    };

    let raw = std::fs::read_to_string(&path)
        .map_err(|err| PainelError::Config(format!("read {}: {err}", path.display())))?;

    let config = parse_config(&path, &raw)?;
    validate(&config.provider)?;

    tracing::info!(path = %path.display(), "Configuration loaded from file");
    Ok(config)
}

/// Probe the default config file locations
#[must_use]
pub fn probe_config_paths() -> Option<PathBuf> {
    let names = ["config.toml", "config.json", "painel.toml", "painel.json"];
    let bases = [PathBuf::from("."), PathBuf::from("..")];

    for base in &bases {
        for name in &names {
            let candidate = base.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn parse_config(path: &Path, raw: &str) -> Result<Config> {
    let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(raw)
            .map_err(|err| PainelError::Config(format!("parse {}: {err}", path.display())))
    } else {
        toml::from_str(raw)
            .map_err(|err| PainelError::Config(format!("parse {}: {err}", path.display())))
    }
}

fn validate(provider: &ProviderConfig) -> Result<()> {
    if provider.base_url.is_empty() {
        return Err(PainelError::Config("provider.base_url is required".to_string()));
    }
    if provider.anon_key.is_empty() {
        return Err(PainelError::Config("provider.anon_key is required".to_string()));
    }
    Ok(())
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .ok_or_else(|| PainelError::Config(format!("missing environment variable {name}")))
}
