//! # Painel Infra
//!
//! Infrastructure adapters behind the core ports:
//! - REST table repositories against the hosted Postgres-style backend
//! - The hosted identity provider adapter
//! - Durable local stores (session snapshot, preferences)
//! - Configuration loading

pub mod config;
pub mod provider;
pub mod storage;
pub mod tables;

// Re-export the adapter entry points
pub use provider::HostedIdentityProvider;
pub use storage::{FileSnapshotStore, PreferencesStore};
pub use tables::{RestOrganizationRepository, RestProfileRepository, TableClient};
