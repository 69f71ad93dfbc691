//! Application context - dependency injection container

use std::path::Path;
use std::sync::Arc;

use painel_core::session::ports::{
    IdentityProvider, OrganizationRepository, ProfileRepository,
};
use painel_core::{OnboardingService, SessionManager};
use painel_domain::{Config, Result};
use painel_infra::tables::{
    RestOrganizationRepository, RestProfileRepository, TableClient, TableClientConfig,
};
use painel_infra::{FileSnapshotStore, HostedIdentityProvider, PreferencesStore};

/// Application context - holds all services and dependencies
///
/// One context is built at startup from the loaded configuration and shared
/// (via `Arc`) with every route handler.
pub struct AppContext {
    pub config: Config,
    pub session: Arc<SessionManager>,
    pub onboarding: Arc<OnboardingService>,
    pub provider: Arc<dyn IdentityProvider>,
    pub preferences: Arc<PreferencesStore>,
}

impl AppContext {
    /// Build the context and wire every port to its adapter
    ///
    /// # Errors
    /// Returns error if the table client cannot be constructed.
    pub fn new(config: Config) -> Result<Self> {
        let table_client = Arc::new(TableClient::new(TableClientConfig::new(
            config.provider.base_url.clone(),
            config.provider.anon_key.clone(),
        ))?);

        let profiles: Arc<dyn ProfileRepository> =
            Arc::new(RestProfileRepository::new(Arc::clone(&table_client)));
        let organizations: Arc<dyn OrganizationRepository> =
            Arc::new(RestOrganizationRepository::new(table_client));

        let data_dir = Path::new(&config.storage.data_dir);
        let snapshot = Arc::new(FileSnapshotStore::new(data_dir));
        let preferences = Arc::new(PreferencesStore::new(data_dir));

        let provider: Arc<dyn IdentityProvider> =
            Arc::new(HostedIdentityProvider::new(&config.provider));

        let session = Arc::new(SessionManager::new(
            Arc::clone(&provider),
            Arc::clone(&profiles),
            snapshot,
        ));

        let onboarding = Arc::new(OnboardingService::new(
            organizations,
            profiles,
            Arc::clone(&provider),
        ));

        Ok(Self { config, session, onboarding, provider, preferences })
    }
}
