//! Hosted identity provider adapter
//!
//! Implements the core `IdentityProvider` port on top of the hosted auth
//! client, mapping wire types and client errors into domain terms.

use std::sync::Arc;

use async_trait::async_trait;
use painel_common::auth::{HostedAuthApi, HostedAuthClient, HostedAuthConfig, HostedAuthError};
use painel_core::session::ports::IdentityProvider;
use painel_domain::{Identity, PainelError, ProviderConfig, Result};
use tracing::debug;

/// Identity provider backed by the hosted auth service
pub struct HostedIdentityProvider {
    client: Arc<dyn HostedAuthApi>,
}

impl HostedIdentityProvider {
    /// Build the adapter from application configuration
    #[must_use]
    pub fn new(config: &ProviderConfig) -> Self {
        let client = HostedAuthClient::new(HostedAuthConfig {
            base_url: config.base_url.clone(),
            anon_key: config.anon_key.clone(),
            client_id: config.client_id.clone(),
            redirect_uri: config.redirect_uri.clone(),
            scopes: config.scopes.clone(),
        });

        Self { client: Arc::new(client) }
    }

    /// Build the adapter over an existing client (tests)
    #[must_use]
    pub fn with_client(client: Arc<dyn HostedAuthApi>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityProvider for HostedIdentityProvider {
    fn begin_login(&self) -> String {
        let (url, state) = self.client.authorize_url();
        debug!(state = %state, "built authorization URL");
        url
    }

    async fn resolve_identity(&self, access_token: &str) -> Result<Identity> {
        let user = self
            .client
            .fetch_user(access_token)
            .await
            .map_err(map_auth_error)?;

        Ok(Identity {
            id: user.id,
            name: user.name,
            email: user.email,
            avatar_url: user.avatar_url,
            access_token: access_token.to_string(),
        })
    }

    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<()> {
        self.client.sign_up(name, email, password).await.map_err(map_auth_error)
    }

    async fn logout(&self, access_token: &str) -> Result<()> {
        self.client.sign_out(access_token).await.map_err(map_auth_error)
    }

    async fn update_metadata(
        &self,
        access_token: &str,
        metadata: serde_json::Value,
    ) -> Result<()> {
        self.client.update_user_metadata(access_token, metadata).await.map_err(map_auth_error)
    }
}

fn map_auth_error(err: HostedAuthError) -> PainelError {
    match err {
        HostedAuthError::RequestFailed(inner) => {
            PainelError::Network(format!("provider unreachable: {inner}"))
        }
        HostedAuthError::ConfigError(msg) => PainelError::Config(msg),
        other => PainelError::Provider(other.to_string()),
    }
}
