//! REST client for the hosted auth service
//!
//! Covers the `/auth/v1` surface: building the authorization redirect URL,
//! fetching user info with a bearer token, sign-up, best-effort sign-out,
//! and user-metadata updates.

use rand::distributions::Alphanumeric;
use rand::Rng;
use reqwest::{Client, StatusCode};
use serde_json::json;
use tracing::debug;

use super::types::{ProviderApiError, UserInfo, VerifiedUser};

/// Length of the random `state` parameter sent with the handshake
const STATE_LENGTH: usize = 32;

/// Error type for hosted auth client operations
#[derive(Debug)]
pub enum HostedAuthError {
    /// HTTP request failed
    RequestFailed(reqwest::Error),

    /// The service returned an error body
    Api(ProviderApiError),

    /// The bearer token was rejected (expired or invalid)
    TokenRejected,

    /// Response body did not match the expected shape; the offending field
    /// or parse detail is carried in the message
    MalformedResponse(String),

    /// Invalid configuration
    ConfigError(String),
}

impl std::fmt::Display for HostedAuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RequestFailed(e) => write!(f, "HTTP request failed: {e}"),
            Self::Api(e) => write!(f, "Provider error: {e}"),
            Self::TokenRejected => write!(f, "Access token rejected by provider"),
            Self::MalformedResponse(msg) => write!(f, "Malformed provider response: {msg}"),
            Self::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for HostedAuthError {}

impl From<reqwest::Error> for HostedAuthError {
    fn from(err: reqwest::Error) -> Self {
        Self::RequestFailed(err)
    }
}

/// Configuration for the hosted auth client
#[derive(Debug, Clone)]
pub struct HostedAuthConfig {
    /// Service base URL (no trailing slash)
    pub base_url: String,

    /// Public API key sent as the `apikey` header on every request
    pub anon_key: String,

    /// OAuth client id forwarded to the upstream identity provider
    pub client_id: String,

    /// Redirect URI the provider sends the browser back to
    pub redirect_uri: String,

    /// Scopes to request (space-separated when sent)
    pub scopes: Vec<String>,
}

impl HostedAuthConfig {
    /// The authorization endpoint for browser redirects
    #[must_use]
    pub fn authorize_url(&self) -> String {
        format!("{}/auth/v1/authorize", self.base_url)
    }

    /// The user-info endpoint
    #[must_use]
    pub fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.base_url)
    }

    /// Get scopes as a space-separated string
    #[must_use]
    pub fn scope_string(&self) -> String {
        self.scopes.join(" ")
    }
}

/// Client for the hosted authentication service
///
/// The actual credential check happens on the hosted backend; this client
/// only builds the redirect URL and talks to the REST endpoints with the
/// session's bearer token.
#[derive(Debug, Clone)]
pub struct HostedAuthClient {
    config: HostedAuthConfig,
    client: Option<Client>,
}

impl HostedAuthClient {
    /// Create a new client with the given configuration
    #[must_use]
    pub fn new(config: HostedAuthConfig) -> Self {
        let client = if std::env::var_os("PAINEL_AUTH_DISABLE_HTTP").is_some() {
            None
        } else {
            let builder = Client::builder().timeout(std::time::Duration::from_secs(30));
            Some(builder.build().unwrap_or_else(|_| Client::new()))
        };

        Self { config, client }
    }

    /// Build the authorization URL for a browser-based login
    ///
    /// # Returns
    /// Tuple of (authorization_url, state); the state parameter is random
    /// and should be validated when the callback returns.
    #[must_use]
    pub fn authorize_url(&self) -> (String, String) {
        let state: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(STATE_LENGTH)
            .map(char::from)
            .collect();

        let params = vec![
            ("client_id".to_string(), self.config.client_id.clone()),
            ("redirect_uri".to_string(), self.config.redirect_uri.clone()),
            ("response_type".to_string(), "token".to_string()),
            ("scope".to_string(), self.config.scope_string()),
            ("state".to_string(), state.clone()),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let url = format!("{}?{}", self.config.authorize_url(), query_string);

        (url, state)
    }

    /// Fetch and validate the user behind an access token
    ///
    /// # Errors
    /// Returns error if the request fails, the token is rejected (401/403),
    /// or the payload is missing required fields.
    pub async fn fetch_user(&self, access_token: &str) -> Result<VerifiedUser, HostedAuthError> {
        let response = self
            .http()?
            .get(self.config.user_url())
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(HostedAuthError::TokenRejected);
        }
        if !status.is_success() {
            return Err(HostedAuthError::Api(Self::error_body(response).await));
        }

        let info: UserInfo = response
            .json()
            .await
            .map_err(|e| HostedAuthError::MalformedResponse(e.to_string()))?;

        info.into_verified()
            .map_err(|field| HostedAuthError::MalformedResponse(format!("missing field: {field}")))
    }

    /// Register a new user with the hosted service
    ///
    /// # Errors
    /// Returns error if the request fails or the service rejects the
    /// registration (e.g. email already in use).
    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), HostedAuthError> {
        let body = json!({
            "email": email,
            "password": password,
            "data": { "full_name": name },
        });

        let response = self
            .http()?
            .post(format!("{}/auth/v1/signup", self.config.base_url))
            .header("apikey", &self.config.anon_key)
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(HostedAuthError::Api(Self::error_body(response).await));
        }

        debug!(email = %email, "sign-up accepted by provider");
        Ok(())
    }

    /// Invalidate the session on the provider side
    ///
    /// Callers treat this as best-effort; a failure here never blocks the
    /// local logout.
    ///
    /// # Errors
    /// Returns error if the request fails or the service rejects it.
    pub async fn sign_out(&self, access_token: &str) -> Result<(), HostedAuthError> {
        let response = self
            .http()?
            .post(format!("{}/auth/v1/logout", self.config.base_url))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(HostedAuthError::Api(Self::error_body(response).await));
        }

        Ok(())
    }

    /// Update the metadata blob on the provider-side identity record
    ///
    /// # Errors
    /// Returns error if the request fails or the token is rejected.
    pub async fn update_user_metadata(
        &self,
        access_token: &str,
        metadata: serde_json::Value,
    ) -> Result<(), HostedAuthError> {
        let response = self
            .http()?
            .put(self.config.user_url())
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .json(&json!({ "data": metadata }))
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(HostedAuthError::TokenRejected);
        }
        if !status.is_success() {
            return Err(HostedAuthError::Api(Self::error_body(response).await));
        }

        Ok(())
    }

    /// Get a reference to the client configuration
    #[must_use]
    pub fn config(&self) -> &HostedAuthConfig {
        &self.config
    }

    fn http(&self) -> Result<&Client, HostedAuthError> {
        self.client
            .as_ref()
            .ok_or_else(|| HostedAuthError::ConfigError("HTTP client disabled".to_string()))
    }

    async fn error_body(response: reqwest::Response) -> ProviderApiError {
        response.json().await.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for auth::client.
    use std::sync::Once;

    use super::*;

    fn disable_auth_http() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            std::env::set_var("PAINEL_AUTH_DISABLE_HTTP", "1");
        });
    }

    fn create_test_config() -> HostedAuthConfig {
        disable_auth_http();
        HostedAuthConfig {
            base_url: "https://abc123.painelcloud.dev".to_string(),
            anon_key: "anon_key".to_string(),
            client_id: "test_client_id".to_string(),
            redirect_uri: "http://localhost:3000/auth/callback".to_string(),
            scopes: vec!["email".to_string(), "profile".to_string()],
        }
    }

    /// Validates `HostedAuthClient::authorize_url` behavior for the handshake
    /// URL scenario.
    ///
    /// Assertions:
    /// - Ensures the URL points at the `/auth/v1/authorize` endpoint.
    /// - Ensures `response_type=token` is requested.
    /// - Ensures the generated state is embedded in the URL.
    /// - Ensures the redirect URI is percent-encoded.
    #[test]
    fn test_authorize_url() {
        let client = HostedAuthClient::new(create_test_config());

        let (url, state) = client.authorize_url();

        assert!(url.starts_with("https://abc123.painelcloud.dev/auth/v1/authorize?"));
        assert!(url.contains("response_type=token"));
        assert!(url.contains("client_id=test_client_id"));
        assert!(url.contains("scope=email%20profile"));
        assert!(url.contains(&format!("state={state}")));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fauth%2Fcallback"));
    }

    /// Validates each handshake generates a fresh state value.
    #[test]
    fn test_state_is_random() {
        let client = HostedAuthClient::new(create_test_config());

        let (_, first) = client.authorize_url();
        let (_, second) = client.authorize_url();

        assert_eq!(first.len(), STATE_LENGTH);
        assert_ne!(first, second);
    }

    /// Validates network calls fail cleanly when the HTTP client is disabled.
    ///
    /// Assertions:
    /// - Ensures `fetch_user` surfaces `ConfigError` instead of panicking.
    #[tokio::test]
    async fn test_disabled_http_is_config_error() {
        let client = HostedAuthClient::new(create_test_config());

        let result = client.fetch_user("token").await;
        assert!(matches!(result, Err(HostedAuthError::ConfigError(_))));
    }
}
