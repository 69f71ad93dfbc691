//! Traits for hosted auth operations
//!
//! These traits enable dependency injection and testing by abstracting the
//! hosted auth service behind an object-safe interface.

use async_trait::async_trait;

use super::client::{HostedAuthClient, HostedAuthError};
use super::types::VerifiedUser;

/// Trait for hosted auth client operations
///
/// Implemented by [`HostedAuthClient`]; mock implementations stand in for
/// the hosted service in tests.
#[async_trait]
pub trait HostedAuthApi: Send + Sync {
    /// Build the authorization URL for a browser-based login
    ///
    /// # Returns
    /// Tuple of (authorization_url, state)
    fn authorize_url(&self) -> (String, String);

    /// Fetch and validate the user behind an access token
    ///
    /// # Errors
    /// Returns error if the request fails, the token is rejected, or the
    /// payload is missing required fields
    async fn fetch_user(&self, access_token: &str) -> Result<VerifiedUser, HostedAuthError>;

    /// Register a new user with the hosted service
    ///
    /// # Errors
    /// Returns error if the request fails or the registration is rejected
    async fn sign_up(&self, name: &str, email: &str, password: &str)
        -> Result<(), HostedAuthError>;

    /// Invalidate the session on the provider side (best-effort)
    ///
    /// # Errors
    /// Returns error if the request fails or the service rejects it
    async fn sign_out(&self, access_token: &str) -> Result<(), HostedAuthError>;

    /// Update the metadata blob on the provider-side identity record
    ///
    /// # Errors
    /// Returns error if the request fails or the token is rejected
    async fn update_user_metadata(
        &self,
        access_token: &str,
        metadata: serde_json::Value,
    ) -> Result<(), HostedAuthError>;
}

#[async_trait]
impl HostedAuthApi for HostedAuthClient {
    fn authorize_url(&self) -> (String, String) {
        self.authorize_url()
    }

    async fn fetch_user(&self, access_token: &str) -> Result<VerifiedUser, HostedAuthError> {
        self.fetch_user(access_token).await
    }

    async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(), HostedAuthError> {
        self.sign_up(name, email, password).await
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), HostedAuthError> {
        self.sign_out(access_token).await
    }

    async fn update_user_metadata(
        &self,
        access_token: &str,
        metadata: serde_json::Value,
    ) -> Result<(), HostedAuthError> {
        self.update_user_metadata(access_token, metadata).await
    }
}
