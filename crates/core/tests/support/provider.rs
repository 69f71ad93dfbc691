//! Stub identity provider for testing
//!
//! Resolves a fixed identity for any token, with switches to reject tokens
//! or fail metadata updates, and counters for logout/resolve calls. An
//! optional gate lets coalescing tests hold a resolution in flight.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use painel_core::session::ports::IdentityProvider;
use painel_domain::{Identity, PainelError, Result as DomainResult};
use tokio::sync::Notify;

/// Configurable stub for the `IdentityProvider` port.
#[derive(Default)]
pub struct StubIdentityProvider {
    reject_tokens: AtomicBool,
    fail_metadata: AtomicBool,
    resolve_calls: AtomicUsize,
    logout_calls: AtomicUsize,
    metadata: Mutex<Option<serde_json::Value>>,
    sign_ups: Mutex<Vec<String>>,
    gate: Option<Arc<Notify>>,
}

impl StubIdentityProvider {
    /// Create a stub that resolves every token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stub whose `resolve_identity` blocks until the returned
    /// notify is triggered. Used to observe coalescing deterministically.
    pub fn gated() -> (Self, Arc<Notify>) {
        let gate = Arc::new(Notify::new());
        let stub = Self { gate: Some(Arc::clone(&gate)), ..Self::default() };
        (stub, gate)
    }

    /// Reject every token from now on.
    pub fn reject_tokens(&self) {
        self.reject_tokens.store(true, Ordering::SeqCst);
    }

    /// Fail every metadata update from now on.
    pub fn fail_metadata(&self) {
        self.fail_metadata.store(true, Ordering::SeqCst);
    }

    /// Number of `resolve_identity` calls observed.
    pub fn resolve_calls(&self) -> usize {
        self.resolve_calls.load(Ordering::SeqCst)
    }

    /// Number of `logout` calls observed.
    pub fn logout_calls(&self) -> usize {
        self.logout_calls.load(Ordering::SeqCst)
    }

    /// Last metadata blob received, if any.
    pub fn metadata(&self) -> Option<serde_json::Value> {
        self.metadata.lock().unwrap().clone()
    }

    /// Emails passed to `sign_up`.
    pub fn sign_ups(&self) -> Vec<String> {
        self.sign_ups.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityProvider for StubIdentityProvider {
    fn begin_login(&self) -> String {
        "https://stub.painelcloud.dev/auth/v1/authorize?response_type=token&state=stub".to_string()
    }

    async fn resolve_identity(&self, access_token: &str) -> DomainResult<Identity> {
        self.resolve_calls.fetch_add(1, Ordering::SeqCst);

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        if self.reject_tokens.load(Ordering::SeqCst) {
            return Err(PainelError::Provider("Access token rejected by provider".to_string()));
        }

        Ok(Identity {
            id: "prov|123".to_string(),
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            avatar_url: Some("https://example.com/ana.jpg".to_string()),
            access_token: access_token.to_string(),
        })
    }

    async fn sign_up(&self, _name: &str, email: &str, _password: &str) -> DomainResult<()> {
        self.sign_ups.lock().unwrap().push(email.to_string());
        Ok(())
    }

    async fn logout(&self, _access_token: &str) -> DomainResult<()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn update_metadata(
        &self,
        _access_token: &str,
        metadata: serde_json::Value,
    ) -> DomainResult<()> {
        if self.fail_metadata.load(Ordering::SeqCst) {
            return Err(PainelError::Provider("metadata update rejected".to_string()));
        }
        *self.metadata.lock().unwrap() = Some(metadata);
        Ok(())
    }
}
