//! Port interfaces for the session lifecycle
//!
//! These traits define the boundaries between core business logic and
//! infrastructure implementations.

use async_trait::async_trait;
use painel_domain::{Identity, Organization, OrganizationDraft, Result, Session, UserProfile};

/// Trait for the external identity provider
///
/// The provider performs the actual credential check; this port only covers
/// what the session lifecycle needs from it.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Build the authorization URL that starts the redirect handshake
    ///
    /// The navigation side effect belongs to the caller; this only returns
    /// the target.
    fn begin_login(&self) -> String;

    /// Resolve the identity behind a bearer credential
    ///
    /// Used both when completing a login and for the freshness check after
    /// a snapshot restore.
    ///
    /// # Errors
    /// Returns error if the token is rejected or the provider is unreachable
    async fn resolve_identity(&self, access_token: &str) -> Result<Identity>;

    /// Register a new user with the provider
    ///
    /// # Errors
    /// Returns error if the provider rejects the registration
    async fn sign_up(&self, name: &str, email: &str, password: &str) -> Result<()>;

    /// Invalidate the credential on the provider side (best-effort)
    ///
    /// # Errors
    /// Returns error if the remote call fails; callers must treat local
    /// logout as successful regardless
    async fn logout(&self, access_token: &str) -> Result<()>;

    /// Attach metadata to the provider-side identity record
    ///
    /// # Errors
    /// Returns error if the token is rejected or the call fails
    async fn update_metadata(
        &self,
        access_token: &str,
        metadata: serde_json::Value,
    ) -> Result<()>;
}

/// Trait for user profile persistence and retrieval
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Get a profile by identity id; `None` is the distinguished not-found
    /// condition
    async fn get_by_id(&self, id: &str) -> Result<Option<UserProfile>>;

    /// Insert a new profile row
    ///
    /// # Errors
    /// Returns `PainelError::Conflict` when a row with the same id already
    /// exists
    async fn create(&self, profile: UserProfile) -> Result<UserProfile>;

    /// Update an existing profile row
    async fn update(&self, profile: UserProfile) -> Result<()>;
}

/// Trait for organization persistence
#[async_trait]
pub trait OrganizationRepository: Send + Sync {
    /// Insert a new organization row and return it with the assigned id
    ///
    /// # Errors
    /// Returns `PainelError::Conflict` on a CNPJ unique violation
    async fn insert(&self, draft: OrganizationDraft) -> Result<Organization>;
}

/// Trait for the durable local session snapshot
///
/// A single-key store mirroring the authenticated subset so a restart can
/// restore the session without a full re-authentication round trip.
#[async_trait]
pub trait SessionSnapshotStore: Send + Sync {
    /// Persist the authenticated session
    async fn save(&self, session: &Session) -> Result<()>;

    /// Load the stored session; absence and corruption both yield `None`
    async fn load(&self) -> Result<Option<Session>>;

    /// Remove the stored session
    async fn clear(&self) -> Result<()>;
}
