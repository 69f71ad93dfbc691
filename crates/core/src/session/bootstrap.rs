//! Profile bootstrapper
//!
//! Given a freshly resolved identity, guarantees a durable profile exists:
//! first login creates one with defaults, later logins reuse the stored row.

use std::sync::Arc;

use painel_domain::{Identity, PainelError, Result, UserProfile};
use tracing::{info, warn};

use super::ports::ProfileRepository;

/// Resolves (and lazily creates) the durable profile for an identity
pub struct ProfileBootstrapper {
    profiles: Arc<dyn ProfileRepository>,
}

impl ProfileBootstrapper {
    /// Create a new bootstrapper over the given repository
    #[must_use]
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }

    /// Resolve the profile for an identity, creating it on first login
    ///
    /// A creation conflict means another login already inserted the row (the
    /// storage layer's uniqueness constraint on the identity id is the
    /// backstop), so the row is re-fetched instead of failing.
    ///
    /// # Errors
    /// Any failure other than the distinguished not-found condition is
    /// surfaced as `PainelError::Profile`.
    pub async fn resolve(&self, identity: &Identity) -> Result<UserProfile> {
        match self.lookup(&identity.id).await? {
            Some(profile) => Ok(profile),
            None => self.create(identity).await,
        }
    }

    async fn lookup(&self, id: &str) -> Result<Option<UserProfile>> {
        self.profiles
            .get_by_id(id)
            .await
            .map_err(|err| PainelError::Profile(format!("profile lookup failed: {err}")))
    }

    async fn create(&self, identity: &Identity) -> Result<UserProfile> {
        let fresh = UserProfile::new_for_identity(identity);

        match self.profiles.create(fresh).await {
            Ok(profile) => {
                info!(profile_id = %profile.id, "created profile on first login");
                Ok(profile)
            }
            Err(PainelError::Conflict(detail)) => {
                // Lost the race against a concurrent first login; the row
                // exists now, so re-fetch it.
                warn!(identity_id = %identity.id, detail = %detail, "profile creation conflict, re-fetching");
                self.lookup(&identity.id).await?.ok_or_else(|| {
                    PainelError::Profile("profile vanished after creation conflict".to_string())
                })
            }
            Err(err) => Err(PainelError::Profile(format!("profile creation failed: {err}"))),
        }
    }
}
