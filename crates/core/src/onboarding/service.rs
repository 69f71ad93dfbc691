//! Onboarding submit sequence
//!
//! Three durable writes, attempted in order: organization insert, profile
//! promotion, provider metadata update. There is no compensating rollback —
//! a failure partway leaves the earlier writes in place, matching the
//! behavior of the system of record.

use std::sync::Arc;

use chrono::Utc;
use painel_domain::{AccountRole, Organization, PainelError, Result, Session, UserProfile};
use serde_json::json;
use tracing::{info, warn};

use crate::session::ports::{IdentityProvider, OrganizationRepository, ProfileRepository};

use super::form::OnboardingForm;

/// Completes a user's registration as an organization manager
pub struct OnboardingService {
    organizations: Arc<dyn OrganizationRepository>,
    profiles: Arc<dyn ProfileRepository>,
    provider: Arc<dyn IdentityProvider>,
}

impl OnboardingService {
    /// Create a new service wired to the given ports
    #[must_use]
    pub fn new(
        organizations: Arc<dyn OrganizationRepository>,
        profiles: Arc<dyn ProfileRepository>,
        provider: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self { organizations, profiles, provider }
    }

    /// Submit the onboarding form for the authenticated session
    ///
    /// Validates first (no network call on a validation failure), then:
    /// 1. inserts the organization row (CNPJ stored digits-only);
    /// 2. promotes the profile to manager and marks onboarding complete;
    /// 3. attaches the organization reference to the provider identity.
    ///
    /// Returns the inserted organization and the promoted profile.
    ///
    /// # Errors
    /// - `PainelError::Validation` before any write
    /// - `PainelError::Conflict` when the CNPJ is already registered; the
    ///   caller's session is not affected
    /// - any step's underlying error, with prior successful writes left in
    ///   place (no rollback)
    pub async fn submit(
        &self,
        session: &Session,
        form: OnboardingForm,
    ) -> Result<(Organization, UserProfile)> {
        form.validate()?;

        let nome_fantasia = form.nome_fantasia.clone();
        let cnpj_formatted = form.cnpj.clone();
        let draft = form.into_draft(&session.identity.id);

        let organization = match self.organizations.insert(draft).await {
            Ok(organization) => organization,
            Err(PainelError::Conflict(_)) => {
                return Err(PainelError::Conflict("CNPJ já cadastrado no sistema".to_string()));
            }
            Err(err) => return Err(err),
        };
        info!(organization_id = %organization.id, "organization created");

        let profile = self.promote_profile(session, &nome_fantasia).await?;

        self.provider
            .update_metadata(
                &session.identity.access_token,
                json!({
                    "empresa_id": organization.id,
                    "empresa_nome": nome_fantasia,
                    "empresa_cnpj": cnpj_formatted,
                }),
            )
            .await
            .map_err(|err| {
                // Organization and profile writes stand; only the provider
                // metadata is missing.
                warn!(error = %err, "provider metadata update failed after durable writes");
                err
            })?;

        info!(profile_id = %profile.id, "onboarding completed, role promoted to gestor");
        Ok((organization, profile))
    }

    async fn promote_profile(&self, session: &Session, nome_fantasia: &str) -> Result<UserProfile> {
        let mut profile = session.profile.clone();
        profile.role = AccountRole::Manager;
        profile.onboarding_complete = true;
        profile.name = nome_fantasia.to_string();
        profile.updated_at = Utc::now().timestamp();

        self.profiles.update(profile.clone()).await?;
        Ok(profile)
    }
}
