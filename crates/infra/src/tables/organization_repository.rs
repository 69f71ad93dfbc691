//! Organization repository over the hosted `empresas` table

use std::sync::Arc;

use async_trait::async_trait;
use painel_core::session::ports::OrganizationRepository as OrganizationRepositoryPort;
use painel_domain::constants::ORGANIZATIONS_TABLE;
use painel_domain::{Organization, OrganizationDraft, Result as DomainResult};

use super::rest::TableClient;

/// REST-backed implementation of `OrganizationRepository`
pub struct RestOrganizationRepository {
    client: Arc<TableClient>,
}

impl RestOrganizationRepository {
    /// Create a new repository instance
    pub fn new(client: Arc<TableClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrganizationRepositoryPort for RestOrganizationRepository {
    async fn insert(&self, draft: OrganizationDraft) -> DomainResult<Organization> {
        // The unique constraint on cnpj surfaces as a 23505 conflict from the
        // table layer
        self.client.insert(ORGANIZATIONS_TABLE, &draft).await
    }
}
