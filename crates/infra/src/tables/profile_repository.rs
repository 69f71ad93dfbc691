//! Profile repository over the hosted `profiles` table

use std::sync::Arc;

use async_trait::async_trait;
use painel_core::session::ports::ProfileRepository as ProfileRepositoryPort;
use painel_domain::constants::PROFILES_TABLE;
use painel_domain::{Result as DomainResult, UserProfile};

use super::rest::TableClient;

/// REST-backed implementation of `ProfileRepository`
pub struct RestProfileRepository {
    client: Arc<TableClient>,
}

impl RestProfileRepository {
    /// Create a new repository instance
    pub fn new(client: Arc<TableClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileRepositoryPort for RestProfileRepository {
    async fn get_by_id(&self, id: &str) -> DomainResult<Option<UserProfile>> {
        self.client.select_single(PROFILES_TABLE, "id", id).await
    }

    async fn create(&self, profile: UserProfile) -> DomainResult<UserProfile> {
        self.client.insert(PROFILES_TABLE, &profile).await
    }

    async fn update(&self, profile: UserProfile) -> DomainResult<()> {
        let id = profile.id.clone();
        self.client.update(PROFILES_TABLE, "id", &id, &profile).await
    }
}
