//! Mock repository implementations for testing
//!
//! Provides in-memory mocks for the profile, organization, and snapshot
//! ports, enabling deterministic tests without any backend.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use painel_core::session::ports::{
    OrganizationRepository, ProfileRepository, SessionSnapshotStore,
};
use painel_domain::{
    Organization, OrganizationDraft, PainelError, Result as DomainResult, Session, UserProfile,
};

/// In-memory mock for `ProfileRepository`.
///
/// Tracks creation calls so tests can assert exactly-once semantics, and can
/// simulate lookup failures and creation races.
#[derive(Default, Clone)]
pub struct MockProfileRepository {
    rows: Arc<Mutex<HashMap<String, UserProfile>>>,
    create_calls: Arc<AtomicUsize>,
    fail_lookups: Arc<AtomicBool>,
    conflict_on_create: Arc<AtomicBool>,
}

impl MockProfileRepository {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience helper seeding the mock with one profile row.
    pub fn with_profile(self, profile: UserProfile) -> Self {
        self.rows.lock().unwrap().insert(profile.id.clone(), profile);
        self
    }

    /// Make every lookup fail with a storage error.
    pub fn fail_lookups(&self) {
        self.fail_lookups.store(true, Ordering::SeqCst);
    }

    /// Simulate losing the creation race: `create` inserts the row (as the
    /// concurrent winner would have) but reports a conflict.
    pub fn conflict_on_create(&self) {
        self.conflict_on_create.store(true, Ordering::SeqCst);
    }

    /// Number of `create` calls observed.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Current row for an id, if any.
    pub fn row(&self, id: &str) -> Option<UserProfile> {
        self.rows.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl ProfileRepository for MockProfileRepository {
    async fn get_by_id(&self, id: &str) -> DomainResult<Option<UserProfile>> {
        if self.fail_lookups.load(Ordering::SeqCst) {
            return Err(PainelError::Storage("profiles table unavailable".to_string()));
        }
        Ok(self.rows.lock().unwrap().get(id).cloned())
    }

    async fn create(&self, profile: UserProfile) -> DomainResult<UserProfile> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        let mut rows = self.rows.lock().unwrap();
        if rows.contains_key(&profile.id) {
            return Err(PainelError::Conflict("duplicate key".to_string()));
        }

        rows.insert(profile.id.clone(), profile.clone());
        if self.conflict_on_create.load(Ordering::SeqCst) {
            return Err(PainelError::Conflict("duplicate key".to_string()));
        }
        Ok(profile)
    }

    async fn update(&self, profile: UserProfile) -> DomainResult<()> {
        let mut rows = self.rows.lock().unwrap();
        if !rows.contains_key(&profile.id) {
            return Err(PainelError::NotFound(format!("profile {}", profile.id)));
        }
        rows.insert(profile.id.clone(), profile);
        Ok(())
    }
}

/// In-memory mock for `OrganizationRepository`.
///
/// Enforces the CNPJ uniqueness constraint and counts inserts so tests can
/// prove validation short-circuits before any write.
#[derive(Default, Clone)]
pub struct MockOrganizationRepository {
    rows: Arc<Mutex<Vec<Organization>>>,
    insert_calls: Arc<AtomicUsize>,
}

impl MockOrganizationRepository {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience helper seeding an existing organization with a CNPJ.
    pub fn with_cnpj(self, cnpj: &str) -> Self {
        let organization = Organization {
            id: "org-seed".to_string(),
            nome_fantasia: "Empresa Existente".to_string(),
            razao_social: "Empresa Existente LTDA".to_string(),
            email: "existente@example.com".to_string(),
            telefone: String::new(),
            cnpj: cnpj.to_string(),
            cep: String::new(),
            endereco: String::new(),
            numero: String::new(),
            complemento: String::new(),
            bairro: String::new(),
            cidade: String::new(),
            estado: String::new(),
            usuario_id: "prov|other".to_string(),
            tipo: "gestor".to_string(),
        };
        self.rows.lock().unwrap().push(organization);
        self
    }

    /// Number of `insert` calls observed.
    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }

    /// All stored rows.
    pub fn rows(&self) -> Vec<Organization> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrganizationRepository for MockOrganizationRepository {
    async fn insert(&self, draft: OrganizationDraft) -> DomainResult<Organization> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|row| row.cnpj == draft.cnpj) {
            return Err(PainelError::Conflict("unique violation on cnpj".to_string()));
        }

        let organization = Organization {
            id: format!("org-{}", rows.len() + 1),
            nome_fantasia: draft.nome_fantasia,
            razao_social: draft.razao_social,
            email: draft.email,
            telefone: draft.telefone,
            cnpj: draft.cnpj,
            cep: draft.cep,
            endereco: draft.endereco,
            numero: draft.numero,
            complemento: draft.complemento,
            bairro: draft.bairro,
            cidade: draft.cidade,
            estado: draft.estado,
            usuario_id: draft.usuario_id,
            tipo: draft.tipo,
        };
        rows.push(organization.clone());
        Ok(organization)
    }
}

/// In-memory mock for `SessionSnapshotStore`.
#[derive(Default, Clone)]
pub struct MockSnapshotStore {
    slot: Arc<Mutex<Option<Session>>>,
    fail_loads: Arc<AtomicBool>,
}

impl MockSnapshotStore {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience helper seeding a stored session.
    pub fn with_session(self, session: Session) -> Self {
        *self.slot.lock().unwrap() = Some(session);
        self
    }

    /// Make every load fail with a storage error.
    pub fn fail_loads(&self) {
        self.fail_loads.store(true, Ordering::SeqCst);
    }

    /// Current stored session, if any.
    pub fn stored(&self) -> Option<Session> {
        self.slot.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionSnapshotStore for MockSnapshotStore {
    async fn save(&self, session: &Session) -> DomainResult<()> {
        *self.slot.lock().unwrap() = Some(session.clone());
        Ok(())
    }

    async fn load(&self) -> DomainResult<Option<Session>> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(PainelError::Storage("snapshot unreadable".to_string()));
        }
        Ok(self.slot.lock().unwrap().clone())
    }

    async fn clear(&self) -> DomainResult<()> {
        *self.slot.lock().unwrap() = None;
        Ok(())
    }
}
