//! Integration tests for the REST table layer
//!
//! Exercise the table client and repositories against a mocked hosted
//! backend, covering the distinguished not-found code, unique-violation
//! conflicts, and boundary validation of duck-typed rows.

use std::sync::Arc;

use painel_core::session::ports::{OrganizationRepository, ProfileRepository};
use painel_domain::{AccountRole, OrganizationDraft, PainelError, UserProfile};
use painel_infra::tables::{
    RestOrganizationRepository, RestProfileRepository, TableClient, TableClientConfig,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> Arc<TableClient> {
    let config = TableClientConfig::new(server.uri(), "anon-key".to_string());
    Arc::new(TableClient::new(config).expect("table client"))
}

fn profile_row() -> serde_json::Value {
    json!({
        "id": "prov|123",
        "name": "Ana Souza",
        "email": "ana@example.com",
        "avatar_url": "https://example.com/ana.jpg",
        "tipo": "usuario",
        "empresa_completa": false,
        "created_at": 1_700_000_000_i64,
        "updated_at": 1_700_000_000_i64,
    })
}

fn draft() -> OrganizationDraft {
    OrganizationDraft {
        nome_fantasia: "Minha Empresa".to_string(),
        razao_social: "Minha Empresa LTDA".to_string(),
        email: "contato@empresa.com".to_string(),
        telefone: "(11) 99999-9999".to_string(),
        cnpj: "12345678000195".to_string(),
        cep: "01000-000".to_string(),
        endereco: "Rua das Flores".to_string(),
        numero: "123".to_string(),
        complemento: String::new(),
        bairro: "Centro".to_string(),
        cidade: "São Paulo".to_string(),
        estado: "SP".to_string(),
        usuario_id: "prov|123".to_string(),
        tipo: "gestor".to_string(),
    }
}

#[tokio::test]
async fn test_get_profile_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("id", "eq.prov|123"))
        .and(header("apikey", "anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_row()))
        .mount(&server)
        .await;

    let repo = RestProfileRepository::new(client_for(&server));
    let profile = repo.get_by_id("prov|123").await.expect("lookup").expect("row");

    assert_eq!(profile.id, "prov|123");
    assert_eq!(profile.role, AccountRole::Standard);
    assert!(!profile.onboarding_complete);
}

#[tokio::test]
async fn test_no_rows_code_is_not_found_condition() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(406).set_body_json(json!({
            "code": "PGRST116",
            "message": "JSON object requested, multiple (or no) rows returned",
        })))
        .mount(&server)
        .await;

    let repo = RestProfileRepository::new(client_for(&server));
    let profile = repo.get_by_id("prov|missing").await.expect("lookup");

    assert!(profile.is_none(), "PGRST116 is absence, not an error");
}

#[tokio::test]
async fn test_other_errors_are_surfaced() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": "XX000",
            "message": "internal error",
        })))
        .mount(&server)
        .await;

    let repo = RestProfileRepository::new(client_for(&server));
    let result = repo.get_by_id("prov|123").await;

    assert!(matches!(result, Err(PainelError::Storage(_))));
}

#[tokio::test]
async fn test_malformed_row_is_rejected() {
    let server = MockServer::start().await;

    // Row without the required id column
    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "Ana Souza",
        })))
        .mount(&server)
        .await;

    let repo = RestProfileRepository::new(client_for(&server));
    let result = repo.get_by_id("prov|123").await;

    assert!(matches!(result, Err(PainelError::Storage(_))), "shape is validated, not trusted");
}

#[tokio::test]
async fn test_create_profile_posts_row() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/profiles"))
        .and(header("Prefer", "return=representation"))
        .and(body_partial_json(json!({ "id": "prov|123", "tipo": "usuario" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(profile_row()))
        .mount(&server)
        .await;

    let repo = RestProfileRepository::new(client_for(&server));
    let profile: UserProfile = serde_json::from_value(profile_row()).expect("fixture");
    let created = repo.create(profile).await.expect("create");

    assert_eq!(created.id, "prov|123");
}

#[tokio::test]
async fn test_duplicate_cnpj_maps_to_conflict() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/empresas"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint \"empresas_cnpj_key\"",
        })))
        .mount(&server)
        .await;

    let repo = RestOrganizationRepository::new(client_for(&server));
    let result = repo.insert(draft()).await;

    assert!(matches!(result, Err(PainelError::Conflict(_))));
}

#[tokio::test]
async fn test_insert_organization_returns_assigned_id() {
    let server = MockServer::start().await;

    let mut stored = serde_json::to_value(draft()).expect("draft json");
    stored["id"] = json!("org-77");

    Mock::given(method("POST"))
        .and(path("/rest/v1/empresas"))
        .and(body_partial_json(json!({ "cnpj": "12345678000195", "tipo": "gestor" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(stored))
        .mount(&server)
        .await;

    let repo = RestOrganizationRepository::new(client_for(&server));
    let organization = repo.insert(draft()).await.expect("insert");

    assert_eq!(organization.id, "org-77");
    assert_eq!(organization.cnpj, "12345678000195");
}

#[tokio::test]
async fn test_update_profile_patches_by_id() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("id", "eq.prov|123"))
        .and(body_partial_json(json!({ "tipo": "gestor", "empresa_completa": true })))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let repo = RestProfileRepository::new(client_for(&server));
    let mut profile: UserProfile = serde_json::from_value(profile_row()).expect("fixture");
    profile.role = AccountRole::Manager;
    profile.onboarding_complete = true;

    repo.update(profile).await.expect("update");
}
