//! Shared test support for the HTTP surface
//!
//! Boots an application context against a mocked hosted backend and a
//! temporary data directory, and provides small request helpers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, Response};
use axum::Router;
use painel_domain::{Config, ProviderConfig, ServerConfig, StorageConfig};
use painel_lib::{router, AppContext};
use serde_json::json;
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub struct TestApp {
    pub server: MockServer,
    pub ctx: Arc<AppContext>,
    pub router: Router,
    // Keep the data dir alive for the test's duration
    pub _data_dir: TempDir,
}

/// Boot a fresh application against a mocked hosted backend.
pub async fn spawn_app() -> TestApp {
    let server = MockServer::start().await;
    let data_dir = TempDir::new().expect("temp dir");
    let config = config_for(&server, &data_dir);

    let ctx = Arc::new(AppContext::new(config).expect("app context"));
    let router = router(Arc::clone(&ctx));

    TestApp { server, ctx, router, _data_dir: data_dir }
}

/// Config pointing at the mock server and a temp data dir.
pub fn config_for(server: &MockServer, data_dir: &TempDir) -> Config {
    Config {
        provider: ProviderConfig {
            base_url: server.uri(),
            anon_key: "anon-key".to_string(),
            client_id: "client-123".to_string(),
            redirect_uri: "http://localhost:3000/auth/callback".to_string(),
            scopes: vec!["email".to_string(), "profile".to_string()],
        },
        storage: StorageConfig { data_dir: data_dir.path().to_string_lossy().into_owned() },
        server: ServerConfig::default(),
    }
}

/// Mount the mocks for a successful first login (user info, profile
/// not-found, profile create).
pub async fn mount_first_login(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/auth/v1/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "prov|123",
            "email": "ana@example.com",
            "user_metadata": { "full_name": "Ana Souza" },
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(406).set_body_json(json!({
            "code": "PGRST116",
            "message": "JSON object requested, multiple (or no) rows returned",
        })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "prov|123",
            "name": "Ana Souza",
            "email": "ana@example.com",
            "tipo": "usuario",
            "empresa_completa": false,
            "created_at": 1_700_000_000_i64,
            "updated_at": 1_700_000_000_i64,
        })))
        .mount(server)
        .await;
}

/// Drive the full login flow, leaving the app authenticated.
pub async fn login(app: &TestApp) {
    mount_first_login(&app.server).await;
    let response = get(&app.router, "/auth/callback?access_token=tok123&token_type=bearer").await;
    assert!(response.status().is_redirection(), "login should redirect");
    assert!(app.ctx.session.state().await.is_authenticated(), "login should authenticate");
}

/// GET helper.
pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
        .await
        .expect("response")
}

/// POST-with-JSON helper.
pub async fn post_json(router: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response")
}

/// PUT-with-JSON helper.
pub async fn put_json(router: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    router
        .clone()
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response")
}

/// Read a response body as JSON.
pub async fn read_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}
