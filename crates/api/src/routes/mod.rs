//! Route table and shared response plumbing

pub mod auth;
pub mod onboarding;
pub mod pages;
pub mod session;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use painel_domain::PainelError;
use serde_json::json;

use crate::context::AppContext;
use crate::utils::logging::request_context;

/// Build the application router
///
/// The route set mirrors the shell's navigation: the landing page, the auth
/// trio, registration, onboarding, the four dashboard views, the session
/// API, and a catch-all not-found view.
pub fn router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route("/", get(pages::landing))
        .route("/auth/login", get(auth::login))
        .route("/auth/callback", get(auth::callback))
        .route("/auth/logout", post(auth::logout))
        .route("/register", post(onboarding::register))
        .route("/complete-registration", post(onboarding::complete_registration))
        .route("/dashboard", get(pages::dashboard_main))
        .route("/projects", get(pages::dashboard_projects))
        .route("/chat", get(pages::dashboard_chat))
        .route("/admin", get(pages::dashboard_admin))
        .route("/api/session", get(session::current))
        .route("/api/session/events", get(session::events))
        .route("/api/theme", get(session::theme).put(session::set_theme))
        .fallback(pages::not_found)
        .layer(middleware::from_fn(request_context))
        .with_state(ctx)
}

/// Error wrapper mapping domain errors onto HTTP responses
///
/// Form-level errors keep their user-facing message; everything else is
/// collapsed to a status with the error text.
pub struct ApiError(pub PainelError);

impl From<PainelError> for ApiError {
    fn from(err: PainelError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(
            error_type = crate::utils::logging::error_label(&self.0),
            error = %self.0,
            "request error"
        );

        let status = match &self.0 {
            PainelError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PainelError::Conflict(_) => StatusCode::CONFLICT,
            PainelError::NotFound(_) => StatusCode::NOT_FOUND,
            PainelError::Provider(_) | PainelError::Network(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let message = match &self.0 {
            PainelError::Validation(msg)
            | PainelError::Conflict(msg)
            | PainelError::Provider(msg) => msg.clone(),
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
