//! Registration and onboarding routes
//!
//! `/register` creates a provider account from the sign-up form;
//! `/complete-registration` runs the onboarding write sequence for the
//! authenticated user. Form-level errors are rendered as messages and never
//! touch the session store.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use painel_core::OnboardingForm;
use painel_domain::PainelError;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::context::AppContext;
use crate::routes::ApiError;

/// Body for `POST /register`
#[derive(Debug, Deserialize)]
pub struct RegisterBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// POST `/register` - create a provider account
///
/// Client-side constraints are checked before the provider call: every
/// field is required and the password needs at least 6 characters.
pub async fn register(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<RegisterBody>,
) -> Result<impl IntoResponse, ApiError> {
    if body.name.is_empty() || body.email.is_empty() || body.password.is_empty() {
        return Err(PainelError::Validation(
            "Por favor, preencha todos os campos".to_string(),
        )
        .into());
    }
    if body.password.len() < 6 {
        return Err(PainelError::Validation(
            "A senha deve ter pelo menos 6 caracteres".to_string(),
        )
        .into());
    }

    ctx.provider
        .sign_up(&body.name, &body.email, &body.password)
        .await
        .map_err(|_| PainelError::Provider("Erro ao registrar usuário. Tente novamente.".to_string()))?;

    info!(email = %body.email, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Registro realizado com sucesso!" })),
    ))
}

/// POST `/complete-registration` - run the onboarding sequence
///
/// Requires an authenticated session. On success the session store picks up
/// the promoted profile; on a conflict or a partial failure the session is
/// left exactly as it was.
pub async fn complete_registration(
    State(ctx): State<Arc<AppContext>>,
    Json(form): Json<OnboardingForm>,
) -> Result<impl IntoResponse, ApiError> {
    let Some(session) = ctx.session.state().await.session().cloned() else {
        return Ok((
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": "Usuário não autenticado" })),
        )
            .into_response());
    };

    let (organization, profile) = ctx.onboarding.submit(&session, form).await?;

    // Reflect the promotion in the live session
    ctx.session.update_profile(profile.clone()).await;

    info!(organization_id = %organization.id, "onboarding completed");
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Cadastro realizado com sucesso!",
            "organization": organization,
            "profile": profile,
            "redirect": "/dashboard",
        })),
    )
        .into_response())
}
