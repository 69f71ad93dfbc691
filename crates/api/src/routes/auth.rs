//! Authentication routes
//!
//! `/auth/login` starts the redirect handshake, `/auth/callback` completes
//! it, `/auth/logout` tears the session down. The callback accepts the
//! provider's credential parameters and always redirects with the
//! credential stripped from the visible location.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::response::{IntoResponse, Redirect};
use axum::Json;
use tracing::info;

use crate::context::AppContext;

/// GET `/auth/login` - start the provider handshake
///
/// Full navigation away from the application; the provider redirects back
/// to `/auth/callback`.
pub async fn login(State(ctx): State<Arc<AppContext>>) -> impl IntoResponse {
    let url = ctx.session.begin_login();
    info!("redirecting to identity provider");
    Redirect::temporary(&url)
}

/// GET `/auth/callback` - complete the provider handshake
///
/// The credential arrives as request parameters; they are parsed once,
/// handed to the session store, and never persisted. Whatever the outcome,
/// the response is a redirect that removes the credential from the visible
/// location: `/dashboard` when authenticated, `/` otherwise. A callback
/// without a credential (the route is reachable directly) is a no-op.
pub async fn callback(
    State(ctx): State<Arc<AppContext>>,
    RawQuery(query): RawQuery,
) -> impl IntoResponse {
    let state = ctx.session.complete_login(query.as_deref().unwrap_or("")).await;

    if state.is_authenticated() {
        Redirect::to("/dashboard")
    } else {
        Redirect::to("/")
    }
}

/// POST `/auth/logout` - clear the session
///
/// Local clear always succeeds; the provider sign-out is best-effort.
pub async fn logout(State(ctx): State<Arc<AppContext>>) -> impl IntoResponse {
    let state = ctx.session.logout().await;
    Json(state)
}
