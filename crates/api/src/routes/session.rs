//! Session API and shell preferences
//!
//! Read-only session state, the change-notification feed (SSE), and the
//! theme preference endpoints consumed by the shell.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::IntoResponse;
use axum::Json;
use futures::stream::Stream;
use painel_domain::ThemeMode;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::broadcast::error::RecvError;

use crate::context::AppContext;
use crate::routes::ApiError;

/// GET `/api/session` - current session state
pub async fn current(State(ctx): State<Arc<AppContext>>) -> impl IntoResponse {
    Json(ctx.session.state().await)
}

/// GET `/api/session/events` - change-notification feed
///
/// Server-sent events delivering `(event, session)` pairs as they happen.
/// Slow consumers that lag behind the channel simply skip to the latest
/// notifications.
pub async fn events(
    State(ctx): State<Arc<AppContext>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let receiver = ctx.session.subscribe();

    let stream = futures::stream::unfold(receiver, |mut receiver| async move {
        loop {
            match receiver.recv().await {
                Ok((event, state)) => {
                    let payload = json!({ "event": event, "session": state });
                    let sse_event = match Event::default().json_data(&payload) {
                        Ok(sse_event) => sse_event,
                        Err(_) => continue,
                    };
                    return Some((Ok::<_, Infallible>(sse_event), receiver));
                }
                Err(RecvError::Lagged(_)) => continue,
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}

/// GET `/api/theme` - current theme preference
pub async fn theme(State(ctx): State<Arc<AppContext>>) -> impl IntoResponse {
    let theme = ctx.preferences.theme().await;
    Json(json!({ "theme": theme }))
}

/// Body for `PUT /api/theme`
#[derive(Debug, Deserialize)]
pub struct SetThemeBody {
    pub theme: ThemeMode,
}

/// PUT `/api/theme` - persist a theme preference
pub async fn set_theme(
    State(ctx): State<Arc<AppContext>>,
    Json(body): Json<SetThemeBody>,
) -> Result<impl IntoResponse, ApiError> {
    ctx.preferences.set_theme(body.theme).await?;
    Ok(Json(json!({ "theme": body.theme })))
}
