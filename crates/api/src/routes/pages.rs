//! Landing page, dashboard views, and the not-found fallback
//!
//! The dashboards are pure consumers of session state rendering static mock
//! metrics; nothing here mutates the store.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::context::AppContext;

/// GET `/` - landing page payload
pub async fn landing(State(ctx): State<Arc<AppContext>>) -> impl IntoResponse {
    let authenticated = ctx.session.state().await.is_authenticated();

    Json(json!({
        "title": "Dashboard Pro",
        "subtitle": "A plataforma completa para gerenciar seus projetos, equipes e métricas",
        "authenticated": authenticated,
        "links": {
            "dashboard": "/dashboard",
            "register": "/register",
            "login": "/auth/login",
        },
    }))
}

/// GET `/dashboard` - main metrics view
pub async fn dashboard_main() -> impl IntoResponse {
    Json(json!({
        "title": "Dashboard Principal",
        "cards": [
            { "title": "Total Usuários", "value": "1,245" },
            { "title": "Receita Mensal", "value": "R$ 54,200" },
            { "title": "Taxa de Conversão", "value": "23.8%" },
            { "title": "Novos Leads", "value": "48" },
        ],
    }))
}

/// GET `/projects` - projects view
pub async fn dashboard_projects() -> impl IntoResponse {
    Json(json!({
        "title": "Dashboard de Projetos",
        "cards": [
            { "title": "Projetos Ativos", "value": "12" },
            { "title": "Projetos Concluídos", "value": "8" },
            { "title": "Projetos Atrasados", "value": "3" },
            { "title": "Novos Esta Semana", "value": "2" },
        ],
    }))
}

/// GET `/chat` - conversations view
pub async fn dashboard_chat() -> impl IntoResponse {
    Json(json!({
        "title": "Dashboard de Conversas",
        "cards": [
            { "title": "Conversas Ativas", "value": "34" },
            { "title": "Mensagens Hoje", "value": "186" },
            { "title": "Novas Conversas", "value": "9" },
            { "title": "Taxa de Resposta", "value": "92%" },
        ],
    }))
}

/// GET `/admin` - administrative view
pub async fn dashboard_admin() -> impl IntoResponse {
    Json(json!({
        "title": "Dashboard Administrativo",
        "cards": [
            { "title": "Total de Usuários", "value": "1,245" },
            { "title": "Usuários Ativos", "value": "892" },
            { "title": "Administradores", "value": "5" },
            { "title": "Uso de Armazenamento", "value": "68%" },
            { "title": "Tempo de Atividade", "value": "99.9%" },
        ],
    }))
}

/// Catch-all not-found view
pub async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Página não encontrada",
            "detail": "A página que você está procurando não existe.",
        })),
    )
}
