//! Shared test support utilities
//!
//! In-memory doubles for the session and onboarding ports, plus fixture
//! builders. No network, no filesystem.

pub mod provider;
pub mod repositories;

use painel_domain::{AccountRole, Identity, Session, UserProfile};

/// Fixture identity for lifecycle tests
pub fn identity(token: &str) -> Identity {
    Identity {
        id: "prov|123".to_string(),
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        avatar_url: Some("https://example.com/ana.jpg".to_string()),
        access_token: token.to_string(),
    }
}

/// Fixture profile matching [`identity`]
pub fn profile() -> UserProfile {
    UserProfile {
        id: "prov|123".to_string(),
        name: "Ana Souza".to_string(),
        email: "ana@example.com".to_string(),
        avatar_url: Some("https://example.com/ana.jpg".to_string()),
        role: AccountRole::Standard,
        onboarding_complete: false,
        created_at: 1_700_000_000,
        updated_at: 1_700_000_000,
    }
}

/// Fixture authenticated session
pub fn session(token: &str) -> Session {
    Session { identity: identity(token), profile: profile() }
}
