//! Session types
//!
//! A session is the runtime union of a provider identity and the durable
//! profile. `Authenticated` holds both or it is not entered at all; the only
//! partial state is the transient `Loading`.

use serde::{Deserialize, Serialize};

use super::user::{Identity, UserProfile};

/// Authenticated session payload: identity plus resolved profile
///
/// Also the serialized shape of the durable local snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub identity: Identity,
    pub profile: UserProfile,
}

/// Session lifecycle state
///
/// `Loading` covers the provider handshake and the profile fetch; it is the
/// only state in which identity-without-profile exists, and it is never
/// observable through the store's read surface as a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Loading,
    Authenticated(Session),
}

impl SessionState {
    /// Whether a full identity + profile session is present
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Whether a transition is currently in flight
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The session payload, when authenticated
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

/// Change-notification event delivered with the resulting state
///
/// Mirrors the hosted backend's auth event names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
    Restored,
}
