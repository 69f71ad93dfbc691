//! Session manager
//!
//! Owns the single source of truth for "who is logged in" and orchestrates
//! the serialized flow around it: provider call → profile resolve →
//! persistence write. Provider and profile failures are caught here, logged,
//! and collapsed to `Unauthenticated`; no partial session is ever exposed.

use std::sync::Arc;

use painel_common::auth::fragment;
use painel_domain::{Session, SessionEvent, SessionState, UserProfile};
use tokio::sync::{broadcast, RwLock};
use tracing::{info, warn};

use super::bootstrap::ProfileBootstrapper;
use super::ports::{IdentityProvider, ProfileRepository, SessionSnapshotStore};
use super::state::{transition, StateInput};

/// Capacity of the change-notification channel
const EVENT_CHANNEL_CAPACITY: usize = 16;

/// The session store singleton consumed by every view surface
///
/// All mutation goes through the transitions here; a second call while a
/// transition is in flight is coalesced, never queued.
pub struct SessionManager {
    provider: Arc<dyn IdentityProvider>,
    bootstrapper: ProfileBootstrapper,
    snapshot: Arc<dyn SessionSnapshotStore>,
    state: RwLock<SessionState>,
    events: broadcast::Sender<(SessionEvent, SessionState)>,
}

impl SessionManager {
    /// Create a new manager wired to the given ports
    #[must_use]
    pub fn new(
        provider: Arc<dyn IdentityProvider>,
        profiles: Arc<dyn ProfileRepository>,
        snapshot: Arc<dyn SessionSnapshotStore>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);

        Self {
            provider,
            bootstrapper: ProfileBootstrapper::new(profiles),
            snapshot,
            state: RwLock::new(SessionState::Unauthenticated),
            events,
        }
    }

    /// Current state (cloned)
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Subscribe to `(event, state)` change notifications
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<(SessionEvent, SessionState)> {
        self.events.subscribe()
    }

    /// Build the authorization URL that starts the login handshake
    #[must_use]
    pub fn begin_login(&self) -> String {
        self.provider.begin_login()
    }

    /// Restore the session from the durable snapshot on startup
    ///
    /// A stored snapshot authenticates optimistically; callers should follow
    /// up with [`revalidate`](Self::revalidate) to run the freshness check.
    /// Absence (or a storage failure, treated as absence) lands in
    /// `Unauthenticated` with the loading flag cleared.
    pub async fn initialize(&self) -> SessionState {
        match self.snapshot.load().await {
            Ok(Some(session)) => {
                info!(identity_id = %session.identity.id, "session restored from snapshot");
                self.apply_and_emit(StateInput::RestoreSucceeded(session), SessionEvent::Restored)
                    .await
            }
            Ok(None) => self.apply(StateInput::RestoreMissing).await,
            Err(err) => {
                warn!(error = %err, "snapshot restore failed, starting unauthenticated");
                self.apply(StateInput::RestoreMissing).await
            }
        }
    }

    /// Freshness check for an optimistically restored session
    ///
    /// Re-resolves the identity behind the stored credential; a rejected or
    /// expired token forces a local logout.
    pub async fn revalidate(&self) -> SessionState {
        let access_token = match self.state.read().await.session() {
            Some(session) => session.identity.access_token.clone(),
            None => return self.state().await,
        };

        match self.provider.resolve_identity(&access_token).await {
            Ok(_) => self.state().await,
            Err(err) => {
                warn!(error = %err, "restored credential rejected, logging out");
                self.clear_locally().await
            }
        }
    }

    /// Complete a login from the provider callback
    ///
    /// A callback without a credential (the route is reachable directly) is
    /// a no-op: the state is left untouched and no error is raised. The raw
    /// fragment is parsed once and dropped.
    pub async fn complete_login(&self, callback_fragment: &str) -> SessionState {
        match fragment::parse(callback_fragment) {
            Some(tokens) => self.authenticate(&tokens.access_token).await,
            None => self.state().await,
        }
    }

    /// Run the full authentication flow for a bearer credential
    ///
    /// Serialized: identity resolve → profile bootstrap → snapshot
    /// write-through. Ignored (coalesced) when a flow is already in flight.
    pub async fn authenticate(&self, access_token: &str) -> SessionState {
        let Some(state) = self.apply_checked(StateInput::LoginStarted).await else {
            // Coalesced: another transition is in flight for this session
            return self.state().await;
        };
        debug_assert!(state.is_loading());

        let identity = match self.provider.resolve_identity(access_token).await {
            Ok(identity) => identity,
            Err(err) => {
                warn!(error = %err, "identity resolution failed");
                return self.apply(StateInput::AttemptFailed).await;
            }
        };

        let profile = match self.bootstrapper.resolve(&identity).await {
            Ok(profile) => profile,
            Err(err) => {
                warn!(error = %err, "profile bootstrap failed");
                return self.apply(StateInput::AttemptFailed).await;
            }
        };

        let session = Session { identity, profile };

        if let Err(err) = self.snapshot.save(&session).await {
            // The in-memory session is still valid; only restore is affected
            warn!(error = %err, "session snapshot write failed");
        }

        info!(identity_id = %session.identity.id, "session authenticated");
        self.apply_and_emit(StateInput::ProfileResolved(session), SessionEvent::SignedIn).await
    }

    /// Log out
    ///
    /// Clears the local session synchronously, then best-effort invalidates
    /// the provider credential and removes the snapshot. Idempotent: calling
    /// while `Unauthenticated` changes nothing and never fails.
    pub async fn logout(&self) -> SessionState {
        let previous = {
            let mut state = self.state.write().await;
            let previous = state.clone();
            if let Some(next) = transition(&state, StateInput::LoggedOut) {
                *state = next;
            }
            previous
        };

        let Some(session) = previous.session() else {
            return self.state().await;
        };

        let new_state = self.state().await;
        let _ = self.events.send((SessionEvent::SignedOut, new_state.clone()));

        if let Err(err) = self.provider.logout(&session.identity.access_token).await {
            // Best-effort: local logout already succeeded
            warn!(error = %err, "provider sign-out failed");
        }

        if let Err(err) = self.snapshot.clear().await {
            warn!(error = %err, "snapshot clear failed");
        }

        info!("session logged out");
        new_state
    }

    /// Replace the profile half of an authenticated session
    ///
    /// Used after onboarding promotes the role so the store reflects the
    /// durable record without a new handshake. No-op unless authenticated.
    pub async fn update_profile(&self, profile: UserProfile) -> SessionState {
        let updated = {
            let mut state = self.state.write().await;
            match &*state {
                SessionState::Authenticated(session) => {
                    let session = Session { identity: session.identity.clone(), profile };
                    *state = SessionState::Authenticated(session.clone());
                    Some(session)
                }
                _ => None,
            }
        };

        if let Some(session) = updated {
            if let Err(err) = self.snapshot.save(&session).await {
                warn!(error = %err, "session snapshot write failed");
            }
        }

        self.state().await
    }

    /// Force the local session away without touching the provider
    async fn clear_locally(&self) -> SessionState {
        if let Err(err) = self.snapshot.clear().await {
            warn!(error = %err, "snapshot clear failed");
        }
        self.apply_and_emit(StateInput::LoggedOut, SessionEvent::SignedOut).await
    }

    /// Apply an input, returning the new state (current state if coalesced)
    async fn apply(&self, input: StateInput) -> SessionState {
        let mut state = self.state.write().await;
        if let Some(next) = transition(&state, input) {
            *state = next;
        }
        state.clone()
    }

    /// Apply an input, returning `None` when it was coalesced
    async fn apply_checked(&self, input: StateInput) -> Option<SessionState> {
        let mut state = self.state.write().await;
        let next = transition(&state, input)?;
        *state = next.clone();
        Some(next)
    }

    /// Apply an input and broadcast the resulting state with an event
    async fn apply_and_emit(&self, input: StateInput, event: SessionEvent) -> SessionState {
        let state = self.apply(input).await;
        let _ = self.events.send((event, state.clone()));
        state
    }
}
