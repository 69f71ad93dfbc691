//! Pure session state transitions
//!
//! The transition function takes the current state and an input and returns
//! the next state, with no IO and no side effects. The manager feeds it and
//! deals with the world; tests can drive the machine directly.

use painel_domain::{Session, SessionState};

/// Input to the session state machine
///
/// Distinct from the broadcast `SessionEvent`: inputs describe what
/// happened, events describe what listeners should react to.
#[derive(Debug, Clone)]
pub enum StateInput {
    /// A durable snapshot was found on startup
    RestoreSucceeded(Session),
    /// No durable snapshot exists
    RestoreMissing,
    /// A provider handshake or profile fetch began
    LoginStarted,
    /// Identity and profile both resolved
    ProfileResolved(Session),
    /// The in-flight attempt failed; the store collapses rather than expose
    /// a partial session
    AttemptFailed,
    /// Explicit logout, or a restored credential failed the freshness check
    LoggedOut,
}

/// Compute the next state for an input
///
/// Returns `None` when the input is coalesced: a `LoginStarted` while a
/// transition is already in flight is ignored, never queued.
#[must_use]
pub fn transition(state: &SessionState, input: StateInput) -> Option<SessionState> {
    match (state, input) {
        (SessionState::Loading, StateInput::LoginStarted) => None,
        (_, StateInput::LoginStarted) => Some(SessionState::Loading),
        (
            _,
            StateInput::RestoreSucceeded(session) | StateInput::ProfileResolved(session),
        ) => Some(SessionState::Authenticated(session)),
        (
            _,
            StateInput::RestoreMissing | StateInput::AttemptFailed | StateInput::LoggedOut,
        ) => Some(SessionState::Unauthenticated),
    }
}
