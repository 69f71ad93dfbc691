//! Session lifecycle
//!
//! The session store is a small state machine
//! (`Unauthenticated → Loading → Authenticated`) with every transition
//! expressed as a pure function in [`state`], orchestrated by the
//! [`SessionManager`] which owns the IO: provider handshake, profile
//! bootstrap, and the durable snapshot write-through.

pub mod bootstrap;
pub mod manager;
pub mod ports;
pub mod state;

pub use bootstrap::ProfileBootstrapper;
pub use manager::SessionManager;
pub use state::{transition, StateInput};
