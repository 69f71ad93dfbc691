//! # Painel Core
//!
//! Business services for the session lifecycle and onboarding.
//!
//! This crate contains:
//! - The session state machine and its orchestrating manager
//! - The profile bootstrapper (create-on-first-login)
//! - The onboarding service (organization creation + role promotion)
//! - Port interfaces implemented by `painel-infra`
//!
//! ## Architecture
//! Core depends only on `painel-domain` and `painel-common`; all IO goes
//! through the port traits so services are testable with in-memory doubles.

pub mod onboarding;
pub mod session;

// Re-export the service entry points
pub use onboarding::{OnboardingForm, OnboardingService};
pub use session::{ProfileBootstrapper, SessionManager};
