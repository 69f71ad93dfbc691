//! Onboarding (cadastro empresarial)
//!
//! The one-time step of attaching an organization to a user and promoting
//! their role to manager. Validation is purely client-side and runs before
//! any network call; the submit sequence is three durable writes with no
//! compensating rollback.

pub mod form;
pub mod service;

pub use form::OnboardingForm;
pub use service::OnboardingService;
