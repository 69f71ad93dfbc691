//! Hosted table access
//!
//! Profiles and organizations live in Postgres-style tables on the hosted
//! backend, reached through its REST layer. [`rest`] holds the generic
//! client; the repository modules implement the core ports on top of it.

pub mod organization_repository;
pub mod profile_repository;
pub mod rest;

pub use organization_repository::RestOrganizationRepository;
pub use profile_repository::RestProfileRepository;
pub use rest::{TableClient, TableClientConfig};
