//! Hosted authentication infrastructure
//!
//! The hosted backend performs the actual credential check; this module owns
//! the client side of that handshake:
//!
//! - **[`types`]**: token set and user-info wire types with boundary
//!   validation
//! - **[`fragment`]**: one-shot parsing of the credential fragment the
//!   provider appends on redirect
//! - **[`client`]**: REST client for the `/auth/v1` surface (authorize URL,
//!   user info, sign-up, sign-out, metadata update)
//! - **[`traits`]**: client trait for dependency injection and test doubles
//!
//! # Flow
//!
//! ```text
//! authorize_url() ──► browser redirect ──► provider login
//!        ▲                                      │
//!        │                                      ▼
//!   HostedAuthClient ◄── fragment::parse ◄── /auth/callback#access_token=…
//!        │
//!        └──► fetch_user(token) ──► VerifiedUser
//! ```
//!
//! The raw fragment is parsed once and discarded; nothing in this module
//! persists a credential.

pub mod client;
pub mod fragment;
pub mod traits;
pub mod types;

// Re-export commonly used types and functions
pub use client::{HostedAuthClient, HostedAuthConfig, HostedAuthError};
pub use fragment::CallbackTokens;
pub use traits::HostedAuthApi;
pub use types::{ProviderApiError, UserInfo, VerifiedUser};
