//! # Painel App
//!
//! The HTTP surface of Painel: application context wiring, the axum route
//! table, and request logging.

pub mod context;
pub mod routes;
pub mod utils;

pub use context::AppContext;
pub use routes::router;
