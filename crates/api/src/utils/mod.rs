//! Shared helpers for the HTTP surface

pub mod logging;
