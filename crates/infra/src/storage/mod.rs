//! Durable local stores
//!
//! Single-key JSON files under the configured data directory: the session
//! snapshot consumed by the persistence bridge, and the theme preference.

pub mod preferences;
pub mod snapshot;

pub use preferences::PreferencesStore;
pub use snapshot::FileSnapshotStore;
