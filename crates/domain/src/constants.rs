//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Configuration constants
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_SCOPE: &str = "email profile";

// Durable local storage file names (single-key stores under data_dir)
pub const SESSION_SNAPSHOT_FILE: &str = "session.json";
pub const PREFERENCES_FILE: &str = "preferences.json";

// Hosted service endpoint prefix for the table layer
pub const TABLES_PATH: &str = "/rest/v1";

// Table names on the hosted backend
pub const PROFILES_TABLE: &str = "profiles";
pub const ORGANIZATIONS_TABLE: &str = "empresas";

// Error codes surfaced by the table layer
pub const UNIQUE_VIOLATION_CODE: &str = "23505";
pub const NO_ROWS_CODE: &str = "PGRST116";
