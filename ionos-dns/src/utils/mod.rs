//! Utility modules.

/// `changeDate` serde helpers.
pub mod datetime;

/// Zone and record name helpers.
pub mod domain;

/// Log truncation so response bodies are not logged in full.
pub mod log_sanitizer;
