//! Error types for the HealthCompass core.
//!
//! All fallible operations in the core return `CompassResult<T>`.
//! Parse failures of persisted records are usually *recovered* locally
//! (the collection is reset to its empty default) rather than surfaced;
//! `CorruptRecord` exists for the cases where the caller wants to log
//! what exactly was thrown away.

use thiserror::Error;

/// The unified error type for the HealthCompass core.
#[derive(Debug, Error)]
pub enum CompassError {
    /// The backing key-value store failed to read or write a record.
    #[error("storage error: {reason}")]
    Storage { reason: String },

    /// A persisted record could not be parsed.
    ///
    /// Callers recover by resetting the collection to its empty default;
    /// this variant carries the diagnostic context for the log line.
    #[error("record '{key}' failed to parse: {reason}")]
    CorruptRecord { key: String, reason: String },

    /// A vitals entry was submitted with no populated fields.
    #[error("vitals entry has no populated fields")]
    EmptyVitalsEntry,

    /// The profile is missing or missing required fields.
    ///
    /// Plan and recommendation queries no-op on an absent profile; this
    /// error is only returned by the profile *save* command.
    #[error("profile is missing or incomplete")]
    IncompleteProfile,

    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    Config { reason: String },
}

/// Convenience alias used throughout the compass crates.
pub type CompassResult<T> = Result<T, CompassError>;
