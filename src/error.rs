//! Error types for mirror operations
//!
//! Fetch failures and disk-write failures are deliberately absent here:
//! both are non-fatal and handled in place (fallback image, skipped image).
//! This enum covers the environment failures that abort a run.

use thiserror::Error;

/// Result type alias for mirror operations
pub type MirrorResult<T> = Result<T, MirrorError>;

/// Error types for mirror operations
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Record store unavailable or returned a malformed document
    #[error("Record store error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
