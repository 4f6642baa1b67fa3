//! Domain error types.

use thiserror::Error;
use uuid::Uuid;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A story session was not found.
    #[error("session not found: {0}")]
    SessionNotFound(Uuid),

    /// Optimistic concurrency conflict.
    #[error("concurrency conflict on session {session_id}: expected version {expected}, found {actual}")]
    ConcurrencyConflict {
        /// The session that had the conflict.
        session_id: Uuid,
        /// The expected version.
        expected: i64,
        /// The actual version found.
        actual: i64,
    },

    /// A validation error in domain logic.
    #[error("{0}")]
    Validation(String),

    /// A template referenced a character slot that the session does not fill.
    #[error("template references missing character slot `{slot}`")]
    Interpolation {
        /// Name of the unfilled slot.
        slot: &'static str,
    },

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
