//! Session repository abstraction.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::DomainError;

/// Stored representation of a story session.
#[derive(Debug, Clone)]
pub struct StoredSession {
    /// Session identifier (the storage key).
    pub session_id: Uuid,
    /// Number of story beats recorded; the optimistic concurrency token.
    pub version: i64,
    /// Serialized session document.
    pub payload: serde_json::Value,
    /// Timestamp of session creation.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Repository trait for loading, saving and listing story sessions.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Load a session by id. Returns `Ok(None)` when the id is unknown.
    async fn load(&self, session_id: Uuid) -> Result<Option<StoredSession>, DomainError>;

    /// Write a session with optimistic concurrency.
    /// `expected_version` is the version read before the update, or `0` for
    /// a session that must not exist yet.
    async fn save(&self, session: StoredSession, expected_version: i64)
    -> Result<(), DomainError>;

    /// List all session ids in creation order.
    async fn list_ids(&self) -> Result<Vec<Uuid>, DomainError>;
}
