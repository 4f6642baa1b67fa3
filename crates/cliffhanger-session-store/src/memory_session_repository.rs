//! In-memory implementation of the `SessionRepository` trait.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use cliffhanger_core::error::DomainError;
use cliffhanger_core::repository::{SessionRepository, StoredSession};
use tracing::{debug, instrument};
use uuid::Uuid;

#[derive(Debug, Default)]
struct Sessions {
    by_id: HashMap<Uuid, StoredSession>,
    creation_order: Vec<Uuid>,
}

/// Keyed session storage that lives as long as the process.
///
/// Every `save` is an atomic compare-and-swap on the session version, so two
/// requests that read the same version cannot both append a beat.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<Sessions>,
}

impl InMemorySessionRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: std::fmt::Display>(e: E) -> DomainError {
    DomainError::Infrastructure(format!("session store lock poisoned: {e}"))
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    #[instrument(skip(self))]
    async fn load(&self, session_id: Uuid) -> Result<Option<StoredSession>, DomainError> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions.by_id.get(&session_id).cloned())
    }

    #[instrument(skip(self, session), fields(session_id = %session.session_id, version = session.version))]
    async fn save(
        &self,
        session: StoredSession,
        expected_version: i64,
    ) -> Result<(), DomainError> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        let session_id = session.session_id;
        let actual = sessions.by_id.get(&session_id).map_or(0, |s| s.version);
        let exists = sessions.by_id.contains_key(&session_id);

        if actual != expected_version || (expected_version == 0 && exists) {
            return Err(DomainError::ConcurrencyConflict {
                session_id,
                expected: expected_version,
                actual,
            });
        }

        if !exists {
            sessions.creation_order.push(session_id);
        }
        sessions.by_id.insert(session_id, session);
        debug!(expected_version, "session saved");
        Ok(())
    }

    async fn list_ids(&self) -> Result<Vec<Uuid>, DomainError> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions.creation_order.clone())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn stored(session_id: Uuid, version: i64) -> StoredSession {
        StoredSession {
            session_id,
            version,
            payload: serde_json::json!({ "version": version }),
            created_at: Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_load_unknown_session_returns_none() {
        let repo = InMemorySessionRepository::new();

        let loaded = repo.load(Uuid::new_v4()).await.unwrap();

        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_returns_latest_version() {
        // Arrange
        let repo = InMemorySessionRepository::new();
        let id = Uuid::new_v4();

        // Act
        repo.save(stored(id, 1), 0).await.unwrap();
        repo.save(stored(id, 2), 1).await.unwrap();

        // Assert
        let loaded = repo.load(id).await.unwrap().unwrap();
        assert_eq!(loaded.version, 2);
        assert_eq!(loaded.payload["version"], 2);
    }

    #[tokio::test]
    async fn test_save_with_stale_version_is_rejected() {
        // Arrange
        let repo = InMemorySessionRepository::new();
        let id = Uuid::new_v4();
        repo.save(stored(id, 1), 0).await.unwrap();
        repo.save(stored(id, 2), 1).await.unwrap();

        // Act — a second writer that also read version 1.
        let result = repo.save(stored(id, 2), 1).await;

        // Assert
        match result {
            Err(DomainError::ConcurrencyConflict {
                session_id,
                expected,
                actual,
            }) => {
                assert_eq!(session_id, id);
                assert_eq!(expected, 1);
                assert_eq!(actual, 2);
            }
            other => panic!("expected ConcurrencyConflict, got {other:?}"),
        }
        assert_eq!(repo.load(id).await.unwrap().unwrap().version, 2);
    }

    #[tokio::test]
    async fn test_creating_an_existing_session_is_rejected() {
        let repo = InMemorySessionRepository::new();
        let id = Uuid::new_v4();
        repo.save(stored(id, 1), 0).await.unwrap();

        let result = repo.save(stored(id, 1), 0).await;

        assert!(matches!(
            result,
            Err(DomainError::ConcurrencyConflict { .. })
        ));
    }

    #[tokio::test]
    async fn test_list_ids_preserves_creation_order() {
        // Arrange
        let repo = InMemorySessionRepository::new();
        let first = Uuid::new_v4();
        let second = Uuid::new_v4();
        let third = Uuid::new_v4();

        // Act
        repo.save(stored(first, 1), 0).await.unwrap();
        repo.save(stored(second, 1), 0).await.unwrap();
        repo.save(stored(first, 2), 1).await.unwrap();
        repo.save(stored(third, 1), 0).await.unwrap();

        // Assert
        assert_eq!(repo.list_ids().await.unwrap(), vec![first, second, third]);
    }
}
