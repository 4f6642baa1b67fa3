//! Test repositories — mock `SessionRepository` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use cliffhanger_core::error::DomainError;
use cliffhanger_core::repository::{SessionRepository, StoredSession};
use uuid::Uuid;

/// A session repository that records all `save` calls. Returns the configured
/// session from `load` on every call, regardless of the requested id.
#[derive(Debug)]
pub struct RecordingSessionRepository {
    load_result: Mutex<Option<StoredSession>>,
    saved: Mutex<Vec<(StoredSession, i64)>>,
}

impl RecordingSessionRepository {
    /// Create a new recording repository that will return `load_result` from
    /// every `load` call.
    #[must_use]
    pub fn new(load_result: Option<StoredSession>) -> Self {
        Self {
            load_result: Mutex::new(load_result),
            saved: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of every `(session, expected_version)` pair saved.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn saved_sessions(&self) -> Vec<(StoredSession, i64)> {
        self.saved.lock().unwrap().clone()
    }
}

#[async_trait]
impl SessionRepository for RecordingSessionRepository {
    async fn load(&self, _session_id: Uuid) -> Result<Option<StoredSession>, DomainError> {
        Ok(self.load_result.lock().unwrap().clone())
    }

    async fn save(
        &self,
        session: StoredSession,
        expected_version: i64,
    ) -> Result<(), DomainError> {
        self.saved.lock().unwrap().push((session, expected_version));
        Ok(())
    }

    async fn list_ids(&self) -> Result<Vec<Uuid>, DomainError> {
        Ok(self
            .saved
            .lock()
            .unwrap()
            .iter()
            .map(|(session, _)| session.session_id)
            .collect())
    }
}

/// A session repository that never finds a session and silently accepts
/// saves. Useful for testing "session not found" scenarios and story starts.
#[derive(Debug)]
pub struct EmptySessionRepository;

#[async_trait]
impl SessionRepository for EmptySessionRepository {
    async fn load(&self, _session_id: Uuid) -> Result<Option<StoredSession>, DomainError> {
        Ok(None)
    }

    async fn save(
        &self,
        _session: StoredSession,
        _expected_version: i64,
    ) -> Result<(), DomainError> {
        Ok(())
    }

    async fn list_ids(&self) -> Result<Vec<Uuid>, DomainError> {
        Ok(vec![])
    }
}

/// A session repository that always returns an infrastructure error. Useful
/// for testing error-handling paths.
#[derive(Debug)]
pub struct FailingSessionRepository;

#[async_trait]
impl SessionRepository for FailingSessionRepository {
    async fn load(&self, _session_id: Uuid) -> Result<Option<StoredSession>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn save(
        &self,
        _session: StoredSession,
        _expected_version: i64,
    ) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }

    async fn list_ids(&self) -> Result<Vec<Uuid>, DomainError> {
        Err(DomainError::Infrastructure("connection refused".into()))
    }
}

/// A session repository that loads the configured session but rejects every
/// save as if another request had written first.
#[derive(Debug)]
pub struct ConflictingSessionRepository(pub StoredSession);

#[async_trait]
impl SessionRepository for ConflictingSessionRepository {
    async fn load(&self, _session_id: Uuid) -> Result<Option<StoredSession>, DomainError> {
        Ok(Some(self.0.clone()))
    }

    async fn save(
        &self,
        session: StoredSession,
        expected_version: i64,
    ) -> Result<(), DomainError> {
        Err(DomainError::ConcurrencyConflict {
            session_id: session.session_id,
            expected: expected_version,
            actual: expected_version + 1,
        })
    }

    async fn list_ids(&self) -> Result<Vec<Uuid>, DomainError> {
        Ok(vec![self.0.session_id])
    }
}
