//! Query handlers for the story context.
//!
//! This module contains query handlers that read story sessions from the
//! repository without modifying them.

use cliffhanger_core::error::DomainError;
use cliffhanger_core::repository::SessionRepository;
use uuid::Uuid;

use crate::application::command_handlers;
use crate::domain::aggregates::StorySession;

/// Retrieves a story session by its id.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if no session exists for the ID.
/// Returns `DomainError::Infrastructure` if deserialization fails.
pub async fn get_session_by_id(
    session_id: Uuid,
    repo: &dyn SessionRepository,
) -> Result<StorySession, DomainError> {
    let stored = repo
        .load(session_id)
        .await?
        .ok_or(DomainError::SessionNotFound(session_id))?;
    command_handlers::reconstitute(&stored)
}

/// Lists the ids of every session, oldest first.
///
/// # Errors
///
/// Returns any error from the repository.
pub async fn list_session_ids(repo: &dyn SessionRepository) -> Result<Vec<Uuid>, DomainError> {
    repo.list_ids().await
}
