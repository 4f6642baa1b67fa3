//! Command handlers for the story context.
//!
//! This module contains application-level command handler functions that
//! orchestrate domain logic: load the session, generate the next beat and
//! choices, persist the session.

use std::sync::Mutex;

use cliffhanger_core::clock::Clock;
use cliffhanger_core::error::DomainError;
use cliffhanger_core::repository::{SessionRepository, StoredSession};
use cliffhanger_core::rng::DeterministicRng;
use tracing::debug;
use uuid::Uuid;

use crate::domain::aggregates::{StoryBeat, StorySession};
use crate::domain::beats;
use crate::domain::choices::{self, Choice};
use crate::domain::commands::{MakeChoice, StartStory};
use crate::domain::config::StoryConfig;

/// Result of a successfully started story.
#[derive(Debug)]
pub struct StoryStarted {
    /// The newly created session, opening beat included.
    pub session: StorySession,
    /// The opening beat.
    pub beat: StoryBeat,
    /// Choices offered after the opening beat.
    pub choices: Vec<Choice>,
}

/// Result of a successfully handled choice.
#[derive(Debug)]
pub struct ChoiceMade {
    /// The session that was advanced.
    pub session_id: Uuid,
    /// The beat generated in reaction to the choice.
    pub beat: StoryBeat,
    /// Next choices; empty once the story is complete.
    pub choices: Vec<Choice>,
    /// Whether the story has reached its final beat.
    pub story_complete: bool,
}

pub(crate) fn to_stored_session(session: &StorySession) -> Result<StoredSession, DomainError> {
    let payload = serde_json::to_value(session).map_err(|e| {
        DomainError::Infrastructure(format!("session serialization failed: {e}"))
    })?;
    Ok(StoredSession {
        session_id: session.id,
        version: session.version(),
        payload,
        created_at: session.created_at,
    })
}

/// Rebuilds a `StorySession` from its stored document.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if deserialization fails.
pub(crate) fn reconstitute(stored: &StoredSession) -> Result<StorySession, DomainError> {
    serde_json::from_value(stored.payload.clone()).map_err(|e| {
        DomainError::Infrastructure(format!("session deserialization failed: {e}"))
    })
}

/// Handles the `StartStory` command: validates the request, creates a new
/// session, tells the opening beat and persists the session.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the protagonist's name or the setting
/// is blank, `DomainError::Interpolation` if the opening scenario needs a
/// character that was not supplied, and any error from the repository.
pub async fn handle_start_story(
    command: &StartStory,
    clock: &dyn Clock,
    rng: &Mutex<dyn DeterministicRng + Send>,
    repo: &dyn SessionRepository,
    config: &StoryConfig,
) -> Result<StoryStarted, DomainError> {
    if command.characters.main.trim().is_empty() {
        return Err(DomainError::Validation(
            "Main character name is required".to_owned(),
        ));
    }
    if command.setting.trim().is_empty() {
        return Err(DomainError::Validation("Setting is required".to_owned()));
    }

    let mut session = StorySession::new(
        Uuid::new_v4(),
        command.characters.clone(),
        command.setting.clone(),
        command.personality_tags.clone(),
        clock.now(),
    );

    let beat = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        beats::next_beat(&session, None, &mut *rng_guard, config)?
    };
    session.record_beat(beat.clone());
    let choices = choices::next_choices(&session);

    repo.save(to_stored_session(&session)?, 0).await?;
    debug!(session_id = %session.id, setting = %session.setting, "story started");

    Ok(StoryStarted {
        session,
        beat,
        choices,
    })
}

/// Handles the `MakeChoice` command: loads the session, tells the next beat
/// and persists the session with an optimistic concurrency check.
///
/// Choice text wins over choice id; an id alone is mapped back to the text
/// of the matching offered choice.
///
/// # Errors
///
/// Returns `DomainError::SessionNotFound` if the session does not exist,
/// `DomainError::ConcurrencyConflict` if another request advanced the session
/// first, and `DomainError::Interpolation` if the reaction needs a character
/// that was not supplied.
pub async fn handle_make_choice(
    command: &MakeChoice,
    rng: &Mutex<dyn DeterministicRng + Send>,
    repo: &dyn SessionRepository,
    config: &StoryConfig,
) -> Result<ChoiceMade, DomainError> {
    let stored = repo
        .load(command.session_id)
        .await?
        .ok_or(DomainError::SessionNotFound(command.session_id))?;
    let mut session = reconstitute(&stored)?;
    let expected_version = session.version();

    let choice_text = command
        .choice_text
        .as_deref()
        .filter(|text| !text.is_empty())
        .or_else(|| {
            command
                .choice_id
                .and_then(|id| choices::find_offered_choice(&session, id))
                .map(|choice| choice.text)
        });

    let beat = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        beats::next_beat(&session, choice_text, &mut *rng_guard, config)?
    };
    session.record_beat(beat.clone());

    let choices = if session.beats_told() < config.max_beats {
        choices::next_choices(&session)
    } else {
        Vec::new()
    };

    repo.save(to_stored_session(&session)?, expected_version)
        .await?;
    debug!(
        session_id = %session.id,
        beats_told = session.beats_told(),
        "beat recorded"
    );

    Ok(ChoiceMade {
        session_id: session.id,
        beat,
        story_complete: choices.is_empty(),
        choices,
    })
}
