//! Routes for the story context.

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use cliffhanger_core::command::Command;
use cliffhanger_core::error::DomainError;
use cliffhanger_story::application::{command_handlers, query_handlers};
use cliffhanger_story::domain::aggregates::{Characters, StoryBeat, StorySession};
use cliffhanger_story::domain::choices::Choice;
use cliffhanger_story::domain::commands;

use crate::error::ApiError;
use crate::state::AppState;

/// Cast as sent by the client; every slot may be absent or null.
#[derive(Debug, Default, Deserialize)]
pub struct CharactersRequest {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub friend1: Option<String>,
    #[serde(default)]
    pub friend2: Option<String>,
    #[serde(default)]
    pub friend3: Option<String>,
    #[serde(default)]
    pub friend4: Option<String>,
}

impl From<CharactersRequest> for Characters {
    fn from(request: CharactersRequest) -> Self {
        Self {
            main: request.main.unwrap_or_default(),
            friend1: request.friend1,
            friend2: request.friend2,
            friend3: request.friend3,
            friend4: request.friend4,
        }
    }
}

/// Request body for POST /start.
#[derive(Debug, Deserialize)]
pub struct StartStoryRequest {
    /// The cast; `main` is required.
    #[serde(default)]
    pub characters: Option<CharactersRequest>,
    /// Setting identifier; required.
    #[serde(default)]
    pub setting: Option<String>,
    /// Personality tag labels.
    #[serde(default)]
    pub personality_tags: Option<Vec<String>>,
}

/// Response body for POST /start.
#[derive(Debug, Serialize)]
pub struct StartStoryResponse {
    pub session_id: Uuid,
    pub story_beat: StoryBeat,
    pub choices: Vec<Choice>,
    /// Intensity of the opening beat.
    pub drama_level: u32,
}

/// Request body for POST /choice.
#[derive(Debug, Deserialize)]
pub struct MakeChoiceRequest {
    /// Kept untyped so any malformed id reports "Invalid session".
    #[serde(default)]
    pub session_id: Option<Value>,
    /// Ignored unless it is a non-negative integer.
    #[serde(default)]
    pub choice_id: Option<Value>,
    #[serde(default)]
    pub choice_text: Option<String>,
}

/// Response body for POST /choice.
#[derive(Debug, Serialize)]
pub struct MakeChoiceResponse {
    pub story_beat: StoryBeat,
    /// Empty once the story is complete.
    pub choices: Vec<Choice>,
    pub drama_level: u32,
    pub story_complete: bool,
}

/// Response body for GET /sessions.
#[derive(Debug, Serialize)]
pub struct SessionListResponse {
    pub sessions: Vec<Uuid>,
    pub count: usize,
}

/// POST /start
#[instrument(skip(state, request))]
async fn start_story(
    State(state): State<AppState>,
    Json(request): Json<StartStoryRequest>,
) -> Result<Json<StartStoryResponse>, ApiError> {
    let command = commands::StartStory {
        correlation_id: Uuid::new_v4(),
        characters: request.characters.unwrap_or_default().into(),
        setting: request.setting.unwrap_or_default(),
        personality_tags: request.personality_tags.unwrap_or_default(),
    };

    info!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        setting = %command.setting,
        "handling start_story command"
    );

    let started = command_handlers::handle_start_story(
        &command,
        state.clock.as_ref(),
        &state.rng,
        &*state.session_repository,
        &state.story_config,
    )
    .await?;

    Ok(Json(StartStoryResponse {
        session_id: started.session.id,
        drama_level: started.beat.intensity_level,
        story_beat: started.beat,
        choices: started.choices,
    }))
}

/// POST /choice
#[instrument(skip(state, request), fields(session_id = ?request.session_id))]
async fn make_choice(
    State(state): State<AppState>,
    Json(request): Json<MakeChoiceRequest>,
) -> Result<Json<MakeChoiceResponse>, ApiError> {
    let session_id = request
        .session_id
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|raw| Uuid::parse_str(raw).ok())
        .ok_or(ApiError::InvalidSession)?;

    let command = commands::MakeChoice {
        correlation_id: Uuid::new_v4(),
        session_id,
        choice_id: request
            .choice_id
            .as_ref()
            .and_then(Value::as_u64)
            .and_then(|id| u32::try_from(id).ok()),
        choice_text: request.choice_text,
    };

    info!(
        correlation_id = %command.correlation_id(),
        command_type = command.command_type(),
        choice_id = ?command.choice_id,
        "handling make_choice command"
    );

    let made = command_handlers::handle_make_choice(
        &command,
        &state.rng,
        &*state.session_repository,
        &state.story_config,
    )
    .await
    .map_err(|err| match err {
        DomainError::SessionNotFound(_) => ApiError::InvalidSession,
        other => ApiError::Domain(other),
    })?;

    Ok(Json(MakeChoiceResponse {
        drama_level: made.beat.intensity_level,
        story_beat: made.beat,
        choices: made.choices,
        story_complete: made.story_complete,
    }))
}

/// GET /session/{session_id}
#[instrument(skip(state))]
async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<Json<StorySession>, ApiError> {
    let session_id = Uuid::parse_str(&session_id).map_err(|_| ApiError::SessionNotFound)?;
    let session = query_handlers::get_session_by_id(session_id, &*state.session_repository).await?;
    Ok(Json(session))
}

/// GET /sessions
#[instrument(skip(state))]
async fn list_sessions(
    State(state): State<AppState>,
) -> Result<Json<SessionListResponse>, ApiError> {
    let sessions = query_handlers::list_session_ids(&*state.session_repository).await?;
    Ok(Json(SessionListResponse {
        count: sessions.len(),
        sessions,
    }))
}

/// Returns the router for the story context.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/start", post(start_story))
        .route("/choice", post(make_choice))
        .route("/session/{session_id}", get(get_session))
        .route("/sessions", get(list_sessions))
}
