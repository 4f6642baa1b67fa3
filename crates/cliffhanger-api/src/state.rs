//! Shared application state.

use std::sync::{Arc, Mutex};

use cliffhanger_core::clock::Clock;
use cliffhanger_core::repository::SessionRepository;
use cliffhanger_core::rng::DeterministicRng;
use cliffhanger_story::domain::config::StoryConfig;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Time source for session creation timestamps.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Random source for story generation.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    /// Session storage.
    pub session_repository: Arc<dyn SessionRepository>,
    /// Story pacing.
    pub story_config: StoryConfig,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
        session_repository: Arc<dyn SessionRepository>,
        story_config: StoryConfig,
    ) -> Self {
        Self {
            clock,
            rng,
            session_repository,
            story_config,
        }
    }
}
