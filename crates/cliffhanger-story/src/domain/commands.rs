//! Commands for the story context.

use cliffhanger_core::command::Command;
use uuid::Uuid;

use super::aggregates::Characters;

/// Command to start a new story.
#[derive(Debug, Clone)]
pub struct StartStory {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The cast of the story.
    pub characters: Characters,
    /// Setting identifier; unknown identifiers are custom settings.
    pub setting: String,
    /// Personality tag labels, recognized or not.
    pub personality_tags: Vec<String>,
}

/// Command to react to a player's choice with the next beat.
#[derive(Debug, Clone)]
pub struct MakeChoice {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The story session to advance.
    pub session_id: Uuid,
    /// Identifier of an offered choice.
    pub choice_id: Option<u32>,
    /// Free-form choice text; takes precedence over `choice_id`.
    pub choice_text: Option<String>,
}

impl Command for StartStory {
    fn command_type(&self) -> &'static str {
        "story.start_story"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

impl Command for MakeChoice {
    fn command_type(&self) -> &'static str {
        "story.make_choice"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
