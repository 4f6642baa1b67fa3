//! Aggregate root and value types for a story session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::content::PersonalityTag;
use super::template::Slot;

/// The cast of a story: a protagonist and up to four supporting characters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Characters {
    /// The protagonist; every beat is told from their point of view.
    #[serde(default)]
    pub main: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friend1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friend2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friend3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friend4: Option<String>,
}

impl Characters {
    /// The name filling `slot`, if any.
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&str> {
        match slot {
            Slot::Main => Some(self.main.as_str()),
            Slot::Friend1 => self.friend1.as_deref(),
            Slot::Friend2 => self.friend2.as_deref(),
            Slot::Friend3 => self.friend3.as_deref(),
            Slot::Friend4 => self.friend4.as_deref(),
        }
    }
}

/// One generated narrative unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryBeat {
    /// 1-based position in the story history.
    pub id: u32,
    /// The character telling the beat (always the protagonist).
    pub character: String,
    /// Narrative text.
    pub content: String,
    /// Display timestamp, e.g. `Just now` or `60 seconds ago`.
    pub timestamp: String,
    pub likes: u32,
    pub comments: u32,
    /// Escalation score in `0..=100`.
    pub intensity_level: u32,
}

/// The aggregate root for one ongoing story.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorySession {
    /// Session identifier.
    pub id: Uuid,
    pub characters: Characters,
    /// Setting identifier; unknown identifiers are custom settings.
    pub setting: String,
    /// Personality tags in the order first given, without duplicates.
    pub personality_tags: Vec<String>,
    /// Beats told so far, oldest first. Append-only.
    pub story_history: Vec<StoryBeat>,
    pub created_at: DateTime<Utc>,
}

impl StorySession {
    /// Creates a new session with an empty history.
    #[must_use]
    pub fn new(
        id: Uuid,
        characters: Characters,
        setting: String,
        personality_tags: Vec<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        let mut unique_tags: Vec<String> = Vec::with_capacity(personality_tags.len());
        for tag in personality_tags {
            if !unique_tags.contains(&tag) {
                unique_tags.push(tag);
            }
        }

        Self {
            id,
            characters,
            setting,
            personality_tags: unique_tags,
            story_history: Vec::new(),
            created_at,
        }
    }

    /// Returns the current version (number of beats told).
    #[allow(clippy::cast_possible_wrap)]
    #[must_use]
    pub fn version(&self) -> i64 {
        self.story_history.len() as i64
    }

    /// Number of beats told so far.
    #[must_use]
    pub fn beats_told(&self) -> usize {
        self.story_history.len()
    }

    /// Whether the session carries the given recognized tag.
    #[must_use]
    pub fn has_tag(&self, tag: PersonalityTag) -> bool {
        self.personality_tags.iter().any(|t| t == tag.as_str())
    }

    /// Appends a beat to the history.
    pub fn record_beat(&mut self, beat: StoryBeat) {
        debug_assert_eq!(beat.id as usize, self.story_history.len() + 1);
        self.story_history.push(beat);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn session_with_tags(tags: &[&str]) -> StorySession {
        StorySession::new(
            Uuid::new_v4(),
            Characters {
                main: "Riley".to_owned(),
                ..Characters::default()
            },
            "heist_crew".to_owned(),
            tags.iter().map(|t| (*t).to_owned()).collect(),
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_new_session_removes_duplicate_tags_keeping_first_order() {
        let session = session_with_tags(&["Loyal", "Ruthless", "Loyal", "Unknown"]);

        assert_eq!(session.personality_tags, vec!["Loyal", "Ruthless", "Unknown"]);
        assert_eq!(session.version(), 0);
    }

    #[test]
    fn test_has_tag_is_exact_match() {
        let session = session_with_tags(&["ruthless", "Strategic"]);

        assert!(!session.has_tag(PersonalityTag::Ruthless));
        assert!(session.has_tag(PersonalityTag::Strategic));
    }

    #[test]
    fn test_characters_serialize_without_absent_friends() {
        let characters = Characters {
            main: "Riley".to_owned(),
            friend2: Some("Jo".to_owned()),
            ..Characters::default()
        };

        let json = serde_json::to_value(&characters).unwrap();

        assert_eq!(json, serde_json::json!({ "main": "Riley", "friend2": "Jo" }));
    }

    #[test]
    fn test_characters_get_maps_every_slot() {
        let characters = Characters {
            main: "M".to_owned(),
            friend1: Some("A".to_owned()),
            friend2: Some("B".to_owned()),
            friend3: Some("C".to_owned()),
            friend4: None,
        };

        let names: Vec<Option<&str>> = Slot::ALL.iter().map(|s| characters.get(*s)).collect();

        assert_eq!(names, vec![Some("M"), Some("A"), Some("B"), Some("C"), None]);
    }
}
