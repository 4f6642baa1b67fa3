//! Choice generation.

use serde::Serialize;

use super::aggregates::StorySession;
use super::content::PersonalityTag;

/// An action the player may take next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub id: u32,
    /// Short action text, sent back as `choice_text`.
    pub text: &'static str,
    /// One-line teaser.
    pub preview: &'static str,
}

const fn choice(id: u32, text: &'static str, preview: &'static str) -> Choice {
    Choice { id, text, preview }
}

const TACTICAL: [Choice; 3] = [
    choice(1, "Launch immediate assault", "Go in guns blazing..."),
    choice(2, "Gather intelligence first", "Knowledge is power..."),
    choice(3, "Set up an ambush", "Turn the tables..."),
];

const ESCALATION: [Choice; 3] = [
    choice(4, "Call in reinforcements", "Bring the cavalry..."),
    choice(5, "Execute sabotage mission", "Destroy from within..."),
    choice(6, "Attempt tactical extraction", "Live to fight another day..."),
];

const CRITICAL: [Choice; 3] = [
    choice(7, "Sacrifice yourself for the mission", "Ultimate heroic sacrifice..."),
    choice(8, "Eliminate all witnesses", "Leave no loose ends..."),
    choice(9, "Expose the conspiracy publicly", "Blow the whole thing open..."),
];

const RESOLUTION: [Choice; 3] = [
    choice(10, "Become the new leader", "Seize control of everything..."),
    choice(11, "Disappear into the shadows", "Vanish without a trace..."),
    choice(12, "Start a revolution", "Burn it all down..."),
];

const RUTHLESS_EXTRA: Choice = choice(98, "Execute all traitors immediately", "Show no mercy...");
const STRATEGIC_EXTRA: Choice = choice(
    99,
    "Implement complex multi-phase plan",
    "Chess, not checkers...",
);

/// The choices offered after the session's latest beat.
///
/// The base set depends only on how many beats have been told; personality
/// extras follow it. The beat cap is the caller's concern.
#[must_use]
pub fn next_choices(session: &StorySession) -> Vec<Choice> {
    let base = match session.beats_told() {
        1 => &TACTICAL,
        2 => &ESCALATION,
        3 => &CRITICAL,
        _ => &RESOLUTION,
    };

    let mut choices = base.to_vec();
    if session.has_tag(PersonalityTag::Ruthless) {
        choices.push(RUTHLESS_EXTRA);
    }
    if session.has_tag(PersonalityTag::Strategic) {
        choices.push(STRATEGIC_EXTRA);
    }
    choices
}

/// Finds `choice_id` among the choices currently offered to `session`.
#[must_use]
pub fn find_offered_choice(session: &StorySession, choice_id: u32) -> Option<Choice> {
    next_choices(session)
        .into_iter()
        .find(|choice| choice.id == choice_id)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::domain::aggregates::{Characters, StoryBeat};

    fn session_after(beats: u32, tags: &[&str]) -> StorySession {
        let mut session = StorySession::new(
            Uuid::new_v4(),
            Characters {
                main: "Riley".to_owned(),
                ..Characters::default()
            },
            "space_station".to_owned(),
            tags.iter().map(|t| (*t).to_owned()).collect(),
            Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        );
        for id in 1..=beats {
            session.record_beat(StoryBeat {
                id,
                character: "Riley".to_owned(),
                content: String::new(),
                timestamp: String::new(),
                likes: 100,
                comments: 25,
                intensity_level: 20,
            });
        }
        session
    }

    fn ids(choices: &[Choice]) -> Vec<u32> {
        choices.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_base_set_follows_history_length() {
        assert_eq!(ids(&next_choices(&session_after(1, &[]))), vec![1, 2, 3]);
        assert_eq!(ids(&next_choices(&session_after(2, &[]))), vec![4, 5, 6]);
        assert_eq!(ids(&next_choices(&session_after(3, &[]))), vec![7, 8, 9]);
        assert_eq!(ids(&next_choices(&session_after(4, &[]))), vec![10, 11, 12]);
        assert_eq!(ids(&next_choices(&session_after(9, &[]))), vec![10, 11, 12]);
    }

    #[test]
    fn test_personality_extras_follow_the_base_set() {
        let session = session_after(2, &["Strategic", "Loyal", "Ruthless"]);

        let choices = next_choices(&session);

        assert_eq!(ids(&choices), vec![4, 5, 6, 98, 99]);
        assert_eq!(choices[3].text, "Execute all traitors immediately");
        assert_eq!(choices[4].text, "Implement complex multi-phase plan");
    }

    #[test]
    fn test_single_extra_for_single_matching_tag() {
        assert_eq!(
            ids(&next_choices(&session_after(1, &["Strategic"]))),
            vec![1, 2, 3, 99]
        );
    }

    #[test]
    fn test_find_offered_choice_only_sees_current_set() {
        let session = session_after(1, &["Ruthless"]);

        assert_eq!(
            find_offered_choice(&session, 2).map(|c| c.text),
            Some("Gather intelligence first")
        );
        assert_eq!(find_offered_choice(&session, 98).map(|c| c.id), Some(98));
        assert!(find_offered_choice(&session, 5).is_none());
    }

    #[test]
    fn test_choice_serializes_with_wire_field_names() {
        let json = serde_json::to_value(TACTICAL[0]).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "text": "Launch immediate assault",
                "preview": "Go in guns blazing..."
            })
        );
    }
}
