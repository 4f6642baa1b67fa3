//! Story beat generation.

use cliffhanger_core::error::DomainError;
use cliffhanger_core::rng::{self, DeterministicRng};

use super::aggregates::{StoryBeat, StorySession};
use super::config::StoryConfig;
use super::content::PersonalityTag;
use super::scenario;
use super::template::{Slot, Template};

const LIKES_RANGE: (u32, u32) = (100, 800);
const COMMENTS_RANGE: (u32, u32) = (25, 150);

/// Narrative used when a continuation beat has no choice text to react to.
pub const FALLBACK_NARRATIVE: &str =
    "The mission continues with deadly precision as new threats emerge from the shadows...";

const EVOLVING_SITUATION: Template = Template::new(
    "The tactical situation evolves rapidly. {main} adapts to new threats while {friend1} and {friend2} execute contingency plans. Every second counts...",
    &[Slot::Main, Slot::Friend1, Slot::Friend2],
);

/// The kind of action a player's choice text describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Combat,
    Intel,
    Confrontation,
    Retreat,
    Sabotage,
}

impl ActionKind {
    /// Classification order; the first kind with a matching keyword wins.
    pub const ORDERED: [ActionKind; 5] = [
        ActionKind::Combat,
        ActionKind::Intel,
        ActionKind::Confrontation,
        ActionKind::Retreat,
        ActionKind::Sabotage,
    ];

    /// Lowercase keywords that select this kind.
    #[must_use]
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            ActionKind::Combat => &["attack", "fight", "strike", "assault"],
            ActionKind::Intel => &["investigate", "gather", "intel", "evidence"],
            ActionKind::Confrontation => &["confront", "direct", "face"],
            ActionKind::Retreat => &["escape", "retreat", "evacuate"],
            ActionKind::Sabotage => &["sabotage", "destroy", "eliminate"],
        }
    }

    /// The narrative this kind of action produces.
    #[must_use]
    pub fn template(self) -> Template {
        match self {
            ActionKind::Combat => Template::new(
                "{main} launches into action! {friend1} draws weapons while {friend2} calls for backup. The situation has escalated to full combat...",
                &[Slot::Main, Slot::Friend1, Slot::Friend2],
            ),
            ActionKind::Intel => Template::new(
                "{main} moves stealthily to gather intelligence. {friend3} provides overwatch while {friend1} discovers shocking evidence. The conspiracy runs deeper than anyone imagined...",
                &[Slot::Main, Slot::Friend1, Slot::Friend3],
            ),
            ActionKind::Confrontation => Template::new(
                "{main} confronts the threat head-on. {friend2} backs them up as tensions reach a breaking point. Someone's about to make a fatal mistake...",
                &[Slot::Main, Slot::Friend2],
            ),
            ActionKind::Retreat => Template::new(
                "The tactical retreat begins! {main} coordinates the escape while {friend1} covers their six. But the enemy is closing in fast...",
                &[Slot::Main, Slot::Friend1],
            ),
            ActionKind::Sabotage => Template::new(
                "{main} initiates sabotage protocols. {friend3} sets charges while {friend2} eliminates security. The mission just became a demolition job...",
                &[Slot::Main, Slot::Friend2, Slot::Friend3],
            ),
        }
    }

    /// Classifies free-form choice text by case-insensitive keyword search.
    #[must_use]
    pub fn classify(choice_text: &str) -> Option<ActionKind> {
        let lowered = choice_text.to_lowercase();
        ActionKind::ORDERED.into_iter().find(|kind| {
            kind.keywords()
                .iter()
                .any(|keyword| lowered.contains(keyword))
        })
    }
}

/// Generates the next beat for `session`.
///
/// The opening beat introduces a scenario; later beats react to
/// `choice_text`. A personality flavor sentence is appended when the session
/// has tags. Random draws happen in a fixed order: scenario and location
/// (opening only), tag and effect (when tagged), likes, comments.
///
/// # Errors
///
/// Returns `DomainError::Interpolation` when a chosen template references a
/// character the session does not have.
pub fn next_beat(
    session: &StorySession,
    choice_text: Option<&str>,
    rng: &mut dyn DeterministicRng,
    config: &StoryConfig,
) -> Result<StoryBeat, DomainError> {
    let beats_told = session.beats_told();
    let characters = &session.characters;
    let main = characters.main.as_str();

    let mut content = if beats_told == 0 {
        let opening = scenario::resolve(&session.setting, characters, rng)?;
        format!(
            "{main} enters {} and immediately senses danger. {}. The situation is about to explode into chaos...",
            opening.location, opening.text
        )
    } else {
        match choice_text.filter(|text| !text.is_empty()) {
            Some(text) => ActionKind::classify(text)
                .map_or(EVOLVING_SITUATION, ActionKind::template)
                .render(characters)?,
            None => FALLBACK_NARRATIVE.to_owned(),
        }
    };

    if let Some(effect) = personality_effect(&session.personality_tags, rng) {
        content.push_str(&format!(" {main} {effect}."));
    }

    let likes = rng.next_u32_range(LIKES_RANGE.0, LIKES_RANGE.1);
    let comments = rng.next_u32_range(COMMENTS_RANGE.0, COMMENTS_RANGE.1);

    Ok(StoryBeat {
        id: u32::try_from(beats_told + 1).unwrap_or(u32::MAX),
        character: main.to_owned(),
        content,
        timestamp: display_timestamp(beats_told, config),
        likes,
        comments,
        intensity_level: config.intensity_for(beats_told),
    })
}

/// Picks one tag, then one of its effects. Unknown tags yield nothing.
fn personality_effect(
    tags: &[String],
    rng: &mut dyn DeterministicRng,
) -> Option<&'static str> {
    let tag: PersonalityTag = rng::choose(rng, tags)?.parse().ok()?;
    rng::choose(rng, tag.effects()).copied()
}

fn display_timestamp(beats_told: usize, config: &StoryConfig) -> String {
    if beats_told == 0 {
        "Just now".to_owned()
    } else {
        let seconds = u64::try_from(beats_told)
            .unwrap_or(u64::MAX)
            .saturating_mul(u64::from(config.seconds_per_beat));
        format!("{seconds} seconds ago")
    }
}
