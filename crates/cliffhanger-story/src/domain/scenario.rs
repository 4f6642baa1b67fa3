//! Opening scenario selection.

use cliffhanger_core::error::DomainError;
use cliffhanger_core::rng::{self, DeterministicRng};

use super::aggregates::Characters;
use super::content::{self, CUSTOM_LOCATIONS, CUSTOM_SCENARIOS};
use super::template::Template;

/// The situation the story opens with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// Interpolated scenario fragment, e.g. "discovers Sam is ...".
    pub text: String,
    /// Where the opening beat takes place.
    pub location: &'static str,
}

/// Picks an opening scenario and location for `setting_id`.
///
/// Known settings draw from their own tables; any other identifier is a
/// custom setting and draws from the generic tables. The template is drawn
/// before the location.
///
/// # Errors
///
/// Returns `DomainError::Interpolation` if the chosen template references a
/// character slot that `characters` leaves empty.
pub fn resolve(
    setting_id: &str,
    characters: &Characters,
    rng: &mut dyn DeterministicRng,
) -> Result<Scenario, DomainError> {
    let (scenarios, locations): (&[Template], &[&'static str]) =
        match content::find_setting(setting_id) {
            Some(setting) => (setting.scenarios, setting.locations),
            None => (&CUSTOM_SCENARIOS[..], &CUSTOM_LOCATIONS[..]),
        };

    let template = rng::choose(rng, scenarios)
        .ok_or_else(|| empty_table("scenarios", setting_id))?;
    let location = rng::choose(rng, locations)
        .ok_or_else(|| empty_table("locations", setting_id))?;

    Ok(Scenario {
        text: template.render(characters)?,
        location,
    })
}

fn empty_table(table: &str, setting_id: &str) -> DomainError {
    DomainError::Infrastructure(format!("no {table} available for setting `{setting_id}`"))
}
