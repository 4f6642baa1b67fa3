//! Tunable story pacing constants.

/// Pacing knobs for story generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryConfig {
    /// Number of beats after which the story is complete.
    pub max_beats: usize,
    /// Intensity of the opening beat.
    pub intensity_base: u32,
    /// Intensity added per beat already told.
    pub intensity_step: u32,
    /// Upper bound on intensity.
    pub intensity_cap: u32,
    /// Display seconds elapsed per beat already told.
    pub seconds_per_beat: u32,
}

impl Default for StoryConfig {
    fn default() -> Self {
        Self {
            max_beats: 5,
            intensity_base: 20,
            intensity_step: 25,
            intensity_cap: 100,
            seconds_per_beat: 30,
        }
    }
}

impl StoryConfig {
    /// Intensity of the beat that follows `beats_told` earlier beats.
    #[must_use]
    pub fn intensity_for(&self, beats_told: usize) -> u32 {
        let told = u32::try_from(beats_told).unwrap_or(u32::MAX);
        told.saturating_mul(self.intensity_step)
            .saturating_add(self.intensity_base)
            .min(self.intensity_cap)
    }
}
