//! Narrative templates with named character slots.

use cliffhanger_core::error::DomainError;

use super::aggregates::Characters;

/// One of the five character slots a template may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// The protagonist.
    Main,
    /// First supporting character.
    Friend1,
    /// Second supporting character.
    Friend2,
    /// Third supporting character.
    Friend3,
    /// Fourth supporting character.
    Friend4,
}

impl Slot {
    /// All slots, in declaration order.
    pub const ALL: [Slot; 5] = [
        Slot::Main,
        Slot::Friend1,
        Slot::Friend2,
        Slot::Friend3,
        Slot::Friend4,
    ];

    /// The slot's field name, as used on the wire.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Slot::Main => "main",
            Slot::Friend1 => "friend1",
            Slot::Friend2 => "friend2",
            Slot::Friend3 => "friend3",
            Slot::Friend4 => "friend4",
        }
    }

    /// The placeholder written in template text, e.g. `{friend1}`.
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Slot::Main => "{main}",
            Slot::Friend1 => "{friend1}",
            Slot::Friend2 => "{friend2}",
            Slot::Friend3 => "{friend3}",
            Slot::Friend4 => "{friend4}",
        }
    }
}

/// A template is its text plus the exact set of slots the text references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    /// Template text containing `{slot}` placeholders.
    pub text: &'static str,
    /// Every slot referenced by `text`.
    pub slots: &'static [Slot],
}

impl Template {
    /// Build a template from its text and referenced slots.
    #[must_use]
    pub const fn new(text: &'static str, slots: &'static [Slot]) -> Self {
        Self { text, slots }
    }

    /// Fill every declared slot from `characters`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Interpolation` naming the first declared slot
    /// that `characters` leaves empty.
    pub fn render(&self, characters: &Characters) -> Result<String, DomainError> {
        let mut rendered = self.text.to_owned();
        for &slot in self.slots {
            let name = characters
                .get(slot)
                .ok_or(DomainError::Interpolation { slot: slot.name() })?;
            rendered = rendered.replace(slot.placeholder(), name);
        }
        Ok(rendered)
    }

    /// Slots whose placeholder appears in the text, in `Slot::ALL` order.
    #[must_use]
    pub fn referenced_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| self.text.contains(slot.placeholder()))
            .collect()
    }
}
