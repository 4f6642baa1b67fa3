//! Static content tables: settings, generic custom-setting content and
//! personality effects.

use std::fmt;
use std::str::FromStr;

use super::template::{Slot, Template};

/// A themed scenario domain with its own locations and opening scenarios.
#[derive(Debug, Clone, Copy)]
pub struct Setting {
    /// Identifier clients send in the start request.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// Places the opening beat may happen.
    pub locations: &'static [&'static str],
    /// Opening scenario fragments.
    pub scenarios: &'static [Template],
}

const F1: &[Slot] = &[Slot::Friend1];
const F2: &[Slot] = &[Slot::Friend2];
const F3: &[Slot] = &[Slot::Friend3];

/// The predefined settings.
pub static SETTINGS: [Setting; 6] = [
    Setting {
        id: "military_base",
        name: "Military Base",
        locations: &[
            "command center",
            "armory",
            "training ground",
            "barracks",
            "perimeter fence",
        ],
        scenarios: &[
            Template::new("discovers {friend1} is selling weapons to enemy forces", F1),
            Template::new(
                "finds classified intel that {friend2} is planning a coup against the commanding officer",
                F2,
            ),
            Template::new("catches {friend3} sabotaging critical mission equipment", F3),
            Template::new(
                "uncovers evidence that {friend1} has been feeding information to hostile operatives",
                F1,
            ),
            Template::new(
                "witnesses {friend2} executing unauthorized strikes against civilian targets",
                F2,
            ),
        ],
    },
    Setting {
        id: "zombie_apocalypse",
        name: "Zombie Apocalypse",
        locations: &[
            "abandoned warehouse",
            "rooftop",
            "underground bunker",
            "supply depot",
            "quarantine zone",
        ],
        scenarios: &[
            Template::new(
                "discovers {friend1} has been hoarding medical supplies while others die",
                F1,
            ),
            Template::new("finds out {friend2} was bitten but is hiding the infection", F2),
            Template::new("catches {friend3} making deals with hostile survivor groups", F3),
            Template::new("realizes {friend1} sabotaged the radio to prevent rescue", F1),
            Template::new(
                "uncovers that {friend2} caused the outbreak at their previous safe house",
                F2,
            ),
        ],
    },
    Setting {
        id: "space_station",
        name: "Space Station",
        locations: &[
            "command bridge",
            "engineering bay",
            "airlock chamber",
            "life support systems",
            "cargo hold",
        ],
        scenarios: &[
            Template::new(
                "discovers {friend1} is planning to jettison crew members to save oxygen",
                F1,
            ),
            Template::new("finds evidence that {friend2} sabotaged the navigation system", F2),
            Template::new(
                "catches {friend3} stealing critical resources for personal survival",
                F3,
            ),
            Template::new(
                "uncovers that {friend1} is secretly communicating with hostile alien forces",
                F1,
            ),
            Template::new(
                "realizes {friend2} has been poisoning the water supply to eliminate competition",
                F2,
            ),
        ],
    },
    Setting {
        id: "underground_fight_club",
        name: "Underground Fight Club",
        locations: &[
            "fighting pit",
            "betting floor",
            "underground tunnels",
            "weapons cache",
            "medical bay",
        ],
        scenarios: &[
            Template::new(
                "discovers {friend1} has been fixing fights and stealing prize money",
                F1,
            ),
            Template::new(
                "finds out {friend2} is working with law enforcement to shut down the operation",
                F2,
            ),
            Template::new("catches {friend3} using illegal performance enhancers", F3),
            Template::new("uncovers that {friend1} murdered the previous champion", F1),
            Template::new(
                "realizes {friend2} has been selling fight footage to rival organizations",
                F2,
            ),
        ],
    },
    Setting {
        id: "heist_crew",
        name: "Heist Crew",
        locations: &[
            "safe house",
            "target building",
            "getaway vehicle",
            "weapons depot",
            "surveillance room",
        ],
        scenarios: &[
            Template::new(
                "discovers {friend1} is planning to double-cross the crew and take all the money",
                F1,
            ),
            Template::new("finds evidence that {friend2} is an undercover federal agent", F2),
            Template::new(
                "catches {friend3} selling crew information to rival criminal organizations",
                F3,
            ),
            Template::new(
                "uncovers that {friend1} killed their previous partner for a bigger cut",
                F1,
            ),
            Template::new("realizes {friend2} has been skimming money from previous jobs", F2),
        ],
    },
    Setting {
        id: "spy_agency",
        name: "Spy Agency",
        locations: &[
            "headquarters",
            "safe house",
            "enemy embassy",
            "black site facility",
            "extraction point",
        ],
        scenarios: &[
            Template::new(
                "discovers {friend1} is a double agent working for enemy intelligence",
                F1,
            ),
            Template::new(
                "finds classified files proving {friend2} assassinated innocent civilians",
                F2,
            ),
            Template::new("catches {friend3} selling state secrets to the highest bidder", F3),
            Template::new("uncovers that {friend1} framed their mentor for treason", F1),
            Template::new(
                "realizes {friend2} has been running unauthorized assassination operations",
                F2,
            ),
        ],
    },
];

/// Opening scenarios for settings that are not in [`SETTINGS`].
pub static CUSTOM_SCENARIOS: [Template; 5] = [
    Template::new("discovers {friend1} has been secretly working against the group", F1),
    Template::new("finds evidence that {friend2} betrayed their previous team", F2),
    Template::new("catches {friend3} stealing valuable resources", F3),
    Template::new("uncovers a conspiracy involving {friend1} and outside forces", F1),
    Template::new("realizes {friend2} has been lying about their true identity", F2),
];

/// Locations for settings that are not in [`SETTINGS`].
pub static CUSTOM_LOCATIONS: [&str; 5] = [
    "main area",
    "secure location",
    "hidden chamber",
    "control room",
    "emergency exit",
];

/// Look up a predefined setting by identifier.
#[must_use]
pub fn find_setting(id: &str) -> Option<&'static Setting> {
    SETTINGS.iter().find(|setting| setting.id == id)
}

/// A recognized personality trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PersonalityTag {
    Ruthless,
    Strategic,
    Reckless,
    Loyal,
    Backstabber,
    HotHeaded,
    ColdBlooded,
    Heroic,
    Paranoid,
    Fearless,
}

impl PersonalityTag {
    /// Every recognized tag.
    pub const ALL: [PersonalityTag; 10] = [
        PersonalityTag::Ruthless,
        PersonalityTag::Strategic,
        PersonalityTag::Reckless,
        PersonalityTag::Loyal,
        PersonalityTag::Backstabber,
        PersonalityTag::HotHeaded,
        PersonalityTag::ColdBlooded,
        PersonalityTag::Heroic,
        PersonalityTag::Paranoid,
        PersonalityTag::Fearless,
    ];

    /// The tag label as clients send it.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PersonalityTag::Ruthless => "Ruthless",
            PersonalityTag::Strategic => "Strategic",
            PersonalityTag::Reckless => "Reckless",
            PersonalityTag::Loyal => "Loyal",
            PersonalityTag::Backstabber => "Backstabber",
            PersonalityTag::HotHeaded => "Hot-Headed",
            PersonalityTag::ColdBlooded => "Cold-Blooded",
            PersonalityTag::Heroic => "Heroic",
            PersonalityTag::Paranoid => "Paranoid",
            PersonalityTag::Fearless => "Fearless",
        }
    }

    /// Short phrases describing how the protagonist acts under this trait.
    #[must_use]
    pub fn effects(self) -> &'static [&'static str] {
        match self {
            PersonalityTag::Ruthless => &[
                "eliminates threats without hesitation",
                "shows no mercy to enemies",
                "prioritizes mission over lives",
            ],
            PersonalityTag::Strategic => &[
                "calculates every move carefully",
                "sets elaborate traps",
                "thinks three steps ahead",
            ],
            PersonalityTag::Reckless => &[
                "charges into danger without thinking",
                "takes unnecessary risks",
                "acts on pure instinct",
            ],
            PersonalityTag::Loyal => &[
                "refuses to abandon teammates",
                "takes bullets for allies",
                "never breaks under interrogation",
            ],
            PersonalityTag::Backstabber => &[
                "betrays allies for personal gain",
                "switches sides when convenient",
                "plants evidence against friends",
            ],
            PersonalityTag::HotHeaded => &[
                "explodes into violent rage",
                "makes impulsive decisions",
                "starts fights over minor slights",
            ],
            PersonalityTag::ColdBlooded => &[
                "kills without emotion",
                "manipulates others ruthlessly",
                "shows no empathy for victims",
            ],
            PersonalityTag::Heroic => &[
                "sacrifices self for others",
                "always tries to save everyone",
                "refuses to compromise morals",
            ],
            PersonalityTag::Paranoid => &[
                "suspects everyone of betrayal",
                "sees conspiracies everywhere",
                "trusts no one completely",
            ],
            PersonalityTag::Fearless => &[
                "faces impossible odds",
                "never backs down from a fight",
                "laughs in the face of death",
            ],
        }
    }
}

impl fmt::Display for PersonalityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a label is not one of the recognized personality tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPersonalityTag;

impl FromStr for PersonalityTag {
    type Err = UnknownPersonalityTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PersonalityTag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or(UnknownPersonalityTag)
    }
}
