use serde::{Deserialize, Serialize};

/// Item a ward was placed with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WardItemType {
    BlueTrinket,
    SightWard,
    YellowTrinket,
    VisionWard,
}

impl WardItemType {
    /// Ward item for a ward-placing spell cast name (case-insensitive).
    pub fn from_spell_name(spell: &str) -> Option<Self> {
        match spell.to_lowercase().as_str() {
            "itemghostward" => Some(Self::SightWard),
            "trinketorblvl3" => Some(Self::BlueTrinket),
            "trinkettotemlvl1" => Some(Self::YellowTrinket),
            "jammerdevice" => Some(Self::VisionWard),
            _ => None,
        }
    }

    pub fn ward(&self) -> WardKind {
        match self {
            Self::SightWard | Self::YellowTrinket => WardKind::Yellow,
            Self::BlueTrinket => WardKind::Blue,
            Self::VisionWard => WardKind::Pink,
        }
    }
}

/// Ward kind as it behaves in game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WardKind {
    Blue,
    Pink,
    Yellow,
}

impl WardKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Pink => "pink",
            Self::Yellow => "yellow",
        }
    }
}

/// Whether an object name is a placed ward.
pub fn is_ward_name(name: &str) -> bool {
    matches!(
        name.to_lowercase().as_str(),
        "sightward" | "visionward" | "jammerdevice"
    )
}
