use serde::{Deserialize, Serialize};

/// Kind of in-game actor a network id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorType {
    Hero,
    /// Lane minions (jungle camps are monsters)
    Minion,
    Monster,
    Turret,
    Inhibitor,
    Ward,
}

impl ActorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Minion => "minion",
            Self::Monster => "monster",
            Self::Turret => "turret",
            Self::Inhibitor => "inhibitor",
            Self::Ward => "ward",
        }
    }

    pub fn is_building(&self) -> bool {
        matches!(self, Self::Turret | Self::Inhibitor)
    }
}

/// A stable domain entity resolved from a log-local network id.
///
/// The meaning of `id` depends on `kind`:
/// - hero: participant id (1-10) from the match API
/// - turret/inhibitor/monster: fixed domain constant for that building or camp
/// - anything else: the original network id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ActorType>,
    pub id: i64,
}

impl Entity {
    /// Placeholder for "no target" (network id 0)
    pub fn neutral() -> Self {
        Self {
            name: String::new(),
            kind: None,
            id: 0,
        }
    }

    pub fn is_hero(&self) -> bool {
        self.kind == Some(ActorType::Hero)
    }

    /// Participant id if this entity is a resolved hero.
    pub fn participant_id(&self) -> Option<i64> {
        (self.is_hero() && self.id > 0).then_some(self.id)
    }
}
