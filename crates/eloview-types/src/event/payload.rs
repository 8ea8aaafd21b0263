use serde::{Deserialize, Serialize};

use crate::domain::{ActorType, Position};
use crate::tables::WardItemType;

/// Canonical event variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
#[serde(rename_all = "snake_case")]
pub enum EventPayload {
    /// Basic attack or ability cast against a target
    Attack(AttackPayload),
    BuildingKill(BuildingKillPayload),
    Damage(DamagePayload),
    /// Hero death
    Death(DeathPayload),
    EpicMonsterKill(EpicMonsterKillPayload),
    GameEnd(GameEndPayload),
    ItemUsed(ItemUsedPayload),
    LevelUp(LevelUpPayload),
    SlotUpgrade(SlotUpgradePayload),
    /// Periodic hero snapshot
    StateUpdate(StateUpdatePayload),
    /// Hero (re)appears on the map
    Spawn(SpawnPayload),
    WardPlaced(WardPlacedPayload),
    WardDeath(WardDeathPayload),
}

impl EventPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Attack(_) => "attack",
            Self::BuildingKill(_) => "building_kill",
            Self::Damage(_) => "damage",
            Self::Death(_) => "death",
            Self::EpicMonsterKill(_) => "epic_monster_kill",
            Self::GameEnd(_) => "game_end",
            Self::ItemUsed(_) => "item_used",
            Self::LevelUp(_) => "level_up",
            Self::SlotUpgrade(_) => "slot_upgrade",
            Self::StateUpdate(_) => "state_update",
            Self::Spawn(_) => "spawn",
            Self::WardPlaced(_) => "ward_placed",
            Self::WardDeath(_) => "ward_death",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttackPayload {
    /// Match seconds at which the used slot comes off cooldown
    #[serde(default)]
    pub cooldown_expires: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<Position>,
    pub attacker_id: i64,
    pub attacker_type: ActorType,
    /// "basic" for auto attacks, otherwise the spell slot (Q, W, E, R, Summoner1, ...)
    pub slot: String,
    #[serde(default)]
    pub target_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<ActorType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingKillPayload {
    pub building_type: ActorType,
    pub building_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DamagePayload {
    pub total: f64,
    /// Damage as a percentage of the victim's max health
    pub percent: f64,
    #[serde(default)]
    pub attacker_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacker_type: Option<ActorType>,
    pub victim_id: i64,
    pub victim_type: ActorType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeathPayload {
    pub position: Position,
    pub victim_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpicMonsterKillPayload {
    pub victim_id: i64,
    pub killer_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEndPayload {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemUsedPayload {
    pub participant_id: i64,
    pub slot: String,
    pub cooldown_expires: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelUpPayload {
    pub level: i64,
    pub participant_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotUpgradePayload {
    pub level: i64,
    pub slot: String,
    pub participant_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateUpdatePayload {
    pub gold: i64,
    pub health: f64,
    pub health_max: f64,
    pub in_grass: bool,
    pub minions_killed: i64,
    pub neutral_minions_killed: i64,
    pub mana: f64,
    pub mana_max: f64,
    pub participant_id: i64,
    pub position: Position,
    pub under_own_turret: bool,
    pub under_enemy_turret: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnPayload {
    pub participant_id: i64,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardPlacedPayload {
    /// Ward kind ("yellow", "blue", "pink")
    #[serde(rename = "type")]
    pub ward_type: String,
    pub item_type: WardItemType,
    pub participant_id: i64,
    pub position: Position,
    pub team_id: i64,
    pub ward_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WardDeathPayload {
    pub ward_id: i64,
}
