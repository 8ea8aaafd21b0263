use serde::{Deserialize, Serialize};

use super::number::truncating_i64;
use crate::domain::Position;

/// Capture event variants
///
/// Every payload defaults missing fields to zero values: a record that omits a
/// field still classifies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
#[serde(rename_all = "snake_case")]
pub enum EloPayload {
    /// Name ↔ network id announcement (`ID_HERO`, `ID_TURRET`, `ID_BARRACKS`)
    NetworkIdMapping(NetworkIdMappingPayload),
    OnCreate(ObjectPayload),
    OnDelete(ObjectPayload),
    /// Periodic hero state snapshot
    Ping(PingPayload),
    SpellCast(SpellCastPayload),
    Damage(DamagePayload),
    Die(ActorRef),
    Kill(ActorRef),
    ChampKill(ActorRef),
    ChampDie(ActorRef),
    LevelUp(LevelUpPayload),
    GameEnd(GameEndPayload),
    NexusDestroyed(NexusDestroyedPayload),
    BasicAttack(BasicAttackPayload),
}

impl EloPayload {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NetworkIdMapping(_) => "network_id_mapping",
            Self::OnCreate(_) => "on_create",
            Self::OnDelete(_) => "on_delete",
            Self::Ping(_) => "ping",
            Self::SpellCast(_) => "spell_cast",
            Self::Damage(_) => "damage",
            Self::Die(_) => "die",
            Self::Kill(_) => "kill",
            Self::ChampKill(_) => "champ_kill",
            Self::ChampDie(_) => "champ_die",
            Self::LevelUp(_) => "level_up",
            Self::GameEnd(_) => "game_end",
            Self::NexusDestroyed(_) => "nexus_destroyed",
            Self::BasicAttack(_) => "basic_attack",
        }
    }
}

pub const ELO_TYPE_HERO: &str = "ID_HERO";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkIdMappingPayload {
    #[serde(rename = "name")]
    pub sender_name: String,
    #[serde(deserialize_with = "truncating_i64")]
    pub network_id: i64,
    /// Record name the mapping came from, e.g. `ID_HERO`
    pub elo_type: String,
}

impl NetworkIdMappingPayload {
    pub fn is_hero(&self) -> bool {
        self.elo_type == ELO_TYPE_HERO
    }
}

/// Body shared by object creation and deletion records
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectPayload {
    #[serde(deserialize_with = "truncating_i64")]
    pub network_id: i64,
    #[serde(rename = "sender")]
    pub sender_name: String,
    #[serde(deserialize_with = "truncating_i64")]
    pub team_id: i64,
    pub position: Position,
}

/// Body of records that only name an actor (deaths and kills)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorRef {
    #[serde(deserialize_with = "truncating_i64")]
    pub network_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicAttackPayload {
    #[serde(rename = "sender")]
    pub sender_name: String,
    #[serde(deserialize_with = "truncating_i64")]
    pub network_id: i64,
    #[serde(rename = "target")]
    pub target_name: String,
    #[serde(deserialize_with = "truncating_i64")]
    pub target_network_id: i64,
    pub target_position: Position,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DamagePayload {
    pub damage: f64,
    #[serde(rename = "sender")]
    pub sender_name: String,
    #[serde(deserialize_with = "truncating_i64")]
    pub network_id: i64,
    #[serde(rename = "target")]
    pub target_name: String,
    #[serde(deserialize_with = "truncating_i64")]
    pub target_network_id: i64,
    #[serde(rename = "type")]
    pub damage_type: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelUpPayload {
    #[serde(deserialize_with = "truncating_i64")]
    pub level: i64,
    #[serde(deserialize_with = "truncating_i64")]
    pub network_id: i64,
    #[serde(rename = "sender")]
    pub sender_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameEndPayload {}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NexusDestroyedPayload {
    pub nexus: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellCastPayload {
    pub start_position: Position,
    pub end_position: Position,
    #[serde(deserialize_with = "truncating_i64")]
    pub level: i64,
    #[serde(rename = "name")]
    pub spell_name: String,
    #[serde(rename = "sender")]
    pub sender_name: String,
    #[serde(deserialize_with = "truncating_i64")]
    pub network_id: i64,
    pub slot: String,
    #[serde(rename = "target")]
    pub target_name: String,
    #[serde(deserialize_with = "truncating_i64")]
    pub target_network_id: i64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PingPayload {
    #[serde(deserialize_with = "truncating_i64")]
    pub champion_id: i64,
    pub dead: bool,
    #[serde(deserialize_with = "truncating_i64")]
    pub gold: i64,
    pub health: f64,
    pub health_max: f64,
    pub in_grass: bool,
    #[serde(deserialize_with = "truncating_i64")]
    pub network_id: i64,
    #[serde(deserialize_with = "truncating_i64")]
    pub hero_index: i64,
    #[serde(deserialize_with = "truncating_i64")]
    pub level: i64,
    pub mana: f64,
    pub mana_max: f64,
    #[serde(deserialize_with = "truncating_i64")]
    pub minions_killed: i64,
    #[serde(deserialize_with = "truncating_i64")]
    pub neutral_minions_killed: i64,
    pub name: String,
    pub position: Position,
    #[serde(deserialize_with = "truncating_i64")]
    pub q_level: i64,
    pub q_exp: f64,
    #[serde(deserialize_with = "truncating_i64")]
    pub w_level: i64,
    pub w_exp: f64,
    #[serde(deserialize_with = "truncating_i64")]
    pub e_level: i64,
    pub e_exp: f64,
    #[serde(deserialize_with = "truncating_i64")]
    pub r_level: i64,
    pub r_exp: f64,
    #[serde(deserialize_with = "truncating_i64")]
    pub s1_level: i64,
    pub s1_exp: f64,
    #[serde(deserialize_with = "truncating_i64")]
    pub s2_level: i64,
    pub s2_exp: f64,
    pub under_turret: bool,
    pub under_enemy_turret: bool,
}

impl PingPayload {
    /// Cooldown expiry (log clock) pinged for a cast slot.
    pub fn cooldown_expiry(&self, slot: &str) -> Option<f64> {
        match slot {
            "Q" => Some(self.q_exp),
            "W" => Some(self.w_exp),
            "E" => Some(self.e_exp),
            "R" => Some(self.r_exp),
            "Summoner1" => Some(self.s1_exp),
            "Summoner2" => Some(self.s2_exp),
            _ => None,
        }
    }

    /// Ability levels in slot order Q, W, E, R.
    pub fn ability_levels(&self) -> [(&'static str, i64); 4] {
        [
            ("Q", self.q_level),
            ("W", self.w_level),
            ("E", self.e_level),
            ("R", self.r_level),
        ]
    }
}
