use serde::{Deserialize, Serialize};

use super::payload::EloPayload;

// NOTE: Two clocks
//
// `time` is the capture tool's clock: seconds since the capture started, which
// may be well after the match itself started. `match_seconds` is the match
// API's clock. It is zero until calibration assigns it, exactly once, from the
// offset agreed between log deaths and API deaths.

/// One classified record of a captured match log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EloEvent {
    /// Seconds since capture start (log clock)
    pub time: f64,

    /// Calibrated seconds on the match API clock
    #[serde(default)]
    pub match_seconds: f64,

    /// Event type and fields (flattened enum)
    #[serde(flatten)]
    pub payload: EloPayload,
}

impl EloEvent {
    pub fn new(time: f64, payload: EloPayload) -> Self {
        Self {
            time,
            match_seconds: 0.0,
            payload,
        }
    }

    pub fn kind(&self) -> &'static str {
        self.payload.kind()
    }

    /// Network id of the actor this event is about, if it has one.
    pub fn network_id(&self) -> Option<i64> {
        match &self.payload {
            EloPayload::NetworkIdMapping(p) => Some(p.network_id),
            EloPayload::OnCreate(p) | EloPayload::OnDelete(p) => Some(p.network_id),
            EloPayload::Ping(p) => Some(p.network_id),
            EloPayload::SpellCast(p) => Some(p.network_id),
            EloPayload::Damage(p) => Some(p.network_id),
            EloPayload::BasicAttack(p) => Some(p.network_id),
            EloPayload::LevelUp(p) => Some(p.network_id),
            EloPayload::Die(p)
            | EloPayload::Kill(p)
            | EloPayload::ChampKill(p)
            | EloPayload::ChampDie(p) => Some(p.network_id),
            EloPayload::GameEnd(_) | EloPayload::NexusDestroyed(_) => None,
        }
    }
}
