//! Match-detail document published by the game's match API.
//!
//! Only the fields conversion needs are modelled; everything else in the
//! document is ignored on deserialization.

use serde::{Deserialize, Serialize};

pub const CHAMPION_KILL: &str = "CHAMPION_KILL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetail {
    #[serde(default)]
    pub match_id: i64,
    #[serde(default)]
    pub platform_id: String,
    /// Match duration in seconds
    #[serde(default)]
    pub match_duration: i64,
    #[serde(default)]
    pub participants: Vec<ApiParticipant>,
    #[serde(default)]
    pub participant_identities: Vec<ParticipantIdentity>,
    #[serde(default)]
    pub timeline: Timeline,
}

impl MatchDetail {
    /// Champion kills in timeline order as (victim participant id, seconds).
    pub fn champion_kills(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.timeline
            .frames
            .iter()
            .flat_map(|frame| frame.events.iter())
            .filter(|event| event.event_type == CHAMPION_KILL)
            .map(|event| (event.victim_id, event.timestamp as f64 / 1000.0))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiParticipant {
    pub participant_id: i64,
    #[serde(default)]
    pub champion_id: i64,
    #[serde(default)]
    pub spell1_id: i64,
    #[serde(default)]
    pub spell2_id: i64,
    #[serde(default)]
    pub team_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantIdentity {
    pub participant_id: i64,
    /// Absent for matches whose identities were not reconciled upstream
    #[serde(default)]
    pub player: Option<Player>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    #[serde(default)]
    pub summoner_id: i64,
    #[serde(default)]
    pub summoner_name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timeline {
    #[serde(default)]
    pub frame_interval: i64,
    #[serde(default)]
    pub frames: Vec<Frame>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub events: Vec<TimelineEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEvent {
    pub event_type: String,
    /// Milliseconds since match start
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub victim_id: i64,
    #[serde(default)]
    pub killer_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_champion_kills() {
        let json = r#"{
            "matchId": 2345,
            "platformId": "NA1",
            "matchDuration": 1800,
            "timeline": {
                "frameInterval": 60000,
                "frames": [
                    {"timestamp": 0, "events": [
                        {"eventType": "ITEM_PURCHASED", "timestamp": 1200}
                    ]},
                    {"timestamp": 60000, "events": [
                        {"eventType": "CHAMPION_KILL", "timestamp": 95500, "victimId": 3, "killerId": 8},
                        {"eventType": "WARD_PLACED", "timestamp": 97000}
                    ]},
                    {"timestamp": 120000, "events": [
                        {"eventType": "CHAMPION_KILL", "timestamp": 150000, "victimId": 8, "killerId": 1}
                    ]}
                ]
            }
        }"#;

        let detail: MatchDetail = serde_json::from_str(json).unwrap();
        let kills: Vec<_> = detail.champion_kills().collect();

        assert_eq!(detail.match_duration, 1800);
        assert_eq!(kills, vec![(3, 95.5), (8, 150.0)]);
    }

    #[test]
    fn test_missing_player() {
        let json = r#"{"participantIdentities": [{"participantId": 4}]}"#;
        let detail: MatchDetail = serde_json::from_str(json).unwrap();

        assert_eq!(detail.participant_identities.len(), 1);
        assert!(detail.participant_identities[0].player.is_none());
    }
}
