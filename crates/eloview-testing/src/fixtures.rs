//! Synthetic match data.
//!
//! A `MatchFixture` describes one match on the API clock and renders both the
//! capture log (shifted by the capture lag) and the match-detail document, so
//! the two always corroborate each other unless a test deliberately breaks
//! them.

use eloview_types::{
    ApiParticipant, CHAMPION_KILL, ELO_TYPE_HERO, Frame, MatchDetail, ParticipantIdentity,
    Player, Timeline, TimelineEvent,
};

/// First network id handed to heroes; participant `n` gets `HERO_NETWORK_BASE + n`.
pub const HERO_NETWORK_BASE: i64 = 1_073_741_824;

pub const TURRET_NETWORK_ID: i64 = 5001;
pub const INHIBITOR_NETWORK_ID: i64 = 5002;

const FRAME_INTERVAL_MS: i64 = 60_000;

#[derive(Debug, Clone)]
pub struct MatchFixture {
    pub match_id: i64,
    pub platform_id: String,
    /// Match duration on the API clock
    pub duration_secs: i64,
    /// Seconds the capture started after the match
    pub capture_lag_secs: f64,
    /// (victim participant id, API seconds)
    pub deaths: Vec<(i64, f64)>,
    log_tags: Vec<(usize, i64)>,
    truncate_at: Option<f64>,
    missing_identity: Option<i64>,
}

impl Default for MatchFixture {
    fn default() -> Self {
        Self::new(2_345_678, "NA1")
    }
}

impl MatchFixture {
    pub fn new(match_id: i64, platform_id: &str) -> Self {
        Self {
            match_id,
            platform_id: platform_id.to_string(),
            duration_secs: 1200,
            capture_lag_secs: 15.0,
            deaths: vec![
                (2, 100.0),
                (1, 200.0),
                (6, 300.0),
                (1, 400.0),
                (2, 500.0),
                (7, 600.0),
            ],
            log_tags: Vec::new(),
            truncate_at: None,
            missing_identity: None,
        }
    }

    pub fn with_capture_lag(mut self, secs: f64) -> Self {
        self.capture_lag_secs = secs;
        self
    }

    pub fn with_duration(mut self, secs: i64) -> Self {
        self.duration_secs = secs;
        self
    }

    pub fn with_deaths(mut self, deaths: &[(i64, f64)]) -> Self {
        self.deaths = deaths.to_vec();
        self
    }

    /// Attribute the `index`-th death to another participant in the log only.
    pub fn with_log_death_tag(mut self, index: usize, participant_id: i64) -> Self {
        self.log_tags.push((index, participant_id));
        self
    }

    /// Drop every log record after this many API seconds.
    pub fn truncated_at(mut self, match_secs: f64) -> Self {
        self.truncate_at = Some(match_secs);
        self
    }

    /// Publish the participant without a player identity.
    pub fn without_identity(mut self, participant_id: i64) -> Self {
        self.missing_identity = Some(participant_id);
        self
    }

    pub fn hero_network_id(participant_id: i64) -> i64 {
        HERO_NETWORK_BASE + participant_id
    }

    pub fn summoner_name(participant_id: i64) -> String {
        format!("Summoner{}", participant_id)
    }

    pub fn summoner_id(participant_id: i64) -> i64 {
        90_000 + participant_id
    }

    /// Capture log text, one tab-separated record per line.
    pub fn log_text(&self) -> String {
        let mut lines = Vec::new();

        for pid in 1..=10 {
            lines.push((
                0.0,
                record(
                    ELO_TYPE_HERO,
                    0.0,
                    &[
                        ("name", quoted(&Self::summoner_name(pid))),
                        ("network_id", Self::hero_network_id(pid).to_string()),
                    ],
                ),
            ));
        }
        lines.push((
            0.0,
            record(
                "ID_TURRET",
                0.0,
                &[
                    ("name", quoted("Turret_T1_C_05_A")),
                    ("network_id", TURRET_NETWORK_ID.to_string()),
                ],
            ),
        ));
        lines.push((
            0.0,
            record(
                "ID_BARRACKS",
                0.0,
                &[
                    ("name", quoted("Barracks_T2_R1")),
                    ("network_id", INHIBITOR_NETWORK_ID.to_string()),
                ],
            ),
        ));

        for pid in 1..=10 {
            lines.push((0.5, ping(pid, 0.5)));
        }
        lines.push((1.0, record("GAME_STALL", 1.0, &[])));

        for (index, (victim, match_secs)) in self.deaths.iter().enumerate() {
            let victim = self
                .log_tags
                .iter()
                .find(|(i, _)| *i == index)
                .map(|(_, pid)| *pid)
                .unwrap_or(*victim);
            let time = match_secs - self.capture_lag_secs;
            let killer = if victim <= 5 { victim + 5 } else { victim - 5 };
            let victim_id = Self::hero_network_id(victim).to_string();

            lines.push((
                time,
                record(
                    "DAMAGE",
                    time,
                    &[
                        ("damage", "120.5".to_string()),
                        ("network_id", Self::hero_network_id(killer).to_string()),
                        ("sender", quoted(&Self::summoner_name(killer))),
                        ("target_network_id", victim_id.clone()),
                        ("type", quoted("PHYSICAL")),
                    ],
                ),
            ));
            lines.push((time, record("DIE", time, &[("network_id", victim_id.clone())])));
            lines.push((time, record("CHAMP_DIE", time, &[("network_id", victim_id)])));
        }

        let end = self.duration_secs as f64 - self.capture_lag_secs;
        lines.push((
            end - 2.0,
            record("DIE", end - 2.0, &[("network_id", TURRET_NETWORK_ID.to_string())]),
        ));
        lines.push((
            end - 0.6,
            record("NEXUS_DESTROYED", end - 0.6, &[("nexus", quoted("HQ_T2"))]),
        ));
        lines.push((end - 0.5, record("GAME_END", end - 0.5, &[])));

        lines.sort_by(|a, b| a.0.total_cmp(&b.0));

        let cutoff = self.truncate_at.map(|secs| secs - self.capture_lag_secs);
        lines
            .into_iter()
            .filter(|(time, _)| cutoff.is_none_or(|cutoff| *time <= cutoff))
            .map(|(_, line)| line + "\n")
            .collect()
    }

    /// Match detail as published by the match API.
    pub fn match_detail(&self) -> MatchDetail {
        let participants = (1..=10)
            .map(|pid| ApiParticipant {
                participant_id: pid,
                champion_id: 100 + pid,
                spell1_id: 4,
                spell2_id: if pid % 5 == 0 { 11 } else { 14 },
                team_id: if pid <= 5 { 100 } else { 200 },
            })
            .collect();

        let participant_identities = (1..=10)
            .map(|pid| ParticipantIdentity {
                participant_id: pid,
                player: (self.missing_identity != Some(pid)).then(|| Player {
                    summoner_id: Self::summoner_id(pid),
                    summoner_name: Self::summoner_name(pid),
                }),
            })
            .collect();

        let mut frames: Vec<Frame> = (0..=self.duration_secs * 1000 / FRAME_INTERVAL_MS)
            .map(|i| Frame {
                timestamp: i * FRAME_INTERVAL_MS,
                events: Vec::new(),
            })
            .collect();
        for (victim, secs) in &self.deaths {
            let timestamp = (secs * 1000.0) as i64;
            let frame = (timestamp / FRAME_INTERVAL_MS) as usize;
            if let Some(frame) = frames.get_mut(frame) {
                frame.events.push(TimelineEvent {
                    event_type: CHAMPION_KILL.to_string(),
                    timestamp,
                    victim_id: *victim,
                    killer_id: if *victim <= 5 { victim + 5 } else { victim - 5 },
                });
            }
        }

        MatchDetail {
            match_id: self.match_id,
            platform_id: self.platform_id.clone(),
            match_duration: self.duration_secs,
            participants,
            participant_identities,
            timeline: Timeline {
                frame_interval: FRAME_INTERVAL_MS,
                frames,
            },
        }
    }

    pub fn match_detail_json(&self) -> String {
        serde_json::to_string_pretty(&self.match_detail()).unwrap_or_default()
    }
}

fn record(event: &str, time: f64, fields: &[(&str, String)]) -> String {
    let mut line = format!("{}\ttime\t{:.2}", event, time);
    for (key, value) in fields {
        line.push('\t');
        line.push_str(key);
        line.push('\t');
        line.push_str(value);
    }
    line
}

fn quoted(value: &str) -> String {
    format!("\"{}\"", value)
}

fn ping(participant_id: i64, time: f64) -> String {
    let x = 500.0 + participant_id as f64 * 100.0;
    record(
        "PING",
        time,
        &[
            ("champion_id", (100 + participant_id).to_string()),
            ("dead", "False".to_string()),
            ("gold", "512.34".to_string()),
            ("health", "580.5".to_string()),
            ("health_max", "600.0".to_string()),
            ("hero_index", (participant_id - 1).to_string()),
            ("in_grass", "false".to_string()),
            ("level", "1".to_string()),
            ("mana", "300.0".to_string()),
            ("mana_max", "300.0".to_string()),
            ("name", quoted(&MatchFixture::summoner_name(participant_id))),
            ("network_id", MatchFixture::hero_network_id(participant_id).to_string()),
            ("position", format!("X:{:.1} Y:{:.1} Z:182.1", x, x)),
            ("q_level", "1".to_string()),
            ("q_exp", "0.0".to_string()),
            ("under_turret", "true".to_string()),
            ("under_enemy_turret", "false".to_string()),
        ],
    ) + "\t"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_shifted_by_lag() {
        let fixture = MatchFixture::default().with_capture_lag(20.0);
        let text = fixture.log_text();

        assert!(text.contains("DIE\ttime\t80.00\tnetwork_id\t1073741826"));
        assert!(
            text.lines()
                .all(|line| line.trim_end().split('\t').count() % 2 == 1)
        );
        // PING lines end with a tab, as the capture tool writes them
        assert!(text.lines().any(|line| line.starts_with("PING") && line.ends_with('\t')));
    }

    #[test]
    fn test_truncation_drops_tail() {
        let fixture = MatchFixture::default().truncated_at(450.0);
        let text = fixture.log_text();

        assert!(!text.contains("GAME_END"));
        assert!(!text.contains("DIE\ttime\t485.00"));
    }

    #[test]
    fn test_match_detail_deaths() {
        let detail = MatchDetail::default();
        assert_eq!(detail.champion_kills().count(), 0);

        let detail = MatchFixture::default().match_detail();
        let kills: Vec<_> = detail.champion_kills().collect();
        assert_eq!(kills.len(), 6);
        assert_eq!(kills[0], (2, 100.0));
        assert_eq!(detail.participants.len(), 10);
    }
}
