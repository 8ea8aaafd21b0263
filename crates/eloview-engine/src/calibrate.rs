//! Log clock → match API clock calibration.
//!
//! Champion deaths are the only events both sources record. Each participant's
//! k-th death in the API timeline is paired with that participant's k-th hero
//! death in the log; the median of the per-pair differences is the offset.

use eloview_types::{EloEvent, EloPayload, MatchDetail};

use crate::error::{AlignmentError, Result};
use crate::resolver::EntityResolver;

/// Offsets further than this from the chosen one are reported.
pub const OFFSET_WARNING_SECS: f64 = 30.0;

const PARTICIPANT_IDS: std::ops::RangeInclusive<i64> = 1..=10;

/// A death attributed to one participant, on either clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticipantEvent {
    pub participant_id: i64,
    pub local_seconds: f64,
    pub match_seconds: f64,
}

impl ParticipantEvent {
    pub fn from_api(participant_id: i64, match_seconds: f64) -> Self {
        Self {
            participant_id,
            local_seconds: 0.0,
            match_seconds,
        }
    }

    pub fn from_log(participant_id: i64, local_seconds: f64) -> Self {
        Self {
            participant_id,
            local_seconds,
            match_seconds: 0.0,
        }
    }
}

/// Calibrate every event's match seconds against the match detail.
///
/// Returns the applied offset (match seconds minus log seconds).
pub fn align_api(events: &mut [EloEvent], detail: &MatchDetail) -> Result<f64> {
    align_api_with(events, detail, OFFSET_WARNING_SECS)
}

pub fn align_api_with(
    events: &mut [EloEvent],
    detail: &MatchDetail,
    warning_secs: f64,
) -> Result<f64> {
    let api = api_deaths(detail)?;

    let mut resolver = EntityResolver::from_events(events, &[]);
    for identity in &detail.participant_identities {
        if let Some(player) = &identity.player {
            resolver.add_participant(identity.participant_id, &player.summoner_name);
        }
    }
    let elo = elo_deaths(events, &resolver);

    let offset = determine_offset(&api, &elo, warning_secs)?;
    tracing::debug!(
        offset,
        api_deaths = api.len(),
        elo_deaths = elo.len(),
        "calibrated log clock"
    );

    update_match_seconds(events, offset);
    Ok(offset)
}

/// Champion deaths from the API timeline, in timeline order.
pub fn api_deaths(detail: &MatchDetail) -> std::result::Result<Vec<ParticipantEvent>, AlignmentError> {
    let deaths: Vec<_> = detail
        .champion_kills()
        .map(|(victim_id, seconds)| ParticipantEvent::from_api(victim_id, seconds))
        .collect();

    if deaths.is_empty() {
        return Err(AlignmentError::NoApiDeaths);
    }
    Ok(deaths)
}

/// `Die` records whose network id resolves to a hero, in log order.
pub fn elo_deaths(events: &[EloEvent], resolver: &EntityResolver) -> Vec<ParticipantEvent> {
    events
        .iter()
        .filter_map(|event| match &event.payload {
            EloPayload::Die(actor) => resolver
                .hero_participant(actor.network_id)
                .map(|participant_id| ParticipantEvent::from_log(participant_id, event.time)),
            _ => None,
        })
        .collect()
}

/// Median offset between paired API and log deaths.
pub fn determine_offset(
    api: &[ParticipantEvent],
    elo: &[ParticipantEvent],
    warning_secs: f64,
) -> std::result::Result<f64, AlignmentError> {
    validate_death_counts(api, elo)?;

    let mut diffs = Vec::with_capacity(api.len());
    for participant_id in PARTICIPANT_IDS {
        let api_times = api
            .iter()
            .filter(|d| d.participant_id == participant_id)
            .map(|d| d.match_seconds);
        let elo_times = elo
            .iter()
            .filter(|d| d.participant_id == participant_id)
            .map(|d| d.local_seconds);
        diffs.extend(api_times.zip(elo_times).map(|(api, elo)| api - elo));
    }

    if diffs.is_empty() {
        return Err(AlignmentError::NoApiDeaths);
    }

    diffs.sort_by(f64::total_cmp);
    let offset = diffs[diffs.len() / 2];

    for diff in &diffs {
        if (diff - offset).abs() > warning_secs {
            tracing::warn!("death diff: {:.1}, offset: {:.1}", diff, offset);
        }
    }
    Ok(offset)
}

/// Every participant must die equally often in both sources.
pub fn validate_death_counts(
    api: &[ParticipantEvent],
    elo: &[ParticipantEvent],
) -> std::result::Result<(), AlignmentError> {
    for participant_id in PARTICIPANT_IDS {
        let count = |deaths: &[ParticipantEvent]| {
            deaths
                .iter()
                .filter(|d| d.participant_id == participant_id)
                .count() as i64
        };
        let diff = count(api) - count(elo);
        if diff != 0 {
            return Err(AlignmentError::DeathCountMismatch {
                participant_id,
                diff,
            });
        }
    }
    Ok(())
}

/// Set every event's match seconds to its log time plus `offset`, floored at 0.
pub fn update_match_seconds(events: &mut [EloEvent], offset: f64) {
    for event in events {
        event.match_seconds = (event.time + offset).max(0.0);
    }
}
