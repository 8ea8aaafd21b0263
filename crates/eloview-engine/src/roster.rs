use eloview_types::{MatchDetail, Participant, summoner_spell_name};

use crate::error::ParticipantError;

pub const PARTICIPANT_COUNT: usize = 10;

/// Build the roster sorted by participant id, requiring ids exactly 1..=10.
///
/// Every participant needs both a stats record and an identity; reconciling
/// identities for anonymised matches happens upstream.
pub fn participant_roster(detail: &MatchDetail) -> Result<Vec<Participant>, ParticipantError> {
    if detail.participant_identities.is_empty() {
        return Err(ParticipantError::MissingIdentities);
    }

    let mut roster: Vec<Participant> = detail
        .participants
        .iter()
        .map(|stats| {
            let participant = Participant {
                participant_id: stats.participant_id,
                champion_id: stats.champion_id,
                spell_1: spell_name(stats.spell1_id),
                spell_2: spell_name(stats.spell2_id),
                ..Default::default()
            };
            if participant.spell_1.is_empty() || participant.spell_2.is_empty() {
                tracing::warn!(
                    participant_id = stats.participant_id,
                    match_id = detail.match_id,
                    platform_id = %detail.platform_id,
                    spell1_id = stats.spell1_id,
                    spell2_id = stats.spell2_id,
                    "participant missing spell"
                );
            }
            participant
        })
        .collect();

    for identity in &detail.participant_identities {
        let participant = roster
            .iter_mut()
            .find(|p| p.participant_id == identity.participant_id)
            .ok_or(ParticipantError::MissingStats {
                participant_id: identity.participant_id,
            })?;
        let player = identity
            .player
            .as_ref()
            .ok_or(ParticipantError::MissingIdentity {
                participant_id: identity.participant_id,
            })?;
        participant.summoner_id = player.summoner_id;
        participant.summoner_name = player.summoner_name.clone();
    }

    for participant in &roster {
        let has_identity = detail
            .participant_identities
            .iter()
            .any(|identity| identity.participant_id == participant.participant_id);
        if !has_identity {
            return Err(ParticipantError::MissingIdentity {
                participant_id: participant.participant_id,
            });
        }
    }

    roster.sort_by_key(|p| p.participant_id);
    for (index, participant) in roster.iter().enumerate() {
        if participant.participant_id != index as i64 + 1 {
            return Err(ParticipantError::UnexpectedId {
                index,
                participant_id: participant.participant_id,
            });
        }
    }
    if roster.len() != PARTICIPANT_COUNT {
        return Err(ParticipantError::WrongCount {
            found: roster.len(),
        });
    }

    Ok(roster)
}

fn spell_name(id: i64) -> String {
    summoner_spell_name(id).unwrap_or_default().to_string()
}
