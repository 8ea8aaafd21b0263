//! Ward placement pairing.
//!
//! A placed ward shows up twice in the log: the owner's item cast and, a
//! moment before or after, the creation of the ward object. Only the cast
//! names the owner and only the creation names the ward id, so the two are
//! paired greedily in creation order.

use std::collections::VecDeque;

use eloview_types::{
    BaseviewEvent, EventPayload, Position, WardItemType, WardPlacedPayload, team_id,
};

use crate::error::ResolutionError;
use crate::resolver::EntityResolver;

/// Casts further apart than this from a creation are never paired with it.
pub const MAX_PAIRING_GAP_SECS: f64 = 30.0;

/// Distance units one second of time difference costs.
const SECONDS_COST: f64 = 100.0;

const MAX_COST: f64 = 100_000.0;

/// Placed events sort just before a death at the same second.
const PLACED_LEAD_SECS: f64 = 0.01;

/// A ward-creating item cast.
#[derive(Debug, Clone, PartialEq)]
pub struct WardCast {
    pub match_seconds: f64,
    pub network_id: i64,
    pub end_position: Position,
    pub item_type: WardItemType,
}

/// A ward object appearing on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct WardCreation {
    pub match_seconds: f64,
    pub network_id: i64,
    pub team_id: i64,
    pub position: Position,
}

/// Pair every creation with a cast and emit the placements.
pub fn place_wards(
    creations: &[WardCreation],
    casts: Vec<WardCast>,
    resolver: &EntityResolver,
) -> Result<Vec<BaseviewEvent>, ResolutionError> {
    if creations.len() != casts.len() {
        return Err(ResolutionError::WardCountMismatch {
            casts: casts.len(),
            creations: creations.len(),
        });
    }

    let mut casts = VecDeque::from(casts);
    let mut placed = Vec::with_capacity(creations.len());

    for creation in creations {
        let index = best_cast(creation, &casts, resolver)?;
        casts.swap(0, index);
        let Some(cast) = casts.pop_front() else {
            break;
        };

        let caster = resolver.get(cast.network_id)?;
        placed.push(BaseviewEvent::new(
            creation.match_seconds - PLACED_LEAD_SECS,
            EventPayload::WardPlaced(WardPlacedPayload {
                ward_type: cast.item_type.ward().as_str().to_string(),
                item_type: cast.item_type,
                participant_id: caster.id,
                position: creation.position,
                team_id: creation.team_id,
                ward_id: creation.network_id,
            }),
        ));
    }

    Ok(placed)
}

/// Lowest-cost same-team cast for a creation.
///
/// Cost is the xy distance between the cast target and the ward plus
/// `SECONDS_COST` per second between them. Ties keep the earliest cast.
fn best_cast(
    creation: &WardCreation,
    casts: &VecDeque<WardCast>,
    resolver: &EntityResolver,
) -> Result<usize, ResolutionError> {
    let mut best: Option<usize> = None;
    let mut best_cost = MAX_COST;

    for (index, cast) in casts.iter().enumerate() {
        let caster = resolver.get(cast.network_id)?;
        if team_id(caster.id) != creation.team_id {
            continue;
        }

        let seconds_diff = (creation.match_seconds - cast.match_seconds).abs();
        if seconds_diff > MAX_PAIRING_GAP_SECS {
            continue;
        }

        let cost = cast.end_position.distance_xy(&creation.position) + seconds_diff * SECONDS_COST;
        if cost < best_cost {
            best_cost = cost;
            best = Some(index);
        }
    }

    best.ok_or(ResolutionError::UnmatchedWard {
        seconds: creation.match_seconds,
        network_id: creation.network_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use eloview_types::capture::NetworkIdMappingPayload;
    use eloview_types::{EloEvent, EloPayload};

    fn resolver() -> EntityResolver {
        let mut resolver = EntityResolver::new();
        for (name, network_id, participant_id) in [("Blue1", 11, 1), ("Blue2", 12, 2), ("Red1", 16, 6)] {
            resolver.add_event(&EloEvent::new(
                0.0,
                EloPayload::NetworkIdMapping(NetworkIdMappingPayload {
                    sender_name: name.to_string(),
                    network_id,
                    elo_type: "ID_HERO".to_string(),
                }),
            ));
            resolver.add_participant(participant_id, name);
        }
        resolver
    }

    fn cast(match_seconds: f64, network_id: i64, x: f64, item_type: WardItemType) -> WardCast {
        WardCast {
            match_seconds,
            network_id,
            end_position: Position::new(x, 1000.0, 50.0),
            item_type,
        }
    }

    fn creation(match_seconds: f64, network_id: i64, team_id: i64, x: f64) -> WardCreation {
        WardCreation {
            match_seconds,
            network_id,
            team_id,
            position: Position::new(x, 1000.0, 50.0),
        }
    }

    fn placement(event: &BaseviewEvent) -> (f64, &WardPlacedPayload) {
        match &event.payload {
            EventPayload::WardPlaced(p) => (event.seconds, p),
            other => panic!("expected ward_placed, got {:?}", other),
        }
    }

    #[test]
    fn test_pairs_by_team_and_cost() {
        let casts = vec![
            cast(123.5, 16, 4000.0, WardItemType::YellowTrinket),
            cast(123.8, 11, 2000.0, WardItemType::SightWard),
            cast(138.0, 12, 6000.0, WardItemType::VisionWard),
        ];
        let creations = vec![
            creation(123.9, 501, 200, 4010.0),
            creation(124.1, 502, 100, 2005.0),
            creation(139.0, 503, 100, 6000.0),
        ];

        let placed = place_wards(&creations, casts, &resolver()).unwrap();
        assert_eq!(placed.len(), 3);

        let (seconds, first) = placement(&placed[0]);
        assert!((seconds - 123.89).abs() < 1e-9);
        assert_eq!(first.item_type, WardItemType::YellowTrinket);
        assert_eq!(first.participant_id, 6);
        assert_eq!(first.ward_type, "yellow");
        assert_eq!(first.ward_id, 501);

        let (_, second) = placement(&placed[1]);
        assert_eq!(second.item_type, WardItemType::SightWard);
        assert_eq!(second.participant_id, 1);

        let (_, third) = placement(&placed[2]);
        assert_eq!(third.item_type, WardItemType::VisionWard);
        assert_eq!(third.participant_id, 2);
        assert_eq!(third.ward_type, "pink");
        assert_eq!(third.team_id, 100);
    }

    #[test]
    fn test_prefers_closer_cast() {
        let casts = vec![
            cast(10.0, 11, 5000.0, WardItemType::SightWard),
            cast(10.0, 12, 1000.0, WardItemType::YellowTrinket),
        ];
        let creations = vec![
            creation(10.5, 601, 100, 1000.0),
            creation(10.6, 602, 100, 5000.0),
        ];

        let placed = place_wards(&creations, casts, &resolver()).unwrap();
        assert_eq!(placement(&placed[0]).1.participant_id, 2);
        assert_eq!(placement(&placed[1]).1.participant_id, 1);
    }

    #[test]
    fn test_count_mismatch() {
        let casts = vec![cast(10.0, 11, 0.0, WardItemType::SightWard)];

        assert_eq!(
            place_wards(&[], casts, &resolver()),
            Err(ResolutionError::WardCountMismatch {
                casts: 1,
                creations: 0
            })
        );
    }

    #[test]
    fn test_gap_too_large() {
        let casts = vec![cast(10.0, 11, 0.0, WardItemType::SightWard)];
        let creations = vec![creation(45.0, 701, 100, 0.0)];

        assert!(matches!(
            place_wards(&creations, casts, &resolver()),
            Err(ResolutionError::UnmatchedWard { network_id: 701, .. })
        ));
    }
}
