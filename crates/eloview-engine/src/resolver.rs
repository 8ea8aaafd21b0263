use std::collections::HashMap;

use eloview_types::{
    ActorType, EloEvent, EloPayload, Entity, Participant, inhibitor_id, is_inhibitor_name,
    is_ward_name, monster_id, turret_id,
};

use crate::error::ResolutionError;

// NOTE: Two-phase resolution
//
// Network ids are log-local: a hero's id says nothing about which API
// participant it is until the summoner name behind it is matched against the
// roster. The resolver is filled first (every mapping and creation record,
// then every roster entry) and only then queried. `get` never caches, so the
// answer for an id does not depend on when it was first asked.

/// Maps log-local network ids to stable domain entities for one match.
#[derive(Debug, Default)]
pub struct EntityResolver {
    entities: HashMap<i64, Entity>,
    participant_by_name: HashMap<String, i64>,
}

impl EntityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a resolver from a whole event list and its roster.
    pub fn from_events(events: &[EloEvent], participants: &[Participant]) -> Self {
        let mut resolver = Self::new();
        for event in events {
            resolver.add_event(event);
        }
        for p in participants {
            resolver.add_participant(p.participant_id, &p.summoner_name);
        }
        resolver
    }

    /// Register the entity a record announces, if any.
    ///
    /// Mappings always overwrite; creations only fill ids not seen before.
    /// Deletions are ignored since ids are never reused within a match.
    pub fn add_event(&mut self, event: &EloEvent) {
        match &event.payload {
            EloPayload::NetworkIdMapping(mapping) => {
                let entity = if mapping.is_hero() {
                    Entity {
                        name: mapping.sender_name.clone(),
                        kind: Some(ActorType::Hero),
                        id: 0,
                    }
                } else {
                    lookup_entity(&mapping.sender_name, mapping.network_id)
                };
                self.entities.insert(mapping.network_id, entity);
            }
            EloPayload::OnCreate(object) => {
                self.entities
                    .entry(object.network_id)
                    .or_insert_with(|| lookup_entity(&object.sender_name, object.network_id));
            }
            _ => {}
        }
    }

    /// Register the roster's summoner name for a participant number.
    pub fn add_participant(&mut self, participant_id: i64, summoner_name: &str) {
        self.participant_by_name
            .insert(summoner_name.to_string(), participant_id);
    }

    /// Resolve a network id. Id 0 is the neutral "no target" entity.
    pub fn get(&self, network_id: i64) -> Result<Entity, ResolutionError> {
        if network_id == 0 {
            return Ok(Entity::neutral());
        }

        let entity = self
            .entities
            .get(&network_id)
            .ok_or(ResolutionError::UnknownNetworkId { network_id })?;

        if entity.is_hero() && entity.id == 0 {
            let participant_id = self
                .participant_by_name
                .get(&entity.name)
                .copied()
                .filter(|id| *id != 0)
                .ok_or_else(|| ResolutionError::UnknownHero {
                    network_id,
                    name: entity.name.clone(),
                })?;
            return Ok(Entity {
                id: participant_id,
                ..entity.clone()
            });
        }

        Ok(entity.clone())
    }

    /// Participant number behind a hero network id, if it resolves.
    pub fn hero_participant(&self, network_id: i64) -> Option<i64> {
        self.get(network_id).ok()?.participant_id()
    }
}

/// Type and id for a non-hero object name; unknown names keep the raw id.
pub fn lookup_entity(name: &str, network_id: i64) -> Entity {
    let (kind, id) = if name.to_lowercase().starts_with("minion") {
        (Some(ActorType::Minion), network_id)
    } else if is_ward_name(name) {
        (Some(ActorType::Ward), network_id)
    } else if let Some(id) = turret_id(name) {
        (Some(ActorType::Turret), id)
    } else if let Some(id) = monster_id(name) {
        (Some(ActorType::Monster), id)
    } else if let Some(id) = inhibitor_id(name) {
        (Some(ActorType::Inhibitor), id)
    } else {
        if is_inhibitor_name(name) {
            tracing::warn!(
                name,
                "no id found for name that seems like it should be a barracks"
            );
        }
        (None, network_id)
    };

    Entity {
        name: name.to_string(),
        kind,
        id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eloview_types::capture::{NetworkIdMappingPayload, ObjectPayload};
    use eloview_types::{INHIBITOR_RED_BOT, MONSTER_BARON, Position, TURRET_BLUE_MID_OUTER};

    fn mapping(elo_type: &str, name: &str, network_id: i64) -> EloEvent {
        EloEvent::new(
            1.0,
            EloPayload::NetworkIdMapping(NetworkIdMappingPayload {
                sender_name: name.to_string(),
                network_id,
                elo_type: elo_type.to_string(),
            }),
        )
    }

    fn created(name: &str, network_id: i64) -> EloEvent {
        EloEvent::new(
            2.0,
            EloPayload::OnCreate(ObjectPayload {
                network_id,
                sender_name: name.to_string(),
                team_id: 100,
                position: Position::default(),
            }),
        )
    }

    #[test]
    fn test_neutral_id() {
        let resolver = EntityResolver::new();
        assert_eq!(resolver.get(0).unwrap(), Entity::neutral());
    }

    #[test]
    fn test_hero_requires_participant() {
        let mut resolver = EntityResolver::new();
        assert_eq!(
            resolver.get(1073741825),
            Err(ResolutionError::UnknownNetworkId {
                network_id: 1073741825
            })
        );

        resolver.add_event(&mapping("ID_HERO", "Faker", 1073741825));
        assert!(matches!(
            resolver.get(1073741825),
            Err(ResolutionError::UnknownHero { .. })
        ));

        resolver.add_participant(3, "Faker");
        let first = resolver.get(1073741825).unwrap();
        let second = resolver.get(1073741825).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.kind, Some(ActorType::Hero));
        assert_eq!(first.id, 3);
        assert_eq!(resolver.hero_participant(1073741825), Some(3));
    }

    #[test]
    fn test_object_lookup() {
        let mut resolver = EntityResolver::new();
        resolver.add_event(&mapping("ID_TURRET", "Turret_T1_C_05_A", 11));
        resolver.add_event(&mapping("ID_BARRACKS", "Barracks_T2_R1", 12));
        resolver.add_event(&created("SRU_Baron12.1.1", 13));
        resolver.add_event(&created("Minion_T100L0S01N0003", 14));
        resolver.add_event(&created("SightWard", 15));
        resolver.add_event(&created("SRU_CampRespawnMarker", 16));

        let turret = resolver.get(11).unwrap();
        assert_eq!(turret.kind, Some(ActorType::Turret));
        assert_eq!(turret.id, TURRET_BLUE_MID_OUTER);
        assert_eq!(resolver.get(12).unwrap().id, INHIBITOR_RED_BOT);
        assert_eq!(resolver.get(13).unwrap().id, MONSTER_BARON);
        assert_eq!(resolver.get(14).unwrap().kind, Some(ActorType::Minion));
        assert_eq!(resolver.get(14).unwrap().id, 14);
        assert_eq!(resolver.get(15).unwrap().kind, Some(ActorType::Ward));

        let unknown = resolver.get(16).unwrap();
        assert_eq!(unknown.kind, None);
        assert_eq!(unknown.id, 16);
        assert_eq!(resolver.hero_participant(16), None);
    }

    #[test]
    fn test_create_does_not_override_mapping() {
        let mut resolver = EntityResolver::new();
        resolver.add_event(&mapping("ID_HERO", "Faker", 20));
        resolver.add_event(&created("Ahri", 20));
        resolver.add_participant(7, "Faker");

        assert_eq!(resolver.get(20).unwrap().id, 7);
    }
}
